//! Labelled inputs bound to an [`AuthForm`]. Every input event goes through
//! `AuthForm::set_field`, so the hint under the field always reflects the
//! latest value.

use crate::components::theme::Theme;
use leptos::prelude::*;
use nxvet_auth::form::{AuthForm, Field};
use tracing::warn;

fn update_field(form: RwSignal<AuthForm>, field: Field, value: String) {
    form.update(|form| {
        if let Err(err) = form.set_field(field, value) {
            warn!(form = %form.kind(), %err, "input ignored");
        }
    });
}

/// Prompt or error text under a field.
#[component]
fn Hint(form: RwSignal<AuthForm>, field: Field) -> impl IntoView {
    move || {
        form.with(|form| form.hint(field)).map(|hint| {
            let class = if hint.is_error() {
                Theme::ERROR
            } else {
                Theme::PROMPT
            };
            view! { <p class=class>{hint.message().to_string()}</p> }
        })
    }
}

#[component]
pub fn TextField(
    form: RwSignal<AuthForm>,
    field: Field,
    label: &'static str,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let id = field.name();

    view! {
        <div class="mb-4">
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <input
                id=id
                type=input_type
                class=Theme::INPUT
                class:border-red-500=move || form.with(|form| form.has_error(field))
                autocomplete=autocomplete.unwrap_or("off")
                required
                prop:value=move || form.with(|form| form.value(field).to_string())
                on:input=move |event| update_field(form, field, event_target_value(&event))
            />
            <Hint form=form field=field />
        </div>
    }
}

/// Masked input with a visibility toggle. Starts masked.
#[component]
pub fn PasswordField(
    form: RwSignal<AuthForm>,
    field: Field,
    label: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
) -> impl IntoView {
    let (show, set_show) = signal(false);
    let id = field.name();

    view! {
        <div class="mb-4 relative">
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <input
                id=id
                type=move || if show.get() { "text" } else { "password" }
                class=Theme::INPUT_MASKED
                class:border-red-500=move || form.with(|form| form.has_error(field))
                autocomplete=autocomplete.unwrap_or("off")
                required
                prop:value=move || form.with(|form| form.value(field).to_string())
                on:input=move |event| update_field(form, field, event_target_value(&event))
            />
            <button
                type="button"
                class="absolute top-9 right-3 cursor-pointer text-gray-500"
                aria-label=move || if show.get() { "Hide password" } else { "Show password" }
                on:click=move |_| set_show.update(|show| *show = !*show)
            >
                <span class="material-symbols-outlined text-xl">
                    {move || if show.get() { "visibility" } else { "visibility_off" }}
                </span>
            </button>
            <Hint form=form field=field />
        </div>
    }
}
