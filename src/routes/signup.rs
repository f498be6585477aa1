//! Registration form. Password and confirmation are checked against each other
//! on every keystroke in either field.

use crate::components::{theme::Theme, Alert, AlertKind, AuthCard, Button, PasswordField, TextField};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use nxvet_auth::{
    config::AppConfig,
    form::{AuthForm, Field, FormKind},
    nav,
};

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let form = RwSignal::new(AuthForm::new(FormKind::Signup));
    let (submitted, set_submitted) = signal::<Option<String>>(None);
    let not_ready = Signal::derive(move || !form.with(AuthForm::is_valid));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(email) = super::submit(form) {
            set_submitted.set(Some(email));
        }
    };

    view! {
        <AuthCard title="Registration">
            <form on:submit=on_submit>
                <TextField
                    form=form
                    field=Field::Email
                    label="Email*"
                    input_type="email"
                    autocomplete="email"
                />
                <PasswordField
                    form=form
                    field=Field::Password
                    label="Password*"
                    autocomplete="new-password"
                />
                <PasswordField
                    form=form
                    field=Field::ConfirmPassword
                    label="Confirm Password*"
                    autocomplete="new-password"
                />
                <div class="mb-6">
                    <Button disabled=not_ready full_width=true>
                        "Continue"
                    </Button>
                </div>
                <p class="text-center">
                    "Already registered? "
                    <A href=nav::LOGIN {..} class=Theme::LINK>
                        "Sign In"
                    </A>
                </p>
            </form>
            {move || {
                submitted
                    .get()
                    .map(|email| {
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message=format!("Registration details captured for {email}.")
                            />
                        }
                    })
            }}
            <p class="text-xs text-center mt-4">
                "By signing up, you confirm that you have accepted our "
                <a href=config.terms_url class=Theme::LINK>
                    "Terms and Conditions"
                </a>
                " and "
                <a href=config.privacy_url class=Theme::LINK>
                    "Privacy Policy"
                </a>
                "."
            </p>
        </AuthCard>
    }
}
