use crate::components::{theme::Theme, Alert, AlertKind, AuthCard, Button, PasswordField, TextField};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use nxvet_auth::{
    form::{AuthForm, Field, FormKind},
    nav,
};

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::new(FormKind::Login));
    let (submitted, set_submitted) = signal::<Option<String>>(None);
    let not_ready = Signal::derive(move || !form.with(AuthForm::is_valid));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(email) = super::submit(form) {
            set_submitted.set(Some(email));
        }
    };

    view! {
        <AuthCard title="Login">
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
                    autocomplete="current-password"
                />
                <div class="mb-6 flex justify-between align-baseline">
                    <Button disabled=not_ready>"Submit"</Button>
                    <p class="text-center">
                        <A href=nav::FORGOT {..} class=Theme::LINK>
                            "Forgot Password"
                        </A>
                    </p>
                </div>
            </form>
            {move || {
                submitted
                    .get()
                    .map(|email| {
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message=format!("Details captured for {email}.")
                            />
                        }
                    })
            }}
        </AuthCard>
    }
}
