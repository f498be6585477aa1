use crate::components::{theme::Theme, Alert, AlertKind, AuthCard, Button, TextField};
use leptos::{ev::SubmitEvent, prelude::*};
use leptos_router::components::A;
use nxvet_auth::{
    form::{AuthForm, Field, FormKind},
    nav,
};

#[component]
pub fn ForgotPage() -> impl IntoView {
    let form = RwSignal::new(AuthForm::new(FormKind::Forgot));
    let (submitted, set_submitted) = signal::<Option<String>>(None);
    let not_ready = Signal::derive(move || !form.with(AuthForm::is_valid));

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(email) = super::submit(form) {
            set_submitted.set(Some(email));
        }
    };

    view! {
        <AuthCard title="Forgot Password">
            <form on:submit=on_submit>
                <TextField
                    form=form
                    field=Field::Email
                    label="Email*"
                    input_type="email"
                    autocomplete="email"
                />
                <div class="flex justify-between">
                    <Button disabled=not_ready variant_class="btn bg-[#26818e] text-white">
                        "Send reset link"
                    </Button>
                    <A href=nav::LOGIN {..} class=Theme::LINK>
                        "Return to login"
                    </A>
                </div>
            </form>
            {move || {
                submitted
                    .get()
                    .map(|email| {
                        view! {
                            <Alert
                                kind=AlertKind::Info
                                message=format!(
                                    "If an account exists for {email}, a reset link will follow.",
                                )
                            />
                        }
                    })
            }}
        </AuthCard>
    }
}
