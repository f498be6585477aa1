mod forgot;
mod login;
mod not_found;
mod signup;

pub(crate) use forgot::ForgotPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use signup::SignupPage;

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;
use nxvet_auth::form::{AuthForm, LogSubmitter};

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <AppShell>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=LoginPage />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignupPage />
                <Route path=path!("/forgot") view=ForgotPage />
            </Routes>
        </AppShell>
    }
}

/// Submits the page's form and returns the email it was submitted for.
fn submit(form: RwSignal<AuthForm>) -> Option<String> {
    form.with_untracked(|form| {
        let email = form.payload()?.email().to_string();
        form.submit(&LogSubmitter).then_some(email)
    })
}
