use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use nxvet_auth::config::AppConfig;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppConfig::load());

    view! {
        <Router>
            <AppRoutes />
        </Router>
    }
}
