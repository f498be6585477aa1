#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;
#[cfg(target_arch = "wasm32")]
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use leptos::prelude::mount_to_body;
    use nxvet_auth::{config::AppConfig, logging};

    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    if let Err(err) = logging::init(&config.log_level) {
        web_sys::console::error_1(&format!("logging disabled: {err}").into());
    }
    tracing::debug!(version = %nxvet_auth::build_info::version_label(), "mounting app");

    mount_to_body(app::App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
