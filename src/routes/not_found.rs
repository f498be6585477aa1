//! Fallback for unknown paths.

use leptos::prelude::*;
use leptos_router::components::A;
use nxvet_auth::nav;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4">
            <h1 class="text-9xl font-black text-gray-200 select-none">"404"</h1>
            <p class="mt-4 text-gray-500 max-w-sm mx-auto">
                "The page you requested does not exist."
            </p>
            <div class="mt-6 flex flex-col sm:flex-row items-center justify-center gap-4">
                <A href=nav::LOGIN {..} class="btn btn-primary">
                    "Go to login"
                </A>
                <button
                    class="btn"
                    on:click=move |_| {
                        if let Some(history) = web_sys::window().and_then(|window| window.history().ok()) {
                            let _ = history.back();
                        }
                    }
                >
                    "Go Back"
                </button>
            </div>
        </div>
    }
}
