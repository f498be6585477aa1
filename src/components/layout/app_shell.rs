//! Shared page frame: logo header with the route-aware sign in / sign up
//! prompt, a scrolling content area and a build footer.

use crate::components::theme::Theme;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};
use nxvet_auth::{build_info, nav};

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let location = use_location();
    let auth_link = Memo::new(move |_| nav::auth_link_for(&location.pathname.get()));

    view! {
        <div class="flex flex-col min-h-screen bg-[#f1f1f1]">
            <header class="p-4 flex justify-between items-center bg-[#f1f1f1]">
                <A href=nav::HOME>
                    <img src="/nxvet.svg" class="h-[50px]" alt="NXVet" />
                </A>
                <p>
                    {move || auth_link.get().prompt}
                    " "
                    {move || {
                        let link = auth_link.get();
                        view! {
                            <A href=link.href {..} class=Theme::LINK>
                                {link.label}
                            </A>
                        }
                    }}
                </p>
            </header>
            <main id="page-content" class="flex-1 flex flex-col p-2 pt-6 overflow-auto">
                {children()}
            </main>
            <footer class="p-2 text-center text-xs text-gray-400">
                {build_info::version_label()}
            </footer>
        </div>
    }
}
