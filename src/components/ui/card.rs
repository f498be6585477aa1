use crate::components::theme::Theme;
use leptos::prelude::*;

/// Centered card with a heading, used by every auth page.
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center flex-1 bg-[#f1f1f1]">
            <div class=Theme::CARD>
                <h2 class=Theme::TITLE>{title}</h2>
                {children()}
            </div>
        </div>
    }
}
