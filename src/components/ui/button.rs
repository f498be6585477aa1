use leptos::prelude::*;

/// Submit button that greys out while the form is not ready.
#[component]
pub fn Button(
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional)] full_width: bool,
    #[prop(optional)] variant_class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if variant_class.is_empty() {
        "btn btn-primary"
    } else {
        variant_class
    };

    view! {
        <button
            type="submit"
            class=class
            class:w-full=full_width
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}
