use dioxus::prelude::*;

#[component]
pub fn Spinner(#[props(default = 16)] size: u32) -> Element {
    rsx! {
        div {
            class: "spinner animate-spin rounded-full border-2 border-[var(--border-subtle)] border-t-[var(--accent-primary)]",
            style: "width: {size}px; height: {size}px;",
        }
    }
}
