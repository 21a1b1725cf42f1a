use dioxus::prelude::*;

use crate::types::config::UNKNOWN_MODEL;

#[component]
pub fn ModelSelector(
    model_name: String,
    #[props(!optional)] model_file: Option<String>,
    on_model_set: EventHandler<()>,
) -> Element {
    let shown = if model_name.is_empty() {
        "Loading...".to_string()
    } else {
        model_name.clone()
    };
    let tooltip = model_file.unwrap_or_else(|| UNKNOWN_MODEL.to_string());
    let status_class = if model_name.is_empty() || model_name == UNKNOWN_MODEL {
        "bg-[var(--text-tertiary)]"
    } else {
        "bg-[var(--success)]"
    };

    rsx! {
        div {
            class: "model-selector flex items-center gap-3",

            span {
                class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none",
                "Active Model"
            }

            div {
                class: "flex items-center gap-2 px-3 py-1.5 rounded-lg bg-[var(--bg-subtle)] border border-[var(--border-subtle)]",
                title: "{tooltip}",
                div { class: "w-1.5 h-1.5 rounded-full {status_class}" }
                span { class: "model-name text-sm font-medium text-[var(--text-primary)] truncate", "{shown}" }
            }

            button {
                onclick: move |_| on_model_set.call(()),
                class: "text-[var(--text-tertiary)] hover:text-[var(--text-primary)] transition-colors p-1 rounded-sm hover:bg-[var(--bg-hover)]",
                title: "Reload model",
                svg {
                    class: "w-3 h-3",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M23 4v6h-6" }
                    path { d: "M1 20v-6h6" }
                    path { d: "M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15" }
                }
            }
        }
    }
}
