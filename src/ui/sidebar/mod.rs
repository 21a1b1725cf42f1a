//! Sidebar: navigation, conversations, profiles and theme toggle.

pub mod conversation_list;
pub mod profile_picker;

use crate::app::AppState;
use crate::storage::settings::save_settings;
use crate::ui::View;
use conversation_list::ConversationList;
use dioxus::prelude::*;
use profile_picker::ProfilePicker;

#[component]
pub fn Sidebar() -> Element {
    let app_state = use_context::<AppState>();
    let mut view = app_state.view;
    let mut settings = app_state.settings;
    let current = *view.read();
    let theme_label = if settings.read().theme == "dark" { "Light mode" } else { "Dark mode" };

    let toggle_theme = move |_| {
        let mut settings = settings.write();
        settings.theme = if settings.theme == "dark" { "light" } else { "dark" }.to_string();
        if let Err(e) = save_settings(&settings) {
            tracing::error!("Failed to save settings: {}", e);
        }
    };

    rsx! {
        aside {
            class: "sidebar app-sidebar flex flex-col w-72 shrink-0 h-full border-r border-[var(--border-subtle)] bg-[var(--bg-sidebar)]",

            div {
                class: "px-4 py-5 text-lg font-semibold text-[var(--text-primary)] select-none",
                "BabbageBox"
            }

            nav {
                class: "flex gap-1 px-3 pb-3",
                NavButton {
                    active: current == View::Chat,
                    onclick: move |_| view.set(View::Chat),
                    label: "Chat",
                }
                NavButton {
                    active: current == View::Memory,
                    onclick: move |_| view.set(View::Memory),
                    label: "Memory",
                }
            }

            ProfilePicker {}

            ConversationList {}

            div {
                class: "p-3 border-t border-[var(--border-subtle)]",
                button {
                    class: "btn-ghost w-full text-xs",
                    onclick: toggle_theme,
                    "{theme_label}"
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<MouseEvent>, label: String) -> Element {
    let classes = if active {
        "nav-pill active text-[var(--text-primary)] bg-[var(--bg-hover)]"
    } else {
        "nav-pill text-[var(--text-tertiary)] hover:text-[var(--text-secondary)]"
    };

    rsx! {
        button {
            class: "flex-1 py-2 px-4 rounded-lg text-sm font-medium transition-all {classes}",
            onclick: onclick,
            "{label}"
        }
    }
}
