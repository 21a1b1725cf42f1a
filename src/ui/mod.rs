//! UI components for BabbageBox
//!
//! This module contains all user interface components built with Dioxus.

pub mod chat;
pub mod components;
pub mod memory;
pub mod sidebar;

use crate::app::AppState;
use crate::ui::chat::ChatView;
use crate::ui::components::confirm_dialog::ConfirmDialog;
use crate::ui::memory::MemoryManager;
use crate::ui::sidebar::Sidebar;
use dioxus::prelude::*;

/// Main area shown next to the sidebar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Chat,
    Memory,
}

/// Chat shell: sidebar, main area and the confirmation overlay.
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();

    // Config and conversations are fetched once when the shell mounts.
    {
        let resolver = app_state.resolver.clone();
        use_hook(move || {
            spawn(async move {
                resolver.mount().await;
            })
        });
    }

    let theme = app_state.settings.read().theme.clone();
    let view = *app_state.view.read();

    rsx! {
        div {
            class: "app-shell theme-{theme} flex h-screen w-screen overflow-hidden",

            Sidebar {}

            main {
                class: "chat-main-content flex-1 flex flex-col min-w-0",
                match view {
                    View::Chat => rsx! { ChatView {} },
                    View::Memory => rsx! { MemoryManager {} },
                }
            }

            ConfirmDialog {}
        }
    }
}
