//! Chat area
//!
//! Header with the model selector, and the active profile's preset.

pub mod model_selector;

use dioxus::prelude::*;
use model_selector::ModelSelector;

use crate::app::AppState;
use crate::types::config::assistant_label;

#[component]
pub fn ChatView() -> Element {
    let app_state = use_context::<AppState>();
    let (model_name, model_file) = {
        let model = app_state.model.read();
        (model.model_name.clone(), model.model_file.clone())
    };
    let profile = app_state.current_profile.read().profile();
    let assistant = assistant_label(&model_name).to_string();

    let handle_model_set = {
        let resolver = app_state.resolver.clone();
        move |_: ()| {
            let resolver = resolver.clone();
            spawn(async move {
                resolver.on_model_set().await;
            });
        }
    };

    rsx! {
        div {
            class: "chat-container flex flex-col h-full min-h-0",

            header {
                class: "flex-none flex items-center justify-between px-6 py-3 border-b border-[var(--border-subtle)]",
                h1 { class: "text-base font-semibold text-[var(--text-primary)]", "{profile.name}" }
                ModelSelector {
                    model_name: model_name.clone(),
                    model_file: model_file,
                    on_model_set: handle_model_set,
                }
            }

            div {
                class: "chat-centered-wrapper flex-1 overflow-y-auto p-6 scrollbar-thin",

                div {
                    class: "max-w-3xl mx-auto w-full space-y-6",

                    div {
                        class: "p-6 rounded-2xl bg-white/[0.03] border border-white/[0.08]",

                        div {
                            class: "flex items-center gap-3 mb-3",
                            i { class: "fa {profile.icon} text-[var(--accent-primary)]" }
                            h3 { class: "text-lg font-semibold text-[var(--text-primary)]", "{profile.name}" }
                        }
                        p { class: "text-sm text-[var(--text-secondary)] mb-4", "{profile.description}" }

                        if let Some(prompt) = profile.system_prompt {
                            div {
                                span {
                                    class: "text-[10px] uppercase tracking-widest text-[var(--text-tertiary)] font-semibold",
                                    "System prompt"
                                }
                                p { class: "mt-1 text-sm font-mono text-[var(--text-secondary)]", "{prompt}" }
                            }
                        }

                        if !profile.params.is_empty() {
                            div {
                                class: "flex gap-2 mt-4",
                                if let Some(temperature) = profile.params.temperature {
                                    span {
                                        class: "px-2 py-1 rounded-md text-xs font-mono bg-white/[0.05] text-[var(--text-secondary)]",
                                        "temperature {temperature}"
                                    }
                                }
                                if profile.params.include_memory == Some(false) {
                                    span {
                                        class: "px-2 py-1 rounded-md text-xs font-mono bg-white/[0.05] text-[var(--text-secondary)]",
                                        "memory off"
                                    }
                                }
                            }
                        }
                    }

                    div {
                        class: "flex flex-col items-center justify-center py-16 text-[var(--text-tertiary)] gap-2",
                        span { class: "text-sm", "Start a conversation with {assistant}" }
                    }
                }
            }
        }
    }
}
