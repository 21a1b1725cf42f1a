//! Memory management panel
//!
//! Lists stored memories with search, edit and delete.

pub mod edit_modal;

use dioxus::prelude::*;
use edit_modal::EditModal;

use crate::app::AppState;
use crate::types::memory::MemoryRecord;
use crate::ui::components::confirm_dialog::DialogConfirm;
use crate::ui::components::loading::Spinner;

#[component]
pub fn MemoryManager() -> Element {
    let app_state = use_context::<AppState>();

    {
        let memories = app_state.memories.clone();
        use_hook(move || {
            spawn(async move {
                memories.list().await;
            })
        });
    }

    let (visible, query, editing, loading) = {
        let state = app_state.memory.read();
        let visible: Vec<MemoryRecord> = state.filtered().into_iter().cloned().collect();
        (visible, state.query.clone(), state.editing.clone(), state.loading)
    };

    let store_for_search = app_state.memories.clone();

    rsx! {
        div {
            class: "memory-manager flex flex-col h-full min-h-0",

            div {
                class: "flex-none px-6 py-4 border-b border-[var(--border-subtle)] flex items-center justify-between gap-4",
                h3 { class: "text-xl font-semibold text-[var(--text-primary)]", "Memory Management" }
                input {
                    r#type: "text",
                    class: "search-box w-72 p-2.5 rounded-lg bg-[var(--bg-input)] border border-[var(--border-subtle)] text-[var(--text-primary)] text-sm outline-none focus:border-[var(--accent-primary)]",
                    placeholder: "Search memories...",
                    value: "{query}",
                    oninput: move |e| store_for_search.set_query(e.value()),
                }
            }

            div {
                class: "flex-1 overflow-y-auto p-6 scrollbar-thin",

                div {
                    class: "max-w-3xl mx-auto w-full space-y-3",

                    if loading && visible.is_empty() {
                        div {
                            class: "flex items-center justify-center gap-3 py-10",
                            Spinner { size: 16 }
                            span { class: "text-sm text-[var(--text-secondary)]", "Loading memories..." }
                        }
                    } else if visible.is_empty() {
                        div {
                            class: "flex flex-col items-center justify-center py-10 text-[var(--text-tertiary)] opacity-60",
                            span { class: "text-sm", "No memories found" }
                        }
                    } else {
                        for record in visible {
                            MemoryRow { key: "{record.id}", record: record.clone() }
                        }
                    }
                }
            }

            if let Some(draft) = editing {
                EditModal { draft: draft }
            }
        }
    }
}

#[component]
fn MemoryRow(record: MemoryRecord) -> Element {
    let app_state = use_context::<AppState>();
    let id = record.id;
    let created = record.created_label();

    let store_for_edit = app_state.memories.clone();
    let store_for_delete = app_state.memories.clone();
    let confirm = DialogConfirm::new(app_state.confirm);

    rsx! {
        div {
            class: "memory-item p-4 rounded-xl bg-white/[0.03] border border-[var(--border-subtle)] flex items-start gap-4",

            div {
                class: "flex-1 min-w-0",
                p { class: "text-sm text-[var(--text-primary)] whitespace-pre-wrap break-words", "{record.content}" }
                div {
                    class: "mt-2 flex gap-3 text-[10px] font-mono text-[var(--text-tertiary)]",
                    span { "{created}" }
                    if let Some(conversation_id) = record.conversation_id {
                        span { "conversation #{conversation_id}" }
                    }
                }
            }

            div {
                class: "flex gap-2 shrink-0",
                button {
                    class: "btn-ghost text-xs px-3 py-1.5",
                    title: "Edit memory",
                    onclick: move |_| {
                        store_for_edit.begin_edit(id);
                    },
                    "Edit"
                }
                button {
                    class: "btn-aurora text-xs px-3 py-1.5",
                    title: "Delete memory",
                    onclick: move |_| {
                        let store = store_for_delete.clone();
                        spawn(async move {
                            store.delete(id, &confirm).await;
                        });
                    },
                    "Delete"
                }
            }
        }
    }
}
