use dioxus::prelude::*;

use crate::app::AppState;
use crate::store::EditDraft;

#[component]
pub fn EditModal(draft: EditDraft) -> Element {
    let app_state = use_context::<AppState>();
    let store_for_input = app_state.memories.clone();
    let store_for_cancel = app_state.memories.clone();
    let store_for_save = app_state.memories.clone();
    let saving = draft.saving;

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 backdrop-blur-sm z-40 flex items-center justify-center p-4",

            div {
                class: "edit-modal w-full max-w-lg bg-[var(--bg-secondary)] rounded-xl border border-[var(--border-subtle)] p-6 shadow-xl",
                onclick: move |e| e.stop_propagation(),

                h3 {
                    class: "text-lg font-semibold text-[var(--text-primary)] mb-4",
                    "Edit Memory"
                }

                textarea {
                    class: "w-full min-h-40 p-3 rounded-lg bg-[var(--bg-input)] border border-[var(--border-subtle)] text-[var(--text-primary)] text-sm outline-none focus:border-[var(--accent-primary)] mb-4",
                    value: "{draft.content}",
                    disabled: saving,
                    oninput: move |e| store_for_input.set_draft(e.value()),
                }

                div {
                    class: "flex gap-3",
                    button {
                        class: "btn-ghost flex-1",
                        disabled: saving,
                        onclick: move |_| store_for_cancel.cancel_edit(),
                        "Cancel"
                    }
                    button {
                        class: "nemesis-btn-primary btn-primary flex-1",
                        disabled: saving,
                        onclick: move |_| {
                            let store = store_for_save.clone();
                            spawn(async move {
                                store.save_edit().await;
                            });
                        },
                        if saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
