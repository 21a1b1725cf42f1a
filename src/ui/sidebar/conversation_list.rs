use dioxus::prelude::*;

use crate::app::AppState;
use crate::store::model::conversation_title;

#[component]
pub fn ConversationList() -> Element {
    let app_state = use_context::<AppState>();
    let titles: Vec<String> = app_state
        .model
        .read()
        .conversations
        .iter()
        .map(conversation_title)
        .collect();

    rsx! {
        div {
            class: "flex-1 overflow-y-auto p-2 space-y-1 scrollbar-thin",

            if titles.is_empty() {
                div {
                    class: "flex flex-col items-center justify-center py-10 text-[var(--text-tertiary)] gap-2 opacity-50",
                    span { class: "text-xs font-medium", "No recent chats" }
                }
            } else {
                div {
                    class: "text-[10px] uppercase tracking-widest text-[var(--text-tertiary)] font-semibold px-3 py-2 select-none opacity-60",
                    "Recent"
                }

                for (index, title) in titles.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "px-1",
                        div {
                            class: "conversation-row flex items-center gap-2.5 px-3 py-2 rounded-lg text-[var(--text-secondary)] hover:text-[var(--text-primary)] hover:bg-white/[0.05] transition-all",
                            svg {
                                width: "14",
                                height: "14",
                                view_box: "0 0 24 24",
                                fill: "none",
                                stroke: "currentColor",
                                stroke_width: "2",
                                stroke_linecap: "round",
                                stroke_linejoin: "round",
                                path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
                            }
                            div { class: "truncate flex-1 text-sm", "{title}" }
                        }
                    }
                }
            }
        }
    }
}
