use dioxus::prelude::*;

use crate::app::AppState;
use crate::storage::settings::save_settings;
use crate::types::profile::CHAT_PROFILES;

#[component]
pub fn ProfilePicker() -> Element {
    let app_state = use_context::<AppState>();
    let mut current_profile = app_state.current_profile;
    let mut settings = app_state.settings;
    let selected = *current_profile.read();

    rsx! {
        div {
            class: "flex flex-col gap-1 px-3 pb-3 border-b border-[var(--border-subtle)]",

            span {
                class: "text-[10px] uppercase tracking-wider text-[var(--text-tertiary)] font-bold select-none px-1 pb-1",
                "Profile"
            }

            for profile in CHAT_PROFILES.iter() {
                button {
                    key: "{profile.id}",
                    class: if profile.id == selected {
                        "profile-option active flex items-center gap-3 px-3 py-2 rounded-lg text-left bg-[var(--bg-hover)] text-[var(--text-primary)]"
                    } else {
                        "profile-option flex items-center gap-3 px-3 py-2 rounded-lg text-left text-[var(--text-secondary)] hover:bg-white/[0.05]"
                    },
                    title: "{profile.description}",
                    onclick: move |_| {
                        tracing::debug!("Selected profile {}", profile.id);
                        current_profile.set(profile.id);
                        let mut settings = settings.write();
                        settings.profile = profile.id.as_str().to_string();
                        if let Err(e) = save_settings(&settings) {
                            tracing::error!("Failed to save settings: {}", e);
                        }
                    },
                    i { class: "fa {profile.icon} w-4 text-center" }
                    span { class: "text-sm font-medium", "{profile.name}" }
                }
            }
        }
    }
}
