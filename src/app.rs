//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::api::base::api_base_from_env;
use crate::api::{BackendApi, HttpBackend};
use crate::storage::settings::{load_settings, AppSettings};
use crate::store::{MemoryState, MemoryStore, ModelResolver, ModelState};
use crate::types::profile::ProfileId;
use crate::ui::components::confirm_dialog::ConfirmRequest;
use crate::ui::{Layout, View};
use dioxus::prelude::*;
use std::sync::Arc;

const APP_CSS: &str = include_str!("../assets/app.css");

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub resolver: ModelResolver,
    pub memories: MemoryStore,
    /// Mirror of the resolver state, updated on every change
    pub model: Signal<ModelState>,
    /// Mirror of the memory store state, updated on every change
    pub memory: Signal<MemoryState>,
    pub settings: Signal<AppSettings>,
    pub current_profile: Signal<ProfileId>,
    pub view: Signal<View>,
    /// Confirmation waiting for the user, if any
    pub confirm: Signal<Option<ConfirmRequest>>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        let base = api_base_from_env(settings.api_base_url.as_deref());
        let api: Arc<dyn BackendApi> = Arc::new(HttpBackend::new(base));
        let profile = settings.profile_id();
        tracing::info!("AppState initialized");

        Self {
            resolver: ModelResolver::new(api.clone()),
            memories: MemoryStore::new(api),
            model: Signal::new(ModelState::default()),
            memory: Signal::new(MemoryState::default()),
            settings: Signal::new(settings),
            current_profile: Signal::new(profile),
            view: Signal::new(View::Chat),
            confirm: Signal::new(None),
        }
    }
}

#[component]
pub fn App() -> Element {
    let app_state = use_context_provider(AppState::new);

    {
        let resolver = app_state.resolver.clone();
        let mut model = app_state.model;
        use_future(move || {
            let mut rx = resolver.subscribe();
            async move {
                loop {
                    model.set(rx.borrow_and_update().clone());
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    {
        let memories = app_state.memories.clone();
        let mut memory = app_state.memory;
        use_future(move || {
            let mut rx = memories.subscribe();
            async move {
                loop {
                    memory.set(rx.borrow_and_update().clone());
                    if rx.changed().await.is_err() {
                        break;
                    }
                }
            }
        });
    }

    rsx! {
        style { "{APP_CSS}" }
        Layout {}
    }
}
