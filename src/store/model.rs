//! Model resolver
//!
//! Tracks the display name of the backend's current model and the
//! conversation list fetched when the chat shell mounts.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::watch;

use crate::api::BackendApi;

/// Snapshot of the chat shell's backend-derived state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelState {
    /// Display name of the current model, empty until the first successful fetch
    pub model_name: String,
    /// File name of the configured model path
    pub model_file: Option<String>,
    /// Conversation summaries, opaque to the client
    pub conversations: Vec<Value>,
    /// Whether the initial fetches have been issued
    pub mounted: bool,
}

#[derive(Clone)]
pub struct ModelResolver {
    api: Arc<dyn BackendApi>,
    state: Arc<watch::Sender<ModelState>>,
}

impl ModelResolver {
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        let (state, _) = watch::channel(ModelState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ModelState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ModelState {
        self.state.borrow().clone()
    }

    pub fn model_name(&self) -> String {
        self.state.borrow().model_name.clone()
    }

    /// Initial fetches: config, then conversations. Only the first call does anything.
    pub async fn mount(&self) {
        let first = self.state.send_if_modified(|state| {
            if state.mounted {
                return false;
            }
            state.mounted = true;
            true
        });
        if !first {
            tracing::debug!("Model resolver already mounted");
            return;
        }

        tracing::info!("Mounting chat shell");
        self.fetch_model().await;
        self.fetch_conversations().await;
    }

    /// Fetch the backend config and store the derived display name.
    ///
    /// On failure the previous name is kept.
    pub async fn fetch_model(&self) {
        match self.api.get_config().await {
            Ok(config) => {
                let name = config.display_name();
                let file = config.model_file_name();
                tracing::debug!("Current model: {}", name);
                self.state.send_modify(|state| {
                    state.model_name = name;
                    state.model_file = file;
                });
            }
            Err(e) => tracing::warn!("Failed to fetch model config: {}", e),
        }
    }

    pub async fn fetch_conversations(&self) {
        match self.api.list_conversations().await {
            Ok(conversations) => {
                tracing::debug!("Loaded {} conversations", conversations.len());
                self.state.send_modify(|state| state.conversations = conversations);
            }
            Err(e) => tracing::warn!("Failed to fetch conversations: {}", e),
        }
    }

    /// The user picked a different model: re-resolve its name.
    pub async fn on_model_set(&self) {
        self.fetch_model().await;
    }
}

/// Best-effort title for an opaque conversation summary.
pub fn conversation_title(conversation: &Value) -> String {
    if let Some(title) = conversation
        .get("title")
        .and_then(Value::as_str)
        .filter(|title| !title.trim().is_empty())
    {
        return title.to_string();
    }
    match conversation.get("id") {
        Some(Value::Number(id)) => format!("Conversation {}", id),
        Some(Value::String(id)) if !id.is_empty() => format!("Conversation {}", id),
        _ => "Untitled".to_string(),
    }
}
