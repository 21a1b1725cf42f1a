//! Configuration types
//!
//! Backend configuration as served by `/api/config`, and the display name
//! derived from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Label shown when the backend reports no current model.
pub const UNKNOWN_MODEL: &str = "Unknown";

/// Label used to sign assistant output before a model name is known.
pub const DEFAULT_ASSISTANT_LABEL: &str = "BabbageBox AI";

/// Backend configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Filesystem path of the model file the backend was started with
    #[serde(default)]
    pub llama_model_path: Option<String>,
    /// Name of the model currently loaded by the backend
    #[serde(default)]
    pub current_model: Option<String>,
}

impl ServerConfig {
    /// Decode a config body, falling back to the default for anything that
    /// is not a config-shaped object.
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            tracing::debug!("Config body is not an object, using defaults");
            return Self::default();
        }
        match serde_json::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Unexpected config shape, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Name shown for the loaded model.
    ///
    /// An empty `current_model` counts as absent. The model path is not
    /// consulted.
    pub fn display_name(&self) -> String {
        match self.current_model.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_MODEL.to_string(),
        }
    }

    /// File name portion of `llama_model_path`, if any.
    pub fn model_file_name(&self) -> Option<String> {
        let path = self.llama_model_path.as_deref()?;
        path.rsplit(&['/', '\\'][..])
            .next()
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

/// Label for assistant messages given the current display name.
pub fn assistant_label(model_name: &str) -> &str {
    if model_name.is_empty() {
        DEFAULT_ASSISTANT_LABEL
    } else {
        model_name
    }
}
