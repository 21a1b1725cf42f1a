//! Chat profiles
//!
//! A fixed catalog of presets bundling a system prompt with generation overrides.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a chat profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileId {
    /// Standard conversational assistant
    #[default]
    Chat,
    /// Programming-focused assistant
    Code,
    /// Private session without memory
    Anonymous,
}

impl ProfileId {
    pub fn as_str(self) -> &'static str {
        match self {
            ProfileId::Chat => "chat",
            ProfileId::Code => "code",
            ProfileId::Anonymous => "anonymous",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        CHAT_PROFILES
            .iter()
            .map(|profile| profile.id)
            .find(|profile_id| profile_id.as_str() == id)
    }

    /// Catalog entry for this id
    pub fn profile(self) -> &'static ChatProfile {
        // The catalog holds one entry per variant, in declaration order.
        &CHAT_PROFILES[self as usize]
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation overrides applied by a profile
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ProfileParams {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Whether stored memories are injected into the prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_memory: Option<bool>,
}

impl ProfileParams {
    const NONE: Self = Self {
        temperature: None,
        include_memory: None,
    };

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.include_memory.is_none()
    }
}

/// A named chat preset
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatProfile {
    pub id: ProfileId,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub system_prompt: Option<&'static str>,
    pub params: ProfileParams,
}

pub static CHAT_PROFILES: [ChatProfile; 3] = [
    ChatProfile {
        id: ProfileId::Chat,
        name: "Chat",
        icon: "fa-comments",
        description: "Standard conversational assistant",
        system_prompt: Some("You are a helpful AI assistant called BabbageBox."),
        params: ProfileParams::NONE,
    },
    ChatProfile {
        id: ProfileId::Code,
        name: "Code",
        icon: "fa-code",
        description: "Specialized for programming tasks",
        system_prompt: Some(
            "You are an expert software engineer. Focus on clean, efficient, and well-documented code.",
        ),
        params: ProfileParams {
            temperature: Some(0.2),
            include_memory: None,
        },
    },
    ChatProfile {
        id: ProfileId::Anonymous,
        name: "Anonymous",
        icon: "fa-user-secret",
        description: "Private session without memory",
        system_prompt: Some("You are a private assistant. Do not reference past conversations."),
        params: ProfileParams {
            temperature: None,
            include_memory: Some(false),
        },
    },
];
