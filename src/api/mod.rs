//! Backend API
//!
//! The HTTP surface of the BabbageBox backend, behind a trait so the stores
//! can run against the real server or a recording fake.

pub mod base;
pub mod client;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::types::config::ServerConfig;
use crate::types::memory::MemoryRecord;

pub use base::{resolve_api_base, DEFAULT_API_BASE, API_BASE_ENV};
pub use client::HttpBackend;

/// Backend request errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{url} returned status {status}")]
    Status { status: u16, url: String },
}

/// Operations the client performs against the backend.
///
/// Response bodies are decoded leniently: a well-formed response with an
/// unexpected shape yields defaults, never an error.
#[async_trait]
pub trait BackendApi: Send + Sync {
    /// `GET /api/config`
    async fn get_config(&self) -> Result<ServerConfig, ApiError>;

    /// `GET /api/conversations`
    async fn list_conversations(&self) -> Result<Vec<Value>, ApiError>;

    /// `GET /api/memory`
    async fn list_memories(&self) -> Result<Vec<MemoryRecord>, ApiError>;

    /// `DELETE /api/memory/{id}`
    async fn delete_memory(&self, id: i64) -> Result<(), ApiError>;

    /// `PUT /api/memory/{id}` with `{"content": ...}`.
    ///
    /// Returns the updated record when the response carries one.
    async fn update_memory(&self, id: i64, content: &str)
        -> Result<Option<MemoryRecord>, ApiError>;
}
