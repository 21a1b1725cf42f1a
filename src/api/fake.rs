//! In-memory backend that records every call, for store tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::{ApiError, BackendApi};
use crate::types::config::ServerConfig;
use crate::types::memory::MemoryRecord;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    GetConfig,
    ListConversations,
    ListMemories,
    DeleteMemory(i64),
    UpdateMemory(i64, String),
}

#[derive(Default)]
pub(crate) struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    config: Mutex<ServerConfig>,
    conversations: Mutex<Vec<Value>>,
    memories: Mutex<Vec<MemoryRecord>>,
    failing: AtomicBool,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(self, current_model: Option<&str>, llama_model_path: Option<&str>) -> Self {
        self.set_config(current_model, llama_model_path);
        self
    }

    pub fn with_conversations(self, conversations: Vec<Value>) -> Self {
        *self.conversations.lock().unwrap() = conversations;
        self
    }

    pub fn with_memories(self, memories: Vec<MemoryRecord>) -> Self {
        *self.memories.lock().unwrap() = memories;
        self
    }

    pub fn set_config(&self, current_model: Option<&str>, llama_model_path: Option<&str>) {
        *self.config.lock().unwrap() = ServerConfig {
            current_model: current_model.map(str::to_string),
            llama_model_path: llama_model_path.map(str::to_string),
        };
    }

    /// Make every subsequent call fail with a 500.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call, path: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: 500,
                url: path.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn get_config(&self) -> Result<ServerConfig, ApiError> {
        self.record(Call::GetConfig, "/api/config")?;
        Ok(self.config.lock().unwrap().clone())
    }

    async fn list_conversations(&self) -> Result<Vec<Value>, ApiError> {
        self.record(Call::ListConversations, "/api/conversations")?;
        Ok(self.conversations.lock().unwrap().clone())
    }

    async fn list_memories(&self) -> Result<Vec<MemoryRecord>, ApiError> {
        self.record(Call::ListMemories, "/api/memory")?;
        Ok(self.memories.lock().unwrap().clone())
    }

    async fn delete_memory(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::DeleteMemory(id), "/api/memory/{id}")?;
        self.memories.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn update_memory(
        &self,
        id: i64,
        content: &str,
    ) -> Result<Option<MemoryRecord>, ApiError> {
        self.record(Call::UpdateMemory(id, content.to_string()), "/api/memory/{id}")?;
        let mut memories = self.memories.lock().unwrap();
        Ok(memories.iter_mut().find(|m| m.id == id).map(|m| {
            m.content = content.to_string();
            m.clone()
        }))
    }
}

pub(crate) fn memory(id: i64, content: &str) -> MemoryRecord {
    MemoryRecord {
        id,
        content: content.to_string(),
        conversation_id: Some(100 + id),
        created_at: format!("2025-01-0{}T12:00:00Z", id),
    }
}

pub(crate) fn sample_memories() -> Vec<MemoryRecord> {
    vec![memory(1, "First memory"), memory(2, "Second memory regarding AI")]
}
