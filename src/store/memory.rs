//! Memory store
//!
//! Local cache of the backend's memory records with search, delete and
//! edit flows. The cache only changes after the backend confirms a mutation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::api::BackendApi;
use crate::types::memory::{filter_records, MemoryRecord};

/// Asks the user to approve a destructive action.
#[async_trait(?Send)]
pub trait Confirm {
    async fn confirm(&self, message: &str) -> bool;
}

/// Fixed answer, for callers that have already asked.
#[async_trait(?Send)]
impl Confirm for bool {
    async fn confirm(&self, _message: &str) -> bool {
        *self
    }
}

/// Result of a delete or save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The backend accepted the change and the cache was updated
    Applied,
    /// Nothing was sent
    Cancelled,
    /// The backend call failed; the cache is unchanged
    Failed,
}

/// Content being edited in the edit overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub id: i64,
    pub content: String,
    pub saving: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryState {
    pub records: Vec<MemoryRecord>,
    pub query: String,
    /// Open edit overlay, if any
    pub editing: Option<EditDraft>,
    pub loading: bool,
}

impl MemoryState {
    /// Records matching the current query
    pub fn filtered(&self) -> Vec<&MemoryRecord> {
        filter_records(&self.records, &self.query)
    }
}

#[derive(Clone)]
pub struct MemoryStore {
    api: Arc<dyn BackendApi>,
    state: Arc<watch::Sender<MemoryState>>,
}

impl MemoryStore {
    pub fn new(api: Arc<dyn BackendApi>) -> Self {
        let (state, _) = watch::channel(MemoryState::default());
        Self {
            api,
            state: Arc::new(state),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<MemoryState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> MemoryState {
        self.state.borrow().clone()
    }

    /// Replace the cache with the backend's full list.
    pub async fn list(&self) {
        self.state.send_modify(|state| state.loading = true);
        let result = self.api.list_memories().await;
        self.state.send_modify(|state| {
            state.loading = false;
            match result {
                Ok(records) => {
                    tracing::debug!("Loaded {} memories", records.len());
                    state.records = records;
                }
                Err(e) => tracing::warn!("Failed to fetch memories: {}", e),
            }
        });
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.state.send_if_modified(|state| {
            if state.query == query {
                return false;
            }
            state.query = query;
            true
        });
    }

    /// Delete a record once `confirm` approves.
    pub async fn delete(&self, id: i64, confirm: &dyn Confirm) -> MutationOutcome {
        if !confirm
            .confirm("Are you sure you want to delete this memory?")
            .await
        {
            tracing::debug!("Delete of memory {} cancelled", id);
            return MutationOutcome::Cancelled;
        }

        match self.api.delete_memory(id).await {
            Ok(()) => {
                tracing::info!("Deleted memory {}", id);
                self.state
                    .send_modify(|state| state.records.retain(|record| record.id != id));
                MutationOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("Failed to delete memory {}: {}", id, e);
                MutationOutcome::Failed
            }
        }
    }

    /// Open the edit overlay on a record. Returns false if the id is not cached.
    pub fn begin_edit(&self, id: i64) -> bool {
        self.state.send_if_modified(|state| {
            let Some(record) = state.records.iter().find(|record| record.id == id) else {
                return false;
            };
            state.editing = Some(EditDraft {
                id,
                content: record.content.clone(),
                saving: false,
            });
            true
        })
    }

    pub fn set_draft(&self, content: impl Into<String>) {
        let content = content.into();
        self.state.send_if_modified(|state| match state.editing.as_mut() {
            Some(draft) if !draft.saving => {
                draft.content = content;
                true
            }
            _ => false,
        });
    }

    pub fn cancel_edit(&self) {
        self.state.send_if_modified(|state| state.editing.take().is_some());
    }

    /// Send the draft. On success the record takes the new content and the
    /// overlay closes; on failure the overlay stays open with the draft.
    pub async fn save_edit(&self) -> MutationOutcome {
        let mut draft = None;
        self.state.send_if_modified(|state| match state.editing.as_mut() {
            Some(editing) if !editing.saving => {
                editing.saving = true;
                draft = Some((editing.id, editing.content.clone()));
                true
            }
            _ => false,
        });
        let Some((id, content)) = draft else {
            return MutationOutcome::Cancelled;
        };

        match self.api.update_memory(id, &content).await {
            Ok(updated) => {
                tracing::info!("Updated memory {}", id);
                let content = updated.map(|record| record.content).unwrap_or(content);
                self.state.send_modify(|state| {
                    if let Some(record) = state.records.iter_mut().find(|record| record.id == id) {
                        record.content = content;
                    }
                    state.editing = None;
                });
                MutationOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("Failed to update memory {}: {}", id, e);
                self.state.send_modify(|state| {
                    if let Some(editing) = state.editing.as_mut() {
                        editing.saving = false;
                    }
                });
                MutationOutcome::Failed
            }
        }
    }
}
