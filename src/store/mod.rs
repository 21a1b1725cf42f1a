//! Client-side state containers
//!
//! Each store owns its state in a `watch` channel: operations mutate it once
//! the backend has answered, and the UI subscribes to re-render.

pub mod memory;
pub mod model;

pub use memory::{Confirm, EditDraft, MemoryState, MemoryStore, MutationOutcome};
pub use model::{ModelResolver, ModelState};
