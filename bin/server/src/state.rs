//! Shared application state.

use rishta_saver_conversation::{MemorySessionStore, Orchestrator};
use std::sync::Arc;

/// State shared by all request handlers.
///
/// The session store and orchestrator are the only moving parts; the tool
/// registry and knowledge data live behind the orchestrator and are
/// read-only.
pub struct AppState {
    /// Live conversation sessions.
    pub sessions: MemorySessionStore,
    /// The turn orchestrator.
    pub orchestrator: Arc<dyn Orchestrator>,
}

impl AppState {
    /// Creates application state around an orchestrator.
    #[must_use]
    pub fn new(orchestrator: Arc<dyn Orchestrator>) -> Self {
        Self {
            sessions: MemorySessionStore::new(),
            orchestrator,
        }
    }
}
