//! Conversation session state.
//!
//! A session owns its message history and a counter of counseling turns.
//! History is append-only; the counter moves forward once per user message
//! and never back.

use crate::error::SessionError;
use crate::message::{Message, MessageRole};
use chrono::{DateTime, Utc};
use rishta_saver_core::ConversationSessionId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// How many history entries the orchestrator sees by default.
pub const DEFAULT_CONTEXT_WINDOW: usize = 3;

/// A conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Unique session identifier.
    pub id: ConversationSessionId,
    /// Messages in this session, in arrival order.
    pub messages: Vec<Message>,
    /// Number of counseling turns started so far.
    pub turn_count: u32,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session last saw activity.
    pub last_active_at: DateTime<Utc>,
}

impl Session {
    /// Creates an empty session.
    #[must_use]
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: ConversationSessionId::new(),
            messages: Vec::new(),
            turn_count: 0,
            created_at: now,
            last_active_at: now,
        }
    }

    /// Appends a user message and starts a new turn.
    ///
    /// Returns the index of the turn just started (1 for the first user
    /// message).
    pub fn record_user_message(&mut self, content: impl Into<String>) -> u32 {
        self.messages.push(Message::new(MessageRole::User, content));
        self.turn_count += 1;
        self.last_active_at = Utc::now();
        self.turn_count
    }

    /// Appends an assistant reply.
    pub fn record_assistant_reply(&mut self, content: impl Into<String>) {
        self.messages
            .push(Message::new(MessageRole::Assistant, content));
        self.last_active_at = Utc::now();
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Returns the last message, if any.
    #[must_use]
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the recent-context window handed to the orchestrator.
    ///
    /// With at most one history entry this is the first-session sentinel;
    /// otherwise the last `window` entries in original order.
    #[must_use]
    pub fn recent_context(&self, window: usize) -> RecentContext {
        if self.messages.len() <= 1 {
            return RecentContext::FirstSession;
        }
        let start = self.messages.len().saturating_sub(window);
        let entries = self.messages[start..]
            .iter()
            .map(|m| ContextEntry {
                role: m.role,
                content: m.content.clone(),
            })
            .collect();
        RecentContext::Window(entries)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// A single entry of the recent-context window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextEntry {
    /// Who said it.
    pub role: MessageRole,
    /// What was said.
    pub content: String,
}

/// The recent-context window, or the sentinel for a fresh conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentContext {
    /// No prior exchange exists yet.
    FirstSession,
    /// The most recent history entries, oldest first.
    Window(Vec<ContextEntry>),
}

impl RecentContext {
    /// Renders the window for inclusion in the orchestrator prompt.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::FirstSession => "First session".to_string(),
            Self::Window(entries) => {
                serde_json::to_string(entries).expect("context entries serialize")
            }
        }
    }
}

/// In-memory session store.
///
/// Sessions live only for the process lifetime. Each session sits behind
/// its own lock so one message is processed to completion before the next,
/// while independent sessions proceed concurrently.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<ConversationSessionId, Arc<Mutex<Session>>>>,
}

impl MemorySessionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new session and returns its id.
    pub async fn create(&self) -> ConversationSessionId {
        let session = Session::new();
        let id = session.id;
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(session)));
        id
    }

    /// Returns a handle to a session.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub async fn get(
        &self,
        id: ConversationSessionId,
    ) -> Result<Arc<Mutex<Session>>, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(SessionError::NotFound { id })
    }

    /// Removes a session, ending its lifecycle.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotFound`] for an unknown id.
    pub async fn remove(&self, id: ConversationSessionId) -> Result<(), SessionError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(SessionError::NotFound { id })
    }

    /// Returns the number of live sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Returns whether the store holds no sessions.
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
