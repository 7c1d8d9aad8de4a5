//! Core domain types and utilities for the rishta-saver counseling assistant.
//!
//! This crate provides the foundational identifier types and the error
//! handling `Result` alias shared by the rest of the workspace.

pub mod error;
pub mod id;

pub use error::Result;
pub use id::{ConversationSessionId, DeliveryId, MessageId};
