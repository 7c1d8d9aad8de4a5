//! Outbound WhatsApp notifications for the rishta-saver assistant.
//!
//! This crate provides:
//!
//! - **HttpTransport trait**: The seam between dispatch logic and the wire
//! - **WhatsAppDispatcher**: Single best-effort delivery via the UltraMSG
//!   HTTP API, reporting success or failure as a status string
//!
//! Dispatch never raises toward the conversation turn; every failure mode
//! is folded into the returned status text.

pub mod dispatcher;
pub mod error;
pub mod transport;

pub use dispatcher::{MessagingCredentials, WhatsAppDispatcher};
pub use error::TransportError;
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
