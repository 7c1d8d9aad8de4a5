//! Static counseling knowledge for the rishta-saver assistant.
//!
//! This crate provides:
//!
//! - **Counseling tips**: Categorized guidance with a general fallback
//! - **Divorce consequences**: Fixed perspective/impact/alternative texts
//! - **Lawyer directory**: A fixed directory with city filtering and a
//!   user-facing message formatter
//! - **Emergency support**: Crisis contact lines
//!
//! Everything here is a pure lookup over fixed data; there is no I/O and
//! no failure mode.

pub mod divorce;
pub mod emergency;
pub mod lawyers;
pub mod tips;

pub use divorce::{DivorceConsequences, divorce_consequences};
pub use emergency::{EmergencyContactKind, emergency_support, emergency_support_json};
pub use lawyers::{LawyerProfile, format_lawyer_message, lawyers_matching};
pub use tips::{TipCategory, TipsLookup, counseling_tips};
