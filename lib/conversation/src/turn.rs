//! Turn handling around the orchestrator boundary.
//!
//! A turn is one user message plus the resulting reply. This module owns
//! the bookkeeping on both sides of the (external) orchestrator: prompt
//! assembly going in, and failure absorption coming out. No orchestrator
//! error ever reaches the caller; a failed turn produces the apology reply
//! and leaves the session usable.

use crate::error::OrchestratorError;
use crate::session::{DEFAULT_CONTEXT_WINDOW, RecentContext, Session};
use async_trait::async_trait;

/// Greeting shown when a conversation starts.
pub const WELCOME_MESSAGE: &str = "🌟 *Welcome to RishtaSaver Agent* 🌟\n\n\
    💕 I am here to support your marriage and emotional well-being.\n\n\
    🎯 *I can help you with:*\n\
    ✅ Improving communication and understanding\n\
    ✅ Resolving trust and financial issues\n\
    ✅ Providing Islamic and practical guidance\n\
    ✅ Exploring alternatives to divorce\n\
    ✅ Recommending lawyers only if needed (as last resort)\n\n\
    🙏 Remember: *Divorce is the most disliked permissible act in Islam.*\n\n\
    💬 Please share your concern, and let’s explore a better path together. 💪";

/// Everything the orchestrator gets for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRequest {
    /// The turn index within the session (1-based).
    pub turn: u32,
    /// The user's raw message.
    pub message: String,
    /// The recent-context window, computed after the message was recorded.
    pub context: RecentContext,
}

impl TurnRequest {
    /// Returns the turn label.
    #[must_use]
    pub fn session_label(&self) -> String {
        format!("Counseling Session #{}", self.turn)
    }

    /// Renders the full prompt handed to the orchestrator.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "{label}\n\nUser Message: {message}\n\nPrevious Context: {context}",
            label = self.session_label(),
            message = self.message,
            context = self.context.render(),
        )
    }
}

/// The turn orchestrator boundary.
///
/// The orchestrator owns model invocation and tool selection. From this
/// side it is one opaque call producing the final reply text.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Produces the final reply for one turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the turn cannot be completed; the turn handler
    /// absorbs it.
    async fn respond(&self, request: &TurnRequest) -> Result<String, OrchestratorError>;
}

/// The outcome of one handled turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnReport {
    /// The turn index this report is for.
    pub turn: u32,
    /// The reply shown to the user (the apology text on failure).
    pub reply: String,
    /// Whether the orchestrator completed the turn.
    pub success: bool,
}

/// Builds the reply shown when a turn fails.
#[must_use]
pub fn turn_failure_reply(err: &OrchestratorError) -> String {
    format!(
        "❌ Sorry, there was a technical issue: {err}\n\n\
         🙏 Please try again later or use the emergency helplines:\n\
         📞 Rozan Helpline: 0800-22444 (24/7 free)"
    )
}

/// Runs one counseling turn against the orchestrator.
///
/// The user message is recorded (and the turn counter advanced) before the
/// orchestrator is consulted. On success the reply is recorded; on failure
/// the user message stays in history with no paired reply, and the apology
/// text is returned instead.
pub async fn run_turn(
    session: &mut Session,
    orchestrator: &dyn Orchestrator,
    content: &str,
) -> TurnReport {
    let turn = session.record_user_message(content);
    let request = TurnRequest {
        turn,
        message: content.to_string(),
        context: session.recent_context(DEFAULT_CONTEXT_WINDOW),
    };

    match orchestrator.respond(&request).await {
        Ok(reply) => {
            session.record_assistant_reply(reply.clone());
            tracing::debug!(session = %session.id, turn, "turn completed");
            TurnReport {
                turn,
                reply,
                success: true,
            }
        }
        Err(err) => {
            tracing::error!(session = %session.id, turn, error = %err, "turn failed");
            TurnReport {
                turn,
                reply: turn_failure_reply(&err),
                success: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageRole;

    /// Replies with a fixed text, or fails with a fixed error.
    struct ScriptedOrchestrator {
        reply: Result<String, OrchestratorError>,
    }

    #[async_trait]
    impl Orchestrator for ScriptedOrchestrator {
        async fn respond(&self, _request: &TurnRequest) -> Result<String, OrchestratorError> {
            self.reply.clone()
        }
    }

    #[test]
    fn first_turn_prompt_uses_sentinel() {
        let request = TurnRequest {
            turn: 1,
            message: "I am considering divorce".to_string(),
            context: RecentContext::FirstSession,
        };

        assert_eq!(
            request.render(),
            "Counseling Session #1\n\nUser Message: I am considering divorce\n\nPrevious Context: First session"
        );
    }

    #[test]
    fn later_turn_prompt_embeds_window() {
        let mut session = Session::new();
        session.record_user_message("we argue a lot");
        session.record_assistant_reply("tell me more");
        let turn = session.record_user_message("mostly about money");

        let request = TurnRequest {
            turn,
            message: "mostly about money".to_string(),
            context: session.recent_context(DEFAULT_CONTEXT_WINDOW),
        };
        let prompt = request.render();

        assert!(prompt.starts_with("Counseling Session #2\n\n"));
        assert!(prompt.contains(r#"{"role":"assistant","content":"tell me more"}"#));
        assert!(prompt.contains(r#"{"role":"user","content":"mostly about money"}"#));
    }

    #[tokio::test]
    async fn successful_turn_records_both_sides() {
        let mut session = Session::new();
        let orchestrator = ScriptedOrchestrator {
            reply: Ok("Consider a calm conversation tonight.".to_string()),
        };

        let report = run_turn(&mut session, &orchestrator, "we keep fighting").await;

        assert!(report.success);
        assert_eq!(report.turn, 1);
        assert_eq!(report.reply, "Consider a calm conversation tonight.");
        assert_eq!(session.message_count(), 2);
        assert_eq!(session.last_message().expect("reply").role, MessageRole::Assistant);
    }

    #[tokio::test]
    async fn failed_turn_keeps_orphaned_user_message() {
        let mut session = Session::new();
        let orchestrator = ScriptedOrchestrator {
            reply: Err(OrchestratorError::ModelFailed {
                reason: "upstream 503".to_string(),
            }),
        };

        let report = run_turn(&mut session, &orchestrator, "are you there?").await;

        assert!(!report.success);
        assert!(report.reply.contains("technical issue"));
        assert!(report.reply.contains("Rozan Helpline: 0800-22444 (24/7 free)"));
        // The user message stays; no assistant entry is paired with it.
        assert_eq!(session.message_count(), 1);
        assert_eq!(session.last_message().expect("user entry").role, MessageRole::User);
        assert_eq!(session.turn_count, 1);
    }

    #[tokio::test]
    async fn session_stays_usable_after_failure() {
        let mut session = Session::new();
        let failing = ScriptedOrchestrator {
            reply: Err(OrchestratorError::ModelFailed {
                reason: "boom".to_string(),
            }),
        };
        let healthy = ScriptedOrchestrator {
            reply: Ok("Welcome back.".to_string()),
        };

        run_turn(&mut session, &failing, "first try").await;
        let report = run_turn(&mut session, &healthy, "second try").await;

        assert!(report.success);
        assert_eq!(report.turn, 2);
        assert_eq!(session.message_count(), 3);
    }

    #[test]
    fn welcome_message_lists_capabilities() {
        assert!(WELCOME_MESSAGE.contains("*Welcome to RishtaSaver Agent*"));
        assert!(WELCOME_MESSAGE.contains("✅ Exploring alternatives to divorce"));
        assert!(WELCOME_MESSAGE.contains("most disliked permissible act"));
    }
}
