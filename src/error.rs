//! Error types for the agent seam.
//!
//! Only a failed capability call is an error. A call that succeeds but
//! carries no usable data (empty result, or expected fields absent even
//! after deep key search) is ordinary control flow handled by the
//! pipeline's fallback paths, never a fault.

use thiserror::Error;

/// Errors from invoking an external agent capability.
#[derive(Debug, Clone, Error)]
pub enum AgentError {
    /// The call never reached the capability (network, auth, quota).
    #[error("Agent transport error: {0}")]
    Transport(String),

    /// The capability was reached and reported failure in-band.
    #[error("Agent '{agent}' reported failure: {message}")]
    Capability { agent: String, message: String },
}

impl AgentError {
    /// Short human-readable message for status lines.
    pub fn status_message(&self) -> String {
        match self {
            AgentError::Transport(msg) => msg.clone(),
            AgentError::Capability { message, .. } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_strips_wrapping() {
        let err = AgentError::Capability {
            agent: "email-scanner".to_string(),
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.status_message(), "quota exceeded");
        assert!(err.to_string().contains("email-scanner"));
    }
}
