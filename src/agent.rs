//! External agent capabilities.
//!
//! Every scan, enrichment, and digest operation goes through a single
//! opaque call: hand an instruction to an agent, get back an untyped
//! reply. The transport behind [`AgentInvoker`] is an external collaborator
//! (HTTP, MCP, whatever the host wires in); this crate never retries — a
//! retry, where wanted, is spelled out inside the instruction text itself.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AgentError;

// ---------------------------------------------------------------------------
// Agent registry
// ---------------------------------------------------------------------------

/// The external agents this crate drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    /// Scans the inbox for demo call emails.
    EmailScanner,
    /// Coordinates enrichment of scanned call data with company research.
    EnrichmentCoordinator,
    /// Compiles and sends the daily digest email.
    MorningDigest,
}

impl AgentKind {
    /// Stable identifier passed to the transport.
    pub fn id(&self) -> &'static str {
        match self {
            AgentKind::EmailScanner => "email-scanner",
            AgentKind::EnrichmentCoordinator => "enrichment-coordinator",
            AgentKind::MorningDigest => "morning-digest",
        }
    }

    /// Display name for status surfaces.
    pub fn name(&self) -> &'static str {
        match self {
            AgentKind::EmailScanner => "Email Scanner Agent",
            AgentKind::EnrichmentCoordinator => "Enrichment Coordinator",
            AgentKind::MorningDigest => "Morning Digest Agent",
        }
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// What gets sent to an agent: plain natural-language text for the scanner,
/// a structured JSON payload for enrichment and digest.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AgentInstruction {
    Text(String),
    Structured(Value),
}

impl AgentInstruction {
    pub fn text(s: impl Into<String>) -> Self {
        AgentInstruction::Text(s.into())
    }

    pub fn structured(payload: Value) -> Self {
        AgentInstruction::Structured(payload)
    }
}

/// Untyped reply from an agent call.
///
/// `success` is the in-band verdict; `response` is whatever shape the agent
/// chose to return this week. Callers extract fields with
/// [`crate::search::deep_find`] rather than trusting the nesting.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AgentReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub response: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl AgentReply {
    /// The payload root for field extraction: agents usually wrap their
    /// output in a `result` envelope, but not always.
    pub fn payload_root(&self) -> &Value {
        let response = self.response.as_ref().unwrap_or(&Value::Null);
        match response.get("result") {
            Some(result) => result,
            None => response,
        }
    }

    /// The in-band error message, or a placeholder when the agent failed
    /// without saying why.
    pub fn error_message(&self) -> String {
        self.error.clone().unwrap_or_else(|| "Unknown error".to_string())
    }
}

// ---------------------------------------------------------------------------
// Invoker seam
// ---------------------------------------------------------------------------

/// Sole path to external capabilities. At-most-one-attempt semantics:
/// implementations must not retry on their own.
#[async_trait]
pub trait AgentInvoker: Send + Sync {
    async fn invoke(
        &self,
        instruction: AgentInstruction,
        agent: AgentKind,
    ) -> Result<AgentReply, AgentError>;
}
