//! Morning digest compilation.
//!
//! Packages the current call set into a structured payload and hands it to
//! the digest agent. An independent flow from the enrichment pipeline: it
//! only reads the committed canonical set (or the sample set in sample
//! mode), never pipeline internals.

use serde_json::json;

use crate::agent::{AgentInstruction, AgentInvoker, AgentKind};
use crate::state::AppState;

const DIGEST_TASK: &str =
    "Compile all demo calls and send a formatted summary email digest";

/// Outcome of a digest run.
///
/// `Unconfirmed` is deliberately neither success nor failure: the agent call
/// went through, but the reply carried no affirmative send confirmation, so
/// the email may or may not have gone out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigestOutcome {
    Sent,
    Unconfirmed,
    Failed(String),
}

/// Compile and dispatch the digest for the currently displayed call set.
///
/// `recipient` is optional; an empty value lets the agent use its default
/// address.
pub async fn send_digest(
    state: &AppState,
    invoker: &dyn AgentInvoker,
    recipient: &str,
) -> DigestOutcome {
    state.set_active_agent(Some(AgentKind::MorningDigest));
    state.set_status("Compiling and sending morning digest...");

    let outcome = compile_and_send(state, invoker, recipient).await;

    state.set_active_agent(None);
    outcome
}

async fn compile_and_send(
    state: &AppState,
    invoker: &dyn AgentInvoker,
    recipient: &str,
) -> DigestOutcome {
    let calls = state.active_calls();
    let payload = json!({
        "task": DIGEST_TASK,
        "recipient": (if recipient.is_empty() { "default" } else { recipient }),
        "calls_data": &*calls,
        "send_to": recipient,
    });

    let reply = match invoker
        .invoke(AgentInstruction::structured(payload), AgentKind::MorningDigest)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            let msg = e.status_message();
            state.set_status(format!("Failed to send digest: {}", msg));
            return DigestOutcome::Failed(msg);
        }
    };
    if !reply.success {
        let msg = reply.error_message();
        state.set_status(format!("Failed to send digest: {}", msg));
        return DigestOutcome::Failed(msg);
    }

    // The digest agent's reply shape is under our control, so the
    // confirmation flag is read from its documented position rather than
    // deep-searched.
    let email_sent = reply
        .response
        .as_ref()
        .and_then(|r| r.get("result"))
        .and_then(|r| r.get("email_sent"))
        .and_then(serde_json::Value::as_bool)
        .unwrap_or(false);

    if email_sent {
        state.set_status("Digest sent successfully.");
        DigestOutcome::Sent
    } else {
        state.set_status("Digest compiled but email sending status unknown.");
        DigestOutcome::Unconfirmed
    }
}
