//! Enrichment pipeline orchestration.
//!
//! Drives the scan → enrich agent sequence and chooses which of three
//! outcomes to commit: fully enriched records, raw scan records (lower
//! fidelity, when enrichment yields nothing usable), or the empty set (a
//! clean "no matches" scan). The two agent calls run strictly in sequence —
//! enrichment consumes the scan payload, so there is nothing to parallelize.
//!
//! Nothing here is fatal: the worst outcome is "no commit, status message
//! explains why", leaving whatever canonical set existed before the run.

use serde_json::{json, Value};

use crate::agent::{AgentInstruction, AgentInvoker, AgentKind};
use crate::normalize::normalize_batch;
use crate::search::deep_find;
use crate::state::AppState;
use crate::types::{CallSummary, PipelinePhase};

/// Fixed scan instruction. The only retry in the system lives inside this
/// text — the scanner agent retries with the broader query itself; the
/// pipeline never re-invokes.
pub const SCAN_INSTRUCTION: &str = "Use the inbox search tool to fetch emails with query \
     '\"product demo\" OR \"demo call\" OR \"demo scheduled\"' and max_results 50. If 0 \
     results, retry with query 'demo' and max_results 50. Scan all fetched emails for demo \
     call mentions. Extract company name, meeting time, attendees, calendar info, meeting \
     links, and generate contextual notes for each match.";

const ENRICHMENT_TASK: &str = "Enrich the following email scan data with structured call \
     records and company research. For each call, provide: call_id, company_name, \
     call_datetime_ist, call_date, call_time, original_timezone, local_time, attendees, \
     meeting_platform, meeting_link, ai_notes, key_topics, action_items, \
     email_thread_summary, company_size_tier, employee_count, estimated_revenue, industry, \
     priority (High/Medium/Low), headquarters, company_website, is_new, \
     enrichment_confidence.";

/// How a pipeline run ended. `Fallback` is deliberately distinct from
/// `Enriched`: enrichment "succeeding" with zero records currently takes the
/// same fallback path as an enrichment failure, and callers may want to see
/// how often that conflation fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Scan succeeded and found nothing; the empty set was committed.
    NoMatches,
    /// Enriched records committed.
    Enriched(usize),
    /// Raw scan records committed because enrichment yielded nothing usable.
    Fallback(usize),
    /// Scan call failed; no state change.
    ScanFailed(String),
    /// Enrichment failed with no scan candidates to fall back to; no state
    /// change.
    EnrichFailed(String),
}

/// Run the full scan → enrich sequence against `state`.
///
/// Phase and active-agent indicators are visible to observers at every
/// transition and are always reset on the way out, whatever happened inside.
pub async fn run_scan(state: &AppState, invoker: &dyn AgentInvoker) -> ScanOutcome {
    state.set_phase(PipelinePhase::Scanning);
    state.set_active_agent(Some(AgentKind::EmailScanner));
    state.set_status("Scanning inbox for demo call emails...");

    let outcome = scan_and_enrich(state, invoker).await;

    state.set_phase(PipelinePhase::Idle);
    state.set_active_agent(None);
    outcome
}

async fn scan_and_enrich(state: &AppState, invoker: &dyn AgentInvoker) -> ScanOutcome {
    // Stage 1: scan.
    let scan_reply = match invoker
        .invoke(AgentInstruction::text(SCAN_INSTRUCTION), AgentKind::EmailScanner)
        .await
    {
        Ok(reply) => reply,
        Err(e) => {
            let msg = e.status_message();
            state.set_status(format!("Scan failed: {}", msg));
            return ScanOutcome::ScanFailed(msg);
        }
    };
    if !scan_reply.success {
        let msg = scan_reply.error_message();
        state.set_status(format!("Scan failed: {}", msg));
        return ScanOutcome::ScanFailed(msg);
    }

    let scan_root = scan_reply.payload_root();
    let candidates: Vec<Value> = deep_find(scan_root, "demo_calls")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    let emails_found = deep_find(scan_root, "emails_found")
        .and_then(Value::as_i64)
        .unwrap_or(candidates.len() as i64);
    log::info!(
        "scan parsed: emails_found={} candidates={}",
        emails_found,
        candidates.len()
    );

    if emails_found == 0 && candidates.is_empty() {
        // A valid terminal outcome, not an error. The empty set supersedes
        // whatever was committed before.
        state.commit(Vec::new(), None);
        state.set_status("Scan complete: no matching demo call emails found.");
        return ScanOutcome::NoMatches;
    }

    // Stage 2: enrichment, fed the full scan payload.
    state.set_status(format!(
        "Found {} emails. Enriching with company data...",
        emails_found
    ));
    state.set_active_agent(Some(AgentKind::EnrichmentCoordinator));

    let enrich_payload = json!({
        "task": ENRICHMENT_TASK,
        "scan_data": scan_root,
    });
    let enrich_result = invoker
        .invoke(
            AgentInstruction::structured(enrich_payload),
            AgentKind::EnrichmentCoordinator,
        )
        .await;

    match enrich_result {
        Ok(reply) if reply.success => {
            let enriched_root = reply.payload_root();
            let enriched_raw: Vec<Value> = deep_find(enriched_root, "enriched_calls")
                .and_then(Value::as_array)
                .cloned()
                .unwrap_or_default();
            let mut calls = normalize_batch(&enriched_raw);

            let mut fell_back = false;
            if calls.is_empty() && !candidates.is_empty() {
                log::warn!("enrichment returned no records; falling back to raw scan data");
                calls = normalize_batch(&candidates);
                fell_back = true;
            }

            // Adopt the agent's aggregate summary when present and
            // well-formed; otherwise readers derive one by counting.
            let summary = deep_find(enriched_root, "summary")
                .and_then(|v| serde_json::from_value::<CallSummary>(v.clone()).ok());

            let count = calls.len();
            state.commit(calls, summary);
            if fell_back {
                state.set_status(format!(
                    "Scan complete: {} calls found (showing basic data).",
                    count
                ));
                ScanOutcome::Fallback(count)
            } else {
                state.set_status(format!(
                    "Scan complete: {} demo calls found and enriched.",
                    count
                ));
                ScanOutcome::Enriched(count)
            }
        }
        other => {
            let msg = match other {
                Ok(reply) => reply.error_message(),
                Err(e) => e.status_message(),
            };
            if candidates.is_empty() {
                state.set_status(format!("Enrichment failed: {}", msg));
                return ScanOutcome::EnrichFailed(msg);
            }
            log::warn!("enrichment failed ({}); falling back to raw scan data", msg);
            let calls = normalize_batch(&candidates);
            let count = calls.len();
            state.commit(calls, None);
            state.set_status(format!(
                "Scan complete: {} calls found (showing basic data).",
                count
            ));
            ScanOutcome::Fallback(count)
        }
    }
}
