//! Shared application state.
//!
//! The canonical call set is copy-on-write: a commit installs a brand-new
//! `Arc<Vec<_>>` rather than mutating in place, so a digest compilation
//! reading the set while a new scan is in flight never observes a
//! partially-updated set. One pipeline run creates the set wholesale and
//! the next replaces it wholesale; there is no incremental merge.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::Utc;
use parking_lot::Mutex;

use crate::agent::AgentKind;
use crate::normalize::derive_summary;
use crate::presets;
use crate::types::{CallSummary, EnrichedCall, PipelinePhase};

/// Interval between scheduled scans, which the countdown hints at.
pub const SCAN_INTERVAL_SECS: u32 = 3600;

/// State shared between the pipeline, the digest compiler, and whatever
/// presentation layer the host wires in.
pub struct AppState {
    calls: Mutex<Arc<Vec<EnrichedCall>>>,
    /// Summary adopted from the enrichment agent, when it sent one.
    summary: Mutex<Option<CallSummary>>,
    phase: Mutex<PipelinePhase>,
    status: Mutex<String>,
    active_agent: Mutex<Option<AgentKind>>,
    /// RFC3339 timestamp of the last committed run.
    last_scan_at: Mutex<Option<String>>,
    /// Seconds until the next scheduled scan (display hint only).
    countdown: Mutex<u32>,
    /// When on and no scan has committed, readers see the sample set.
    sample_mode: AtomicBool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Arc::new(Vec::new())),
            summary: Mutex::new(None),
            phase: Mutex::new(PipelinePhase::Idle),
            status: Mutex::new(String::new()),
            active_agent: Mutex::new(None),
            last_scan_at: Mutex::new(None),
            countdown: Mutex::new(SCAN_INTERVAL_SECS),
            sample_mode: AtomicBool::new(false),
        }
    }

    // -- canonical set ------------------------------------------------------

    /// The committed canonical set.
    pub fn calls(&self) -> Arc<Vec<EnrichedCall>> {
        self.calls.lock().clone()
    }

    /// The set readers should display: the canonical set, or the built-in
    /// sample set when sample mode is on and nothing has committed yet.
    pub fn active_calls(&self) -> Arc<Vec<EnrichedCall>> {
        let calls = self.calls();
        if calls.is_empty() && self.sample_mode() {
            Arc::new(presets::sample_calls())
        } else {
            calls
        }
    }

    /// Install a new canonical set. Stamps the run timestamp and resets the
    /// scan countdown; an adopted summary replaces the previous one
    /// wholesale (including replacing it with nothing).
    pub fn commit(&self, calls: Vec<EnrichedCall>, summary: Option<CallSummary>) {
        *self.calls.lock() = Arc::new(calls);
        *self.summary.lock() = summary;
        *self.last_scan_at.lock() = Some(Utc::now().to_rfc3339());
        self.reset_countdown();
    }

    // -- summary ------------------------------------------------------------

    /// The summary readers should display. Resolution order: adopted from
    /// enrichment, the sample summary (sample mode, nothing committed), or
    /// derived by counting. Never a field-by-field merge.
    pub fn active_summary(&self, today: &str) -> CallSummary {
        if let Some(adopted) = self.summary.lock().clone() {
            return adopted;
        }
        let calls = self.calls();
        if calls.is_empty() && self.sample_mode() {
            return presets::sample_summary();
        }
        derive_summary(&calls, today)
    }

    // -- observer surface ---------------------------------------------------

    pub fn status(&self) -> String {
        self.status.lock().clone()
    }

    pub fn set_status(&self, status: impl Into<String>) {
        let status = status.into();
        log::info!("status: {}", status);
        *self.status.lock() = status;
    }

    pub fn phase(&self) -> PipelinePhase {
        *self.phase.lock()
    }

    pub fn set_phase(&self, phase: PipelinePhase) {
        *self.phase.lock() = phase;
    }

    pub fn active_agent(&self) -> Option<AgentKind> {
        *self.active_agent.lock()
    }

    pub fn set_active_agent(&self, agent: Option<AgentKind>) {
        *self.active_agent.lock() = agent;
    }

    pub fn last_scan_at(&self) -> Option<String> {
        self.last_scan_at.lock().clone()
    }

    // -- countdown ----------------------------------------------------------

    pub fn countdown(&self) -> u32 {
        *self.countdown.lock()
    }

    /// One-second tick. Wraps back to the full interval at zero.
    pub fn tick_countdown(&self) -> u32 {
        let mut guard = self.countdown.lock();
        *guard = if *guard <= 1 {
            SCAN_INTERVAL_SECS
        } else {
            *guard - 1
        };
        *guard
    }

    pub fn reset_countdown(&self) {
        *self.countdown.lock() = SCAN_INTERVAL_SECS;
    }

    // -- sample mode --------------------------------------------------------

    pub fn sample_mode(&self) -> bool {
        self.sample_mode.load(Ordering::Relaxed)
    }

    pub fn set_sample_mode(&self, on: bool) {
        self.sample_mode.store(on, Ordering::Relaxed);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_installs_new_set_and_stamps_run() {
        let state = AppState::new();
        assert!(state.last_scan_at().is_none());

        let before = state.calls();
        state.commit(presets::sample_calls(), None);

        // Copy-on-write: the pre-commit snapshot is untouched.
        assert!(before.is_empty());
        assert_eq!(state.calls().len(), 5);
        assert!(state.last_scan_at().is_some());
        assert_eq!(state.countdown(), SCAN_INTERVAL_SECS);
    }

    #[test]
    fn test_adopted_summary_replaced_wholesale() {
        let state = AppState::new();
        state.commit(presets::sample_calls(), Some(presets::sample_summary()));
        assert_eq!(state.active_summary("2026-02-21").pipeline_status, "Healthy");

        // A later commit without a summary drops the adopted one entirely.
        state.commit(presets::sample_calls(), None);
        assert_eq!(state.active_summary("2026-02-21").pipeline_status, "Active");
    }

    #[test]
    fn test_sample_mode_only_covers_empty_canonical_set() {
        let state = AppState::new();
        state.set_sample_mode(true);
        assert_eq!(state.active_calls().len(), 5);
        assert_eq!(state.active_summary("2026-02-21").pipeline_status, "Healthy");

        state.commit(vec![EnrichedCall::default()], None);
        assert_eq!(state.active_calls().len(), 1);
    }

    #[test]
    fn test_countdown_wraps_at_zero() {
        let state = AppState::new();
        *state.countdown.lock() = 2;
        assert_eq!(state.tick_countdown(), 1);
        assert_eq!(state.tick_countdown(), SCAN_INTERVAL_SECS);
    }
}
