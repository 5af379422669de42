//! Scheduling store contract and the scan countdown.
//!
//! The scheduling store itself (cron storage, execution history) is an
//! external collaborator; only its call surface lives here so the host's
//! presentation layer and the pipeline's "run now" action share one
//! contract. Every operation answers in-band with a `success` flag, same as
//! the agent seam.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Store types
// ---------------------------------------------------------------------------

/// A recurring agent schedule as the store reports it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub agent_id: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub cron_expression: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub next_run_time: Option<String>,
    #[serde(default)]
    pub last_run_at: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

/// One historical execution of a schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionLog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub executed_at: Option<String>,
}

/// In-band acknowledgement for mutating operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreAck {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub schedules: Vec<Schedule>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExecutionLogList {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub executions: Vec<ExecutionLog>,
    #[serde(default)]
    pub error: Option<String>,
}

// ---------------------------------------------------------------------------
// Store seam
// ---------------------------------------------------------------------------

/// Scheduling store operations. Triggering the scan schedule now is
/// semantically the same action as the pipeline's explicit run request.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    async fn list_schedules(&self) -> ScheduleList;
    async fn get_schedule_logs(&self, schedule_id: &str, limit: usize) -> ExecutionLogList;
    async fn pause_schedule(&self, schedule_id: &str) -> StoreAck;
    async fn resume_schedule(&self, schedule_id: &str) -> StoreAck;
    async fn trigger_schedule_now(&self, schedule_id: &str) -> StoreAck;
}

// ---------------------------------------------------------------------------
// Countdown
// ---------------------------------------------------------------------------

/// Spawn the one-second countdown ticker.
///
/// Independent of pipeline correctness — it only feeds the "next scheduled
/// scan" hint. Cancel by aborting the returned handle; the countdown value
/// itself resets on a successful commit or an explicit
/// [`AppState::reset_countdown`].
pub fn run_countdown(state: Arc<AppState>) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            state.tick_countdown();
        }
    })
}
