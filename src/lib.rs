//! DemoTrack — email intelligence for sales demo calls.
//!
//! Tracks demo calls mined from an inbox, enriches them with company
//! research via external agents, and derives the triage view. The heart of
//! the crate is the enrichment pipeline in [`pipeline`]: it drives the
//! scan → enrich agent sequence, tolerates each stage failing or returning
//! unpredictable shapes, and degrades to partial results instead of failing
//! outright. Transport, scheduling storage, and rendering are the host's
//! concern, reached through the traits in [`agent`] and [`scheduler`].

pub mod agent;
pub mod digest;
pub mod error;
pub mod normalize;
pub mod pipeline;
pub mod presets;
pub mod scheduler;
pub mod search;
pub mod state;
pub mod types;
pub mod view;

pub use agent::{AgentInstruction, AgentInvoker, AgentKind, AgentReply};
pub use digest::{send_digest, DigestOutcome};
pub use error::AgentError;
pub use pipeline::{run_scan, ScanOutcome};
pub use state::AppState;
pub use types::{Attendee, CallSummary, EnrichedCall, PipelinePhase};
pub use view::{apply_view, CallFilters, SortConfig, SortDirection, SortKey};
