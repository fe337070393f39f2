//! Workflow error types.
//!
//! The taxonomy mirrors how each failure surfaces: submission, cancellation,
//! and persistence errors surface immediately with no local retry; a poll
//! error carries the number of attempts it exhausted first.

use thiserror::Error;

use scout_client::ApiError;

/// Errors raised by the research workflow.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Starting a job failed. Not retried; the decision is the caller's.
    #[error("failed to submit research job: {0}")]
    Submit(#[source] ApiError),

    /// A status fetch failed after exhausting local retries.
    #[error("poll failed after {attempts} attempt(s): {source}")]
    Poll {
        /// Total fetch attempts made, including the first.
        attempts: u32,
        #[source]
        source: ApiError,
    },

    /// Requesting job cancellation failed. Local polling state is unaffected.
    #[error("failed to cancel research job: {0}")]
    Cancel(#[source] ApiError),

    /// Persisting a mapped item failed. Nothing was created.
    #[error("failed to save item: {0}")]
    Persist(#[source] ApiError),
}
