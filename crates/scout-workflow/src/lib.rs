//! # scout-workflow
//!
//! The stateful middle of Scout: drives the submit-then-poll lifecycle for
//! long-running research jobs, owns the explicit response cache, and performs
//! the save-to-items operation.
//!
//! The polling contract:
//! - fetches for one job handle are strictly sequential, never overlapped
//! - a terminal status (`completed`, `failed`, `cancelled`) permanently stops
//!   the loop for that handle
//! - one failed fetch is retried locally up to a bounded number of times at a
//!   fixed backoff before the error surfaces
//! - fetches park while the session is paused and resume when it reopens
//! - cancellation is a separate out-of-band call; the loop stops only when it
//!   observes the `cancelled` status

pub mod cache;
pub mod poller;
pub mod save;

mod error;

pub use cache::{ITEMS_ENDPOINT, Lookup, POLL_ENDPOINT, ResponseCache};
pub use error::WorkflowError;
pub use poller::{
    PollConfig, PollSession, PollStep, ResearchJobs, cancel, poll_once, poll_until_terminal,
    run_research, submit,
};
pub use save::{ItemsStore, save_research};
