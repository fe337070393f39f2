//! The submit-then-poll lifecycle for long-running research jobs.
//!
//! One job moves through `submit → poll → … → terminal`. Status fetches for a
//! handle are strictly sequential: the next tick is scheduled only after the
//! previous fetch settles, and no fetch is ever issued after a terminal
//! status has been observed. Intermediate states are published through a
//! watch channel and the session cache rather than callbacks; callers
//! pattern-match on the returned results.

use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::watch;

use scout_client::{ApiClient, ApiError, GeminiRequest};
use scout_core::job::JobHandle;
use scout_core::research::GeminiResult;

use crate::cache::{POLL_ENDPOINT, ResponseCache};
use crate::error::WorkflowError;

/// Scheduling knobs for the poll loop.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Delay between consecutive status fetches.
    pub interval: Duration,
    /// Local retries permitted for one failed fetch before surfacing.
    pub max_retries: u32,
    /// Fixed delay between those retries.
    pub retry_backoff: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(5_000),
            max_retries: 3,
            retry_backoff: Duration::from_millis(1_000),
        }
    }
}

/// Outcome of a single status fetch.
#[derive(Debug, Clone)]
pub enum PollStep {
    /// The job is still in flight; another fetch is due after the interval.
    Pending(GeminiResult),
    /// A terminal status was observed; polling for this handle is over.
    Terminal(GeminiResult),
}

/// The job operations the workflow drives.
///
/// [`ApiClient`] is the production implementation; tests script their own.
pub trait ResearchJobs {
    fn start_job(
        &self,
        request: &GeminiRequest,
    ) -> impl Future<Output = Result<JobHandle, ApiError>>;

    fn poll_job(
        &self,
        handle: &JobHandle,
    ) -> impl Future<Output = Result<GeminiResult, ApiError>>;

    fn cancel_job(&self, interaction_id: &str) -> impl Future<Output = Result<(), ApiError>>;
}

impl ResearchJobs for ApiClient {
    async fn start_job(&self, request: &GeminiRequest) -> Result<JobHandle, ApiError> {
        self.start_deep_research(request).await
    }

    async fn poll_job(&self, handle: &JobHandle) -> Result<GeminiResult, ApiError> {
        self.poll_deep_research(handle).await
    }

    async fn cancel_job(&self, interaction_id: &str) -> Result<(), ApiError> {
        self.cancel_deep_research(interaction_id).await
    }
}

/// Shared state around one polling run: the pause gate, the latest-snapshot
/// channel the presentation layer watches, and the response cache.
///
/// The cache is owned here and only read elsewhere; snapshots are keyed by
/// `(interaction id, cursor)` under [`POLL_ENDPOINT`].
pub struct PollSession {
    active: watch::Sender<bool>,
    snapshot: watch::Sender<Option<GeminiResult>>,
    cache: Mutex<ResponseCache>,
}

impl PollSession {
    /// A session that starts active (not paused).
    #[must_use]
    pub fn new(cache_ttl: Duration) -> Self {
        Self {
            active: watch::Sender::new(true),
            snapshot: watch::Sender::new(None),
            cache: Mutex::new(ResponseCache::new(cache_ttl)),
        }
    }

    /// Suspend fetches, e.g. while the host surface is not visible.
    /// An in-flight fetch still settles; only the next tick parks.
    pub fn pause(&self) {
        let _ = self.active.send(false);
    }

    /// Resume fetches after [`PollSession::pause`].
    pub fn resume(&self) {
        let _ = self.active.send(true);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        !*self.active.borrow()
    }

    /// Watch the latest observed job state. Yields `None` until the first
    /// fetch settles.
    #[must_use]
    pub fn watch_snapshots(&self) -> watch::Receiver<Option<GeminiResult>> {
        self.snapshot.subscribe()
    }

    /// The response cache for this session. Read-only outside this crate.
    #[must_use]
    pub fn cache(&self) -> &Mutex<ResponseCache> {
        &self.cache
    }

    fn gate(&self) -> watch::Receiver<bool> {
        self.active.subscribe()
    }

    fn publish(&self, cursor: Option<&str>, result: &GeminiResult) {
        if let Ok(value) = serde_json::to_value(result) {
            let params = format!(
                "{}:{}",
                result.interaction_id,
                cursor.unwrap_or_default()
            );
            let mut cache = self
                .cache
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            cache.put(POLL_ENDPOINT, &params, value);
        }
        self.snapshot.send_replace(Some(result.clone()));
    }
}

/// Submit a new research job.
///
/// # Errors
///
/// Submission failures surface immediately as [`WorkflowError::Submit`];
/// retrying is the caller's decision.
pub async fn submit<C: ResearchJobs>(
    client: &C,
    request: &GeminiRequest,
) -> Result<JobHandle, WorkflowError> {
    client
        .start_job(request)
        .await
        .map_err(WorkflowError::Submit)
}

/// Perform one status fetch, retrying transient failures locally.
///
/// Up to `config.max_retries` retries are made at the fixed
/// `config.retry_backoff`; deterministic failures (validation, parse) are
/// never retried.
///
/// # Errors
///
/// Returns [`WorkflowError::Poll`] carrying the attempt count once retries
/// are exhausted or a non-retryable error occurs.
pub async fn poll_once<C: ResearchJobs>(
    client: &C,
    handle: &JobHandle,
    config: &PollConfig,
) -> Result<PollStep, WorkflowError> {
    let mut attempt: u32 = 0;
    loop {
        attempt += 1;
        match client.poll_job(handle).await {
            Ok(result) => {
                let step = if result.status.is_terminal() {
                    PollStep::Terminal(result)
                } else {
                    PollStep::Pending(result)
                };
                return Ok(step);
            }
            Err(error) if error.is_transient() && attempt <= config.max_retries => {
                tracing::warn!(
                    interaction_id = %handle.interaction_id,
                    attempt,
                    %error,
                    "status fetch failed; retrying"
                );
                tokio::time::sleep(config.retry_backoff).await;
            }
            Err(source) => {
                return Err(WorkflowError::Poll {
                    attempts: attempt,
                    source,
                });
            }
        }
    }
}

/// Drive a job handle to a terminal status.
///
/// Consumes the handle: a finished loop cannot be restarted except by
/// submitting a new job. Each successful fetch is published to the session's
/// snapshot channel and cache; the cursor advances to the last event seen so
/// subsequent fetches are incremental. While the session is paused the loop
/// parks before issuing the next fetch and resumes when the gate reopens.
///
/// # Errors
///
/// Returns [`WorkflowError::Poll`] when a fetch fails after exhausting its
/// local retries.
pub async fn poll_until_terminal<C: ResearchJobs>(
    client: &C,
    handle: JobHandle,
    config: &PollConfig,
    session: &PollSession,
) -> Result<GeminiResult, WorkflowError> {
    let mut handle = handle;
    let mut gate = session.gate();

    loop {
        // Park while the host surface is hidden. A closed channel means the
        // session owner is gone and nobody can pause us; keep going.
        let _ = gate.wait_for(|active| *active).await;

        let cursor = handle.last_event_id.clone();
        match poll_once(client, &handle, config).await? {
            PollStep::Terminal(result) => {
                session.publish(cursor.as_deref(), &result);
                tracing::debug!(
                    interaction_id = %result.interaction_id,
                    status = %result.status,
                    "job reached terminal status; polling stopped"
                );
                return Ok(result);
            }
            PollStep::Pending(result) => {
                session.publish(cursor.as_deref(), &result);
                handle = handle.with_cursor(result.last_event_id);
                tokio::time::sleep(config.interval).await;
            }
        }
    }
}

/// Request out-of-band cancellation of a job.
///
/// Deliberately does not touch the local poll loop: the next tick observes
/// the `cancelled` terminal status and shuts the loop down, so the UI may
/// briefly keep showing `running`.
///
/// # Errors
///
/// Returns [`WorkflowError::Cancel`] immediately on failure; no retry.
pub async fn cancel<C: ResearchJobs>(client: &C, handle: &JobHandle) -> Result<(), WorkflowError> {
    client
        .cancel_job(&handle.interaction_id)
        .await
        .map_err(WorkflowError::Cancel)
}

/// The whole workflow: submit a request, then poll its handle to a terminal
/// status.
///
/// # Errors
///
/// Returns [`WorkflowError::Submit`] or [`WorkflowError::Poll`] from the
/// respective phase.
pub async fn run_research<C: ResearchJobs>(
    client: &C,
    request: &GeminiRequest,
    config: &PollConfig,
    session: &PollSession,
) -> Result<GeminiResult, WorkflowError> {
    let handle = submit(client, request).await?;
    poll_until_terminal(client, handle, config, session).await
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use scout_client::{ApiError, GeminiRequest};
    use scout_core::enums::JobStatus;
    use scout_core::job::JobHandle;
    use scout_core::research::{GeminiOutput, GeminiResult};

    use super::{
        PollConfig, PollSession, PollStep, ResearchJobs, cancel, poll_once, poll_until_terminal,
        run_research, submit,
    };
    use crate::cache::{Lookup, POLL_ENDPOINT};
    use crate::error::WorkflowError;

    fn result(status: JobStatus) -> GeminiResult {
        GeminiResult {
            interaction_id: "int-1".to_string(),
            status,
            outputs: Vec::new(),
            usage: None,
            completed_at: None,
            event_type: None,
            last_event_id: None,
        }
    }

    fn server_error() -> ApiError {
        ApiError::Api {
            status: 500,
            message: "upstream error".to_string(),
        }
    }

    struct ScriptedJobs {
        responses: Mutex<VecDeque<Result<GeminiResult, ApiError>>>,
        seen_cursors: Mutex<Vec<Option<String>>>,
        polls: AtomicU32,
        cancels: AtomicU32,
        fail_start: bool,
    }

    impl ScriptedJobs {
        fn new(responses: Vec<Result<GeminiResult, ApiError>>) -> Self {
            Self {
                responses: Mutex::new(responses.into_iter().collect()),
                seen_cursors: Mutex::new(Vec::new()),
                polls: AtomicU32::new(0),
                cancels: AtomicU32::new(0),
                fail_start: false,
            }
        }

        fn poll_count(&self) -> u32 {
            self.polls.load(Ordering::SeqCst)
        }
    }

    impl ResearchJobs for ScriptedJobs {
        async fn start_job(&self, _request: &GeminiRequest) -> Result<JobHandle, ApiError> {
            if self.fail_start {
                return Err(server_error());
            }
            Ok(JobHandle::new("int-1".to_string()))
        }

        async fn poll_job(&self, handle: &JobHandle) -> Result<GeminiResult, ApiError> {
            self.polls.fetch_add(1, Ordering::SeqCst);
            self.seen_cursors
                .lock()
                .unwrap()
                .push(handle.last_event_id.clone());
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("script exhausted: loop fetched after terminal status")
        }

        async fn cancel_job(&self, _interaction_id: &str) -> Result<(), ApiError> {
            self.cancels.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn fast_config() -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(5_000),
            max_retries: 3,
            retry_backoff: Duration::from_millis(1_000),
        }
    }

    fn session() -> PollSession {
        PollSession::new(Duration::from_secs(300))
    }

    #[tokio::test(start_paused = true)]
    async fn terminal_status_on_first_fetch_stops_immediately() {
        for status in [JobStatus::Completed, JobStatus::Failed, JobStatus::Cancelled] {
            let jobs = ScriptedJobs::new(vec![Ok(result(status))]);
            let session = session();

            let out = poll_until_terminal(
                &jobs,
                JobHandle::new("int-1".to_string()),
                &fast_config(),
                &session,
            )
            .await
            .unwrap();

            assert_eq!(out.status, status);
            // The script would panic if a fetch followed the terminal one.
            assert_eq!(jobs.poll_count(), 1);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn pending_running_completed_makes_two_intermediate_fetches() {
        let jobs = ScriptedJobs::new(vec![
            Ok(result(JobStatus::Pending)),
            Ok(result(JobStatus::Running)),
            Ok(GeminiResult {
                outputs: vec![
                    GeminiOutput {
                        content: Some("Part one.".to_string()),
                        thinking_summary: None,
                    },
                    GeminiOutput {
                        content: Some("Part two.".to_string()),
                        thinking_summary: None,
                    },
                ],
                ..result(JobStatus::Completed)
            }),
        ]);
        let session = session();
        let config = fast_config();

        let started = tokio::time::Instant::now();
        let out = run_research(
            &jobs,
            &GeminiRequest::new("ocean temperatures".to_string()),
            &config,
            &session,
        )
        .await
        .unwrap();

        assert_eq!(jobs.poll_count(), 3);
        // Two non-terminal fetches, each followed by one interval.
        assert_eq!(started.elapsed(), config.interval * 2);
        // Output order is preserved into the combined content.
        assert_eq!(out.combined_content(), "Part one.\n\nPart two.");
    }

    #[tokio::test(start_paused = true)]
    async fn non_terminal_status_schedules_exactly_one_more_fetch() {
        let jobs = ScriptedJobs::new(vec![
            Ok(result(JobStatus::Running)),
            Ok(result(JobStatus::Completed)),
        ]);
        let session = session();
        let config = fast_config();

        let started = tokio::time::Instant::now();
        poll_until_terminal(
            &jobs,
            JobHandle::new("int-1".to_string()),
            &config,
            &session,
        )
        .await
        .unwrap();

        assert_eq!(jobs.poll_count(), 2);
        assert_eq!(started.elapsed(), config.interval);
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_are_retried_with_fixed_backoff() {
        let jobs = ScriptedJobs::new(vec![
            Err(server_error()),
            Err(server_error()),
            Ok(result(JobStatus::Running)),
        ]);
        let config = fast_config();

        let started = tokio::time::Instant::now();
        let step = poll_once(&jobs, &JobHandle::new("int-1".to_string()), &config)
            .await
            .unwrap();

        assert!(matches!(step, PollStep::Pending(_)));
        assert_eq!(jobs.poll_count(), 3);
        assert_eq!(started.elapsed(), config.retry_backoff * 2);
    }

    #[tokio::test(start_paused = true)]
    async fn poll_error_surfaces_after_exhausting_retries() {
        let jobs = ScriptedJobs::new(vec![
            Err(server_error()),
            Err(server_error()),
            Err(server_error()),
            Err(server_error()),
        ]);

        let err = poll_once(&jobs, &JobHandle::new("int-1".to_string()), &fast_config())
            .await
            .unwrap_err();

        // First attempt plus three retries.
        assert_eq!(jobs.poll_count(), 4);
        match err {
            WorkflowError::Poll { attempts, .. } => assert_eq!(attempts, 4),
            other => panic!("expected Poll error, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn validation_errors_are_not_retried() {
        let jobs = ScriptedJobs::new(vec![Err(ApiError::Validation("bad".to_string()))]);

        let err = poll_once(&jobs, &JobHandle::new("int-1".to_string()), &fast_config())
            .await
            .unwrap_err();

        assert_eq!(jobs.poll_count(), 1);
        assert!(matches!(err, WorkflowError::Poll { attempts: 1, .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn paused_session_issues_no_fetches_until_resumed() {
        let jobs = Arc::new(ScriptedJobs::new(vec![Ok(result(JobStatus::Completed))]));
        let session = Arc::new(session());
        session.pause();
        assert!(session.is_paused());

        let task = {
            let jobs = Arc::clone(&jobs);
            let session = Arc::clone(&session);
            tokio::spawn(async move {
                poll_until_terminal(
                    &*jobs,
                    JobHandle::new("int-1".to_string()),
                    &fast_config(),
                    &session,
                )
                .await
            })
        };

        // Long after several intervals would have elapsed, still nothing.
        tokio::time::sleep(Duration::from_secs(600)).await;
        assert_eq!(jobs.poll_count(), 0);

        session.resume();
        let out = task.await.unwrap().unwrap();
        assert_eq!(out.status, JobStatus::Completed);
        assert_eq!(jobs.poll_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cursor_advances_between_fetches() {
        let jobs = ScriptedJobs::new(vec![
            Ok(GeminiResult {
                last_event_id: Some("ev-1".to_string()),
                ..result(JobStatus::Pending)
            }),
            Ok(result(JobStatus::Completed)),
        ]);
        let session = session();

        poll_until_terminal(
            &jobs,
            JobHandle::new("int-1".to_string()),
            &fast_config(),
            &session,
        )
        .await
        .unwrap();

        let cursors = jobs.seen_cursors.lock().unwrap().clone();
        assert_eq!(cursors, vec![None, Some("ev-1".to_string())]);
    }

    #[tokio::test(start_paused = true)]
    async fn snapshots_are_published_and_cached() {
        let jobs = ScriptedJobs::new(vec![
            Ok(result(JobStatus::Running)),
            Ok(result(JobStatus::Completed)),
        ]);
        let session = session();
        let mut watcher = session.watch_snapshots();
        assert!(watcher.borrow().is_none());

        poll_until_terminal(
            &jobs,
            JobHandle::new("int-1".to_string()),
            &fast_config(),
            &session,
        )
        .await
        .unwrap();

        let last = watcher.borrow_and_update().clone().unwrap();
        assert_eq!(last.status, JobStatus::Completed);

        let cache = session.cache().lock().unwrap();
        match cache.get(POLL_ENDPOINT, "int-1:") {
            Lookup::Fresh(value) => assert_eq!(value["status"], "completed"),
            other => panic!("expected fresh snapshot, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn submit_failure_surfaces_immediately() {
        let mut jobs = ScriptedJobs::new(Vec::new());
        jobs.fail_start = true;

        let err = submit(&jobs, &GeminiRequest::new("q".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, WorkflowError::Submit(_)));
        assert_eq!(jobs.poll_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_is_out_of_band_and_loop_stops_on_observed_status() {
        let jobs = ScriptedJobs::new(vec![
            Ok(result(JobStatus::Running)),
            Ok(result(JobStatus::Cancelled)),
        ]);
        let session = session();
        let handle = JobHandle::new("int-1".to_string());

        // Cancellation is a separate network call; it does not stop the loop.
        cancel(&jobs, &handle).await.unwrap();
        assert_eq!(jobs.cancels.load(Ordering::SeqCst), 1);

        let out = poll_until_terminal(&jobs, handle, &fast_config(), &session)
            .await
            .unwrap();
        assert_eq!(out.status, JobStatus::Cancelled);
        assert_eq!(jobs.poll_count(), 2);
    }
}
