//! Per-appender worker thread: runs the appender lifecycle state machine.
//!
//! One `AppenderWorker` per registered appender. It owns the appender
//! exclusively for the life of its thread, so the appender never needs
//! internal locking.

use super::appender::Appender;
use super::bounded_queue::{BoundedQueue, DequeueOutcome};
use super::log_record::LogRecord;
use super::metrics::PipelineMetrics;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

const QUEUE_POLL_INTERVAL: Duration = Duration::from_millis(10);
const SETUP_RETRY_SLEEP: Duration = Duration::from_secs(1);
const SETUP_FAILURE_THRESHOLD: u32 = 10;
const WAIT_AFTER_FAIL_SLEEP: Duration = Duration::from_millis(500);
const RESTART_COOLDOWN: Duration = Duration::from_secs(5);

enum State {
    BeforeSetup,
    Running,
    WaitAfterFail,
    ToRestart,
    BeforeTearDown,
}

pub struct AppenderWorker {
    handle: Option<JoinHandle<()>>,
}

impl AppenderWorker {
    /// Spawns the worker thread. `terminated` is shared with the owning
    /// `AppenderAdapter`; setting it asks the worker to drain and exit.
    pub fn spawn(
        mut appender: Box<dyn Appender>,
        queue: Arc<BoundedQueue<LogRecord>>,
        terminated: Arc<AtomicBool>,
        metrics: Arc<PipelineMetrics>,
    ) -> Self {
        let thread_name = format!("appender-worker-{}", appender.name());
        let handle = thread::Builder::new()
            .name(thread_name)
            .spawn(move || run(appender.as_mut(), &queue, &terminated, &metrics))
            .expect("failed to spawn appender worker thread");
        Self {
            handle: Some(handle),
        }
    }

    /// Blocks until the worker thread has exited. Idempotent.
    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for AppenderWorker {
    fn drop(&mut self) {
        self.join();
    }
}

fn run(
    appender: &mut dyn Appender,
    queue: &BoundedQueue<LogRecord>,
    terminated: &AtomicBool,
    metrics: &PipelineMetrics,
) {
    let name = appender.name().to_string();
    let mut state = State::BeforeSetup;
    let mut setup_failures: u32 = 0;
    let mut last_error_at: Option<Instant> = None;

    loop {
        state = match state {
            State::BeforeSetup => {
                match catch_unwind(AssertUnwindSafe(|| appender.setup())) {
                    Ok(Ok(())) => State::Running,
                    Ok(Err(err)) => {
                        setup_failures += 1;
                        eprintln!(
                            "[LOGGER WARNING] appender '{name}' setup failed (attempt {setup_failures}): {err}"
                        );
                        if setup_failures >= SETUP_FAILURE_THRESHOLD {
                            last_error_at = Some(Instant::now());
                            State::WaitAfterFail
                        } else {
                            thread::sleep(SETUP_RETRY_SLEEP);
                            State::BeforeSetup
                        }
                    }
                    Err(_) => {
                        setup_failures += 1;
                        eprintln!(
                            "[LOGGER CRITICAL] appender '{name}' panicked during setup (attempt {setup_failures})"
                        );
                        if setup_failures >= SETUP_FAILURE_THRESHOLD {
                            last_error_at = Some(Instant::now());
                            State::WaitAfterFail
                        } else {
                            thread::sleep(SETUP_RETRY_SLEEP);
                            State::BeforeSetup
                        }
                    }
                }
            }

            State::Running => match queue.dequeue(QUEUE_POLL_INTERVAL) {
                DequeueOutcome::Signaled(record) => {
                    match catch_unwind(AssertUnwindSafe(|| appender.write(&record))) {
                        Ok(Ok(())) => {
                            metrics.record_delivered();
                            State::Running
                        }
                        Ok(Err(err)) => {
                            eprintln!("[LOGGER ERROR] appender '{name}' write failed: {err}");
                            metrics.record_appender_failure();
                            last_error_at = Some(Instant::now());
                            State::WaitAfterFail
                        }
                        Err(_) => {
                            eprintln!("[LOGGER CRITICAL] appender '{name}' panicked during write");
                            metrics.record_appender_failure();
                            last_error_at = Some(Instant::now());
                            State::WaitAfterFail
                        }
                    }
                }
                DequeueOutcome::Timeout => {
                    if terminated.load(Ordering::Acquire) && queue.size() == 0 {
                        State::BeforeTearDown
                    } else {
                        State::Running
                    }
                }
                DequeueOutcome::Shutdown => State::BeforeTearDown,
            },

            State::WaitAfterFail => {
                thread::sleep(WAIT_AFTER_FAIL_SLEEP);
                if terminated.load(Ordering::Acquire) {
                    State::BeforeTearDown
                } else if last_error_at
                    .map(|at| at.elapsed() >= RESTART_COOLDOWN)
                    .unwrap_or(true)
                {
                    State::ToRestart
                } else {
                    State::WaitAfterFail
                }
            }

            State::ToRestart => {
                match catch_unwind(AssertUnwindSafe(|| appender.try_restart())) {
                    Ok(true) => {
                        last_error_at = None;
                        metrics.record_appender_restart();
                        State::Running
                    }
                    Ok(false) => {
                        last_error_at = Some(Instant::now());
                        State::WaitAfterFail
                    }
                    Err(_) => {
                        eprintln!(
                            "[LOGGER CRITICAL] appender '{name}' panicked during try_restart"
                        );
                        last_error_at = Some(Instant::now());
                        State::WaitAfterFail
                    }
                }
            }

            State::BeforeTearDown => break,
        };
    }

    match catch_unwind(AssertUnwindSafe(|| appender.teardown())) {
        Ok(Ok(())) => {}
        Ok(Err(err)) => eprintln!("[LOGGER ERROR] appender '{name}' teardown failed: {err}"),
        Err(_) => eprintln!("[LOGGER CRITICAL] appender '{name}' panicked during teardown"),
    }
}
