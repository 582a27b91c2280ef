use futures::{Stream, StreamExt};
use std::future::Future;

use crate::core::types::{ExitStatus, RequestOutcome};
use crate::reporting::logging;
use crate::ui::progress::ProgressReporter;

/// Whether the consumer keeps reading outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Counters for one run, owned by the aggregator alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    total: usize,
    completed: usize,
    errors: u64,
    max_errors: u64,
}

impl RunState {
    pub fn new(total: usize, max_errors: u64) -> Self {
        Self {
            total,
            completed: 0,
            errors: 0,
            max_errors,
        }
    }

    /// Count one outcome. The error counter is bumped before it is compared,
    /// so the run stops on the first error past `max_errors`.
    pub fn record(&mut self, outcome: &RequestOutcome) -> Flow {
        self.completed += 1;
        if outcome.is_err() {
            self.errors += 1;
            if self.errors > self.max_errors {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }

    pub fn percent_complete(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        100.0 * self.completed as f64 / self.total as f64
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn errors(&self) -> u64 {
        self.errors
    }
}

/// What the aggregator saw by the time it stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub completed: usize,
    pub errors: u64,
    pub max_errors: u64,
    /// Stopped because the error budget ran out
    pub aborted: bool,
    /// Stopped by the operator
    pub interrupted: bool,
}

impl RunSummary {
    pub fn exit_status(&self) -> ExitStatus {
        ExitStatus::from_run(self.interrupted, self.errors)
    }
}

/// Single consumer of the outcome stream.
pub struct Aggregator {
    max_errors: u64,
    progress: ProgressReporter,
}

impl Aggregator {
    pub fn new(max_errors: u64, progress: ProgressReporter) -> Self {
        Self {
            max_errors,
            progress,
        }
    }

    /// Read outcomes until the stream ends, the error budget is exceeded, or
    /// `interrupt` resolves.
    ///
    /// Outcomes still in flight when consumption stops are never awaited;
    /// the caller drops the stream, which abandons them.
    pub async fn consume<S, F>(&self, mut outcomes: S, total: usize, interrupt: F) -> RunSummary
    where
        S: Stream<Item = RequestOutcome> + Unpin,
        F: Future<Output = ()>,
    {
        let mut state = RunState::new(total, self.max_errors);
        let mut aborted = false;
        let mut interrupted = false;

        self.progress.start(total);
        tokio::pin!(interrupt);

        loop {
            tokio::select! {
                biased;

                _ = &mut interrupt => {
                    interrupted = true;
                    break;
                }
                next = outcomes.next() => {
                    let Some(outcome) = next else {
                        break;
                    };

                    logging::log_outcome(&outcome);
                    let flow = state.record(&outcome);
                    if outcome.is_err() {
                        self.progress.report_failure(&outcome);
                    }
                    if flow == Flow::Stop {
                        self.progress.report_abort();
                        aborted = true;
                        break;
                    }
                    self.progress.update(state.completed(), state.percent_complete());
                }
            }
        }

        self.progress.finish();

        RunSummary {
            total: state.total(),
            completed: state.completed(),
            errors: state.errors(),
            max_errors: self.max_errors,
            aborted,
            interrupted,
        }
    }
}
