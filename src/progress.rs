//! Concurrent export progress tracking.
//!
//! Each exporter reports a completion fraction under its task name; the
//! aggregator folds those into a global percentage and an elapsed-based ETA,
//! then pushes the new state to an injected display sink on the updating
//! thread. Fractions are expected to be non-decreasing per task but that is
//! the caller's responsibility; a regressing report simply regresses the
//! display.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// A consistent view of the run's progress at one update.
#[derive(Debug, Clone)]
pub struct ProgressSnapshot {
    /// Mean fraction across all registered tasks.
    pub overall: f64,
    /// Per-task fractions in registration order.
    pub tasks: Vec<(String, f64)>,
    /// `elapsed / overall - elapsed`, available once overall > 0.
    pub eta: Option<Duration>,
}

/// Display target for progress updates. Invoked synchronously on whichever
/// thread reported, while the aggregator's lock is held, so renders never
/// interleave.
pub trait ProgressSink: Send + Sync {
    fn display(&self, snapshot: &ProgressSnapshot);
}

/// Thread-safe per-task completion tracker for one conversion run.
pub struct ProgressAggregator {
    state: Mutex<Vec<(String, f64)>>,
    sink: Box<dyn ProgressSink>,
    started: Instant,
}

impl ProgressAggregator {
    /// Pre-register the tasks that will report. The global percentage is a
    /// mean over all of them, so unstarted tasks weigh in at zero.
    pub fn new<I, S>(tasks: I, sink: Box<dyn ProgressSink>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let state = tasks.into_iter().map(|name| (name.into(), 0.0)).collect();
        Self {
            state: Mutex::new(state),
            sink,
            started: Instant::now(),
        }
    }

    /// Record `fraction` for `task` and push the recomputed state to the
    /// sink. Updates for unregistered task names are ignored.
    pub fn update(&self, task: &str, fraction: f64) {
        let mut state = self.state.lock().expect("progress state poisoned");

        match state.iter_mut().find(|(name, _)| name == task) {
            Some(entry) => entry.1 = fraction,
            None => return,
        }

        let snapshot = self.snapshot_locked(&state);
        self.sink.display(&snapshot);
    }

    /// Current state without triggering the sink.
    pub fn snapshot(&self) -> ProgressSnapshot {
        let state = self.state.lock().expect("progress state poisoned");
        self.snapshot_locked(&state)
    }

    fn snapshot_locked(&self, state: &[(String, f64)]) -> ProgressSnapshot {
        let overall = if state.is_empty() {
            0.0
        } else {
            state.iter().map(|(_, fraction)| fraction).sum::<f64>() / state.len() as f64
        };

        let eta = if overall > 0.0 {
            let elapsed = self.started.elapsed().as_secs_f64();
            let remaining = (elapsed / overall - elapsed).max(0.0);
            Some(Duration::from_secs_f64(remaining))
        } else {
            None
        };

        ProgressSnapshot {
            overall,
            tasks: state.to_vec(),
            eta,
        }
    }
}

/// Renders a single-line progress bar to stderr, rewriting it in place.
pub struct ConsoleSink;

impl ConsoleSink {
    const BAR_LENGTH: usize = 30;
}

impl ProgressSink for ConsoleSink {
    fn display(&self, snapshot: &ProgressSnapshot) {
        let filled = ((Self::BAR_LENGTH as f64 * snapshot.overall) as usize).min(Self::BAR_LENGTH);
        let bar: String = "█".repeat(filled) + &"-".repeat(Self::BAR_LENGTH - filled);

        let details: Vec<String> = snapshot
            .tasks
            .iter()
            .map(|(name, fraction)| format!("{}: {}%", name, (fraction * 100.0) as u32))
            .collect();

        let eta = snapshot
            .eta
            .map(format_eta)
            .unwrap_or_else(|| "calculating...".to_string());

        eprint!(
            "\r\x1b[KProcessing: |{}| {}%  [{}]  ETA: {}",
            bar,
            (snapshot.overall * 100.0) as u32,
            details.join(" | "),
            eta
        );

        if snapshot.overall >= 1.0 {
            eprintln!("\nAll exports completed");
        }
    }
}

fn format_eta(eta: Duration) -> String {
    let total = eta.as_secs();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
