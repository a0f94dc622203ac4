use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use chrono::Local;
use scope_core::{ExportDocument, HistoryEntry, Result, StaticInfo, Statistics, UsageSnapshot};

use crate::history::HistoryBuffer;
use crate::provider::{MetricsProvider, SystemProvider};

/// Number of `(time, usage)` samples retained by default.
pub const DEFAULT_HISTORY_CAPACITY: usize = 60;

/// Fixed measuring sub-interval used by the real-time loop, distinct from
/// the display interval between frames.
pub const MEASURE_WINDOW: Duration = Duration::from_millis(100);

/// Measuring window used for one-off snapshots (menu view, export).
pub const SNAPSHOT_WINDOW: Duration = Duration::from_secs(1);

/// How often the sleep between frames re-checks the stop flag.
const STOP_POLL_SLICE: Duration = Duration::from_millis(100);

/// How a monitoring loop ended. Both variants are success paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// All requested samples were taken.
    Completed,
    /// The stop flag was raised before the last sample.
    Interrupted,
}

/// Owns the metrics provider and the bounded usage history.
///
/// One instance lives for the whole interactive session and is passed
/// explicitly to each menu action — there is no process-wide singleton.
pub struct SamplingMonitor<P = SystemProvider> {
    provider: P,
    history: HistoryBuffer,
}

impl SamplingMonitor<SystemProvider> {
    pub fn new() -> Self {
        Self::with_provider(SystemProvider::new())
    }
}

impl Default for SamplingMonitor<SystemProvider> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MetricsProvider> SamplingMonitor<P> {
    pub fn with_provider(provider: P) -> Self {
        Self {
            provider,
            history: HistoryBuffer::new(DEFAULT_HISTORY_CAPACITY),
        }
    }

    /// Take one usage snapshot, blocking for `window` while the provider
    /// measures.
    pub fn snapshot(&mut self, window: Duration) -> Result<UsageSnapshot> {
        self.provider.fetch_usage(window)
    }

    /// Describe the CPU (fetched fresh, never cached).
    pub fn static_info(&mut self) -> Result<StaticInfo> {
        self.provider.fetch_static_info()
    }

    /// Read-only view of the retained history, most recent last.
    #[must_use]
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Mean/min/max over the retained history.
    pub fn statistics(&self) -> Result<Statistics> {
        self.history.statistics()
    }

    /// Run the real-time monitoring loop for `samples` steps.
    ///
    /// Each step measures over the fixed [`MEASURE_WINDOW`], hands the
    /// snapshot to `on_frame` for rendering, appends `(time, total_usage)`
    /// to the history, then sleeps out the rest of `display_interval`.
    /// A failed sample is logged and skipped — one bad read must not end a
    /// running session, and no partial snapshot ever reaches the history.
    /// The stop flag is polled before each sample and during the sleep.
    pub fn run_loop<F>(
        &mut self,
        samples: u64,
        display_interval: Duration,
        stop: &AtomicBool,
        mut on_frame: F,
    ) -> LoopOutcome
    where
        F: FnMut(u64, &UsageSnapshot),
    {
        for step in 0..samples {
            if stop.load(Ordering::Relaxed) {
                return LoopOutcome::Interrupted;
            }

            match self.provider.fetch_usage(MEASURE_WINDOW) {
                Ok(snapshot) => {
                    on_frame(step, &snapshot);
                    self.history.push(HistoryEntry {
                        time: snapshot.timestamp,
                        usage: snapshot.total_usage,
                    });
                }
                Err(e) => {
                    tracing::warn!("sample {} failed, continuing: {e}", step + 1);
                }
            }

            if step + 1 < samples {
                // Display intervals shorter than the measuring window clamp
                // to it: the sleep saturates at zero.
                let pause = display_interval.saturating_sub(MEASURE_WINDOW);
                if sleep_interruptible(pause, stop) {
                    return LoopOutcome::Interrupted;
                }
            }
        }

        LoopOutcome::Completed
    }

    /// Serialize static info, a fresh usage snapshot, and the history to
    /// `path` as pretty-printed JSON, overwriting any existing content.
    pub fn export_snapshot(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let cpu_info = self.provider.fetch_static_info()?;
        let current_usage = self.provider.fetch_usage(SNAPSHOT_WINDOW)?;

        let document = ExportDocument {
            timestamp: Local::now(),
            cpu_info,
            current_usage,
            history: self.history.iter().cloned().collect(),
        };

        let json = serde_json::to_string_pretty(&document)?;
        std::fs::write(path.as_ref(), json)?;

        tracing::debug!(
            "exported {} history entries to '{}'",
            document.history.len(),
            path.as_ref().display()
        );
        Ok(())
    }
}

/// Sleep for `total`, waking early if the stop flag is raised.
/// Returns `true` when interrupted.
fn sleep_interruptible(total: Duration, stop: &AtomicBool) -> bool {
    let mut remaining = total;
    while !remaining.is_zero() {
        if stop.load(Ordering::Relaxed) {
            return true;
        }
        let slice = remaining.min(STOP_POLL_SLICE);
        std::thread::sleep(slice);
        remaining -= slice;
    }
    stop.load(Ordering::Relaxed)
}
