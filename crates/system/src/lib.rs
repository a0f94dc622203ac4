pub mod history;
pub mod monitor;
pub mod provider;
pub mod times;

pub use history::HistoryBuffer;
pub use monitor::{
    LoopOutcome, SamplingMonitor, DEFAULT_HISTORY_CAPACITY, MEASURE_WINDOW, SNAPSHOT_WINDOW,
};
pub use provider::{MetricsProvider, SystemProvider};
