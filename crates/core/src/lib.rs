pub mod error;
pub mod snapshot;

pub use error::{Result, ScopeError};
pub use snapshot::{
    CpuTimes, ExportDocument, HistoryEntry, LoadAverage, StaticInfo, Statistics,
    TemperatureReading, UsageSnapshot,
};
