use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A point-in-time measurement of CPU usage.
///
/// Optional fields are `None` when the platform does not expose the signal —
/// they are never filled with synthetic zeros.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Instant of capture.
    pub timestamp: DateTime<Local>,
    /// Total CPU usage across all cores (0.0 – 100.0).
    pub total_usage: f32,
    /// Per-core usage (0.0 – 100.0), ordered by core index.
    pub per_core_usage: Vec<f32>,
    /// 1/5/15-minute load averages; `None` on platforms without the concept.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub load_average: Option<LoadAverage>,
    /// Cumulative CPU time breakdown; `None` where kernel counters are
    /// unavailable.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub times: Option<CpuTimes>,
    /// CPU-related temperature sensors; `None` when no sensor is exposed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub temperatures: Option<Vec<TemperatureReading>>,
}

/// 1/5/15-minute system load averages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Cumulative CPU times in seconds since boot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CpuTimes {
    pub user: f64,
    pub system: f64,
    pub idle: f64,
    pub iowait: f64,
    /// Hardware plus software interrupt time.
    pub interrupt: f64,
}

/// One temperature sensor reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureReading {
    /// Sensor label as reported by the hardware, e.g. `"Package id 0"`.
    pub label: String,
    /// Current temperature in °C.
    pub current: f32,
    /// High threshold in °C, if the sensor reports one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub high: Option<f32>,
    /// Critical threshold in °C, if the sensor reports one.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub critical: Option<f32>,
}

/// Immutable-per-process description of the CPU.
///
/// Captured on demand rather than cached — frequency scaling makes the
/// "current frequency" field time-sensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticInfo {
    /// Processor brand string, e.g. `"AMD Ryzen 7 5800X"`.
    pub processor: String,
    /// CPU architecture, e.g. `"x86_64"`.
    pub architecture: String,
    /// Physical core count; `None` when the platform cannot report it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub physical_cores: Option<usize>,
    /// Logical core (thread) count.
    pub logical_cores: usize,
    /// Maximum rated frequency in MHz; `None` when not exposed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_frequency_mhz: Option<u64>,
    /// Current frequency in MHz.
    pub current_frequency_mhz: u64,
}

/// One retained `(time, usage)` pair in the history window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub time: DateTime<Local>,
    pub usage: f32,
}

/// Summary over the history window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub mean: f32,
    pub min: f32,
    pub max: f32,
}

/// The JSON export payload: everything the monitor knows at export time.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Export instant.
    pub timestamp: DateTime<Local>,
    pub cpu_info: StaticInfo,
    pub current_usage: UsageSnapshot,
    pub history: Vec<HistoryEntry>,
}
