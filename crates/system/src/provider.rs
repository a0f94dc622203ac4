use std::time::Duration;

use chrono::Local;
use scope_core::{
    LoadAverage, Result, ScopeError, StaticInfo, TemperatureReading, UsageSnapshot,
};
use sysinfo::{Components, System};

/// Contract between the sampling monitor and the OS metrics source.
///
/// `fetch_usage` blocks for the measuring window. The three reads are
/// independent: an unavailable optional signal (load average, temperatures)
/// degrades to `None` inside the returned snapshot and never fails the call.
pub trait MetricsProvider {
    /// Measure CPU usage over `window` and return a full snapshot.
    fn fetch_usage(&mut self, window: Duration) -> Result<UsageSnapshot>;

    /// Describe the CPU. Captured fresh on every call.
    fn fetch_static_info(&mut self) -> Result<StaticInfo>;

    /// CPU-related temperature sensors, or `None` when none are exposed.
    fn fetch_temperatures(&mut self) -> Option<Vec<TemperatureReading>>;
}

/// Production [`MetricsProvider`] backed by the `sysinfo` crate.
pub struct SystemProvider {
    sys: System,
}

impl SystemProvider {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SystemProvider {
    fn fetch_usage(&mut self, window: Duration) -> Result<UsageSnapshot> {
        // Usage is the delta between two refreshes; sysinfo needs at least
        // MINIMUM_CPU_UPDATE_INTERVAL between them to produce real numbers.
        self.sys.refresh_cpu_usage();
        std::thread::sleep(window.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL));
        self.sys.refresh_cpu_usage();

        if self.sys.cpus().is_empty() {
            return Err(ScopeError::Provider(
                "system reported no CPUs".to_string(),
            ));
        }

        let per_core_usage: Vec<f32> =
            self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();

        Ok(UsageSnapshot {
            timestamp: Local::now(),
            total_usage: self.sys.global_cpu_usage(),
            per_core_usage,
            load_average: read_load_average(),
            times: crate::times::read(),
            temperatures: self.fetch_temperatures(),
        })
    }

    fn fetch_static_info(&mut self) -> Result<StaticInfo> {
        self.sys.refresh_cpu_all();

        let first = self
            .sys
            .cpus()
            .first()
            .ok_or_else(|| ScopeError::Provider("system reported no CPUs".to_string()))?;

        Ok(StaticInfo {
            processor: first.brand().to_string(),
            architecture: System::cpu_arch(),
            physical_cores: System::physical_core_count(),
            logical_cores: self.sys.cpus().len(),
            max_frequency_mhz: read_max_frequency_mhz(),
            current_frequency_mhz: first.frequency(),
        })
    }

    fn fetch_temperatures(&mut self) -> Option<Vec<TemperatureReading>> {
        let components = Components::new_with_refreshed_list();

        let readings: Vec<TemperatureReading> = components
            .iter()
            .filter(|c| {
                let label = c.label().to_lowercase();
                label.contains("cpu") || label.contains("core") || label.contains("package")
            })
            .filter_map(|c| {
                let current = c.temperature()?;
                Some(TemperatureReading {
                    label: c.label().to_string(),
                    current,
                    high: c.max(),
                    critical: c.critical(),
                })
            })
            .collect();

        if readings.is_empty() {
            tracing::debug!("no CPU temperature sensors exposed");
            None
        } else {
            Some(readings)
        }
    }
}

/// Read 1/5/15-minute load averages.
///
/// Windows has no load-average concept; sysinfo would report zeros there,
/// which must not be presented as a real reading.
#[cfg(not(target_os = "windows"))]
fn read_load_average() -> Option<LoadAverage> {
    let load = System::load_average();
    Some(LoadAverage {
        one: load.one,
        five: load.five,
        fifteen: load.fifteen,
    })
}

#[cfg(target_os = "windows")]
fn read_load_average() -> Option<LoadAverage> {
    None
}

/// Read the maximum rated CPU frequency from sysfs, in MHz.
///
/// `cpuinfo_max_freq` is reported in kHz for cpu0; absent on non-Linux
/// systems and on kernels without cpufreq.
#[cfg(target_os = "linux")]
fn read_max_frequency_mhz() -> Option<u64> {
    let raw = std::fs::read_to_string(
        "/sys/devices/system/cpu/cpu0/cpufreq/cpuinfo_max_freq",
    )
    .ok()?;
    let khz = raw.trim().parse::<u64>().ok()?;
    Some(khz / 1000)
}

#[cfg(not(target_os = "linux"))]
fn read_max_frequency_mhz() -> Option<u64> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_usage_populates_mandatory_fields() {
        let mut provider = SystemProvider::new();
        let snap = provider
            .fetch_usage(Duration::from_millis(100))
            .expect("usage read should succeed on a real system");

        assert!(!snap.per_core_usage.is_empty());
        assert!(snap.total_usage >= 0.0);
        for core in &snap.per_core_usage {
            assert!(*core >= 0.0);
        }
    }

    #[test]
    fn fetch_static_info_reports_cores() {
        let mut provider = SystemProvider::new();
        let info = provider.fetch_static_info().expect("static info");

        assert!(info.logical_cores >= 1);
        if let Some(physical) = info.physical_cores {
            assert!(physical >= 1);
            assert!(physical <= info.logical_cores);
        }
        assert!(!info.architecture.is_empty());
    }
}
