//! Text views over the data model. Pure functions: data in, `String` out.

use std::fmt::Write as _;

use scope_core::{HistoryEntry, StaticInfo, Statistics, UsageSnapshot};

use crate::bar::{usage_bar, UsageLevel, BAR_WIDTH, MINI_BAR_WIDTH};

/// How many history entries the history view shows.
pub const HISTORY_DISPLAY_LIMIT: usize = 20;

/// Mini-bar width used in the history view.
pub const HISTORY_BAR_WIDTH: usize = 20;

/// Total-usage bar width in the real-time frame.
pub const FRAME_BAR_WIDTH: usize = 30;

const RULE: &str =
    "======================================================================";
const THIN_RULE: &str = "----------------------------------------";

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{title:^70}");
    let _ = writeln!(out, "{RULE}");
}

/// Bordered table of the immutable CPU description.
#[must_use]
pub fn render_static_info(info: &StaticInfo) -> String {
    let mut out = String::new();
    heading(&mut out, "PROCESSOR INFORMATION");

    let physical = info
        .physical_cores
        .map_or_else(|| "N/A".to_string(), |n| n.to_string());
    let max_freq = info
        .max_frequency_mhz
        .map_or_else(|| "N/A".to_string(), |f| format!("{f} MHz"));

    let _ = writeln!(out, "Processor         : {}", info.processor);
    let _ = writeln!(out, "Architecture      : {}", info.architecture);
    let _ = writeln!(out, "Physical cores    : {physical}");
    let _ = writeln!(out, "Logical cores     : {}", info.logical_cores);
    let _ = writeln!(out, "Max frequency     : {max_freq}");
    let _ = writeln!(out, "Current frequency : {} MHz", info.current_frequency_mhz);
    let _ = writeln!(out, "{RULE}");
    out
}

/// Full single-snapshot view: total bar, per-core mini bars, and whatever
/// optional signals the platform provided. Absent signals are omitted, not
/// zeroed.
#[must_use]
pub fn render_usage(snapshot: &UsageSnapshot) -> String {
    let mut out = String::new();
    heading(&mut out, "CPU USAGE");

    let level = UsageLevel::from_percentage(snapshot.total_usage);
    let _ = writeln!(
        out,
        "Time        : {}",
        snapshot.timestamp.format("%d-%m-%Y %H:%M:%S")
    );
    let _ = writeln!(
        out,
        "Total usage : {:5.1}%  ({level})",
        snapshot.total_usage
    );
    let _ = writeln!(
        out,
        "Total CPU   : [{}] {:5.1}%",
        usage_bar(snapshot.total_usage, BAR_WIDTH),
        snapshot.total_usage
    );

    let _ = writeln!(out, "\nPer-core usage:");
    let _ = writeln!(out, "{THIN_RULE}");
    for (i, core) in snapshot.per_core_usage.iter().enumerate() {
        let _ = writeln!(
            out,
            "Core {:2}       : {:5.1}%  [{}]",
            i + 1,
            core,
            usage_bar(*core, MINI_BAR_WIDTH)
        );
    }

    if let Some(load) = &snapshot.load_average {
        let _ = writeln!(
            out,
            "\nLoad average  : {:.2}, {:.2}, {:.2}",
            load.one, load.five, load.fifteen
        );
    }

    if let Some(times) = &snapshot.times {
        let _ = writeln!(out, "\nCPU times (seconds):");
        let _ = writeln!(out, "  User      : {:.2}", times.user);
        let _ = writeln!(out, "  System    : {:.2}", times.system);
        let _ = writeln!(out, "  Idle      : {:.2}", times.idle);
        if times.iowait > 0.0 {
            let _ = writeln!(out, "  IO wait   : {:.2}", times.iowait);
        }
        if times.interrupt > 0.0 {
            let _ = writeln!(out, "  Interrupt : {:.2}", times.interrupt);
        }
    }

    if let Some(temps) = &snapshot.temperatures {
        let _ = writeln!(out, "\nCPU temperatures:");
        for temp in temps {
            let _ = write!(out, "  {:<12}: {:.1}°C", temp.label, temp.current);
            if let Some(high) = temp.high {
                let _ = write!(out, " (max {high:.1}°C)");
            }
            let _ = writeln!(out);
        }
    }

    let _ = writeln!(out, "{RULE}");
    out
}

/// One compact real-time frame: step counter, clock, total bar, and a
/// per-core grid four cores per row.
#[must_use]
pub fn render_frame(step: u64, total_steps: u64, snapshot: &UsageSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Real-time CPU monitor - sample {}/{total_steps}",
        step + 1
    );
    let _ = writeln!(out, "Time: {}", snapshot.timestamp.format("%H:%M:%S"));
    let _ = writeln!(out, "{THIN_RULE}");
    let _ = writeln!(
        out,
        "Total: {:5.1}%  [{}]",
        snapshot.total_usage,
        usage_bar(snapshot.total_usage, FRAME_BAR_WIDTH)
    );

    let _ = writeln!(out, "\nPer core:");
    for (i, core) in snapshot.per_core_usage.iter().enumerate() {
        if i > 0 && i % 4 == 0 {
            let _ = writeln!(out);
        }
        let _ = write!(out, "C{}:{:5.1}%  ", i + 1, core);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{THIN_RULE}");
    out
}

/// History view: the most recent entries with mini bars, then the
/// mean/min/max block.
#[must_use]
pub fn render_history<'a, I>(entries: I, stats: &Statistics) -> String
where
    I: IntoIterator<Item = &'a HistoryEntry>,
{
    let mut out = String::new();
    heading(&mut out, "USAGE HISTORY");

    for entry in entries {
        let _ = writeln!(
            out,
            "{} | {:5.1}%  [{}]",
            entry.time.format("%H:%M:%S"),
            entry.usage,
            usage_bar(entry.usage, HISTORY_BAR_WIDTH)
        );
    }

    let _ = writeln!(out, "\nStatistics:");
    let _ = writeln!(out, "  Mean : {:5.1}%", stats.mean);
    let _ = writeln!(out, "  Min  : {:5.1}%", stats.min);
    let _ = writeln!(out, "  Max  : {:5.1}%", stats.max);
    let _ = writeln!(out, "{RULE}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use scope_core::{CpuTimes, LoadAverage, TemperatureReading};

    fn snapshot(total: f32) -> UsageSnapshot {
        UsageSnapshot {
            timestamp: Local::now(),
            total_usage: total,
            per_core_usage: vec![total; 6],
            load_average: None,
            times: None,
            temperatures: None,
        }
    }

    #[test]
    fn static_info_prints_absent_fields_as_na() {
        let info = StaticInfo {
            processor: "Fake CPU".to_string(),
            architecture: "riscv64".to_string(),
            physical_cores: None,
            logical_cores: 4,
            max_frequency_mhz: None,
            current_frequency_mhz: 2400,
        };
        let text = render_static_info(&info);
        assert!(text.contains("Fake CPU"));
        assert!(text.contains("Physical cores    : N/A"));
        assert!(text.contains("Max frequency     : N/A"));
        assert!(text.contains("2400 MHz"));
    }

    #[test]
    fn usage_view_omits_absent_signals() {
        let text = render_usage(&snapshot(42.0));
        assert!(!text.contains("Load average"));
        assert!(!text.contains("CPU times"));
        assert!(!text.contains("temperatures"));
        assert!(text.contains("Total usage"));
        assert!(text.contains("(moderate)"));
        assert!(text.contains("Core  1"));
    }

    #[test]
    fn usage_view_shows_present_signals() {
        let mut snap = snapshot(80.0);
        snap.load_average = Some(LoadAverage {
            one: 1.25,
            five: 0.75,
            fifteen: 0.5,
        });
        snap.times = Some(CpuTimes {
            user: 10.0,
            system: 5.0,
            idle: 100.0,
            iowait: 0.0,
            interrupt: 0.0,
        });
        snap.temperatures = Some(vec![TemperatureReading {
            label: "Core 0".to_string(),
            current: 61.5,
            high: Some(95.0),
            critical: None,
        }]);

        let text = render_usage(&snap);
        assert!(text.contains("Load average  : 1.25, 0.75, 0.50"));
        assert!(text.contains("User      : 10.00"));
        // A zero iowait line is suppressed rather than printed as 0.
        assert!(!text.contains("IO wait"));
        assert!(text.contains("61.5°C"));
        assert!(text.contains("(max 95.0°C)"));
        assert!(text.contains("(high)"));
    }

    #[test]
    fn frame_groups_cores_four_per_row() {
        let text = render_frame(2, 60, &snapshot(10.0));
        assert!(text.contains("sample 3/60"));
        let core_rows = text
            .lines()
            .filter(|l| l.starts_with("C1:") || l.starts_with("C5:"))
            .count();
        assert_eq!(core_rows, 2);
    }

    #[test]
    fn history_view_lists_entries_and_statistics() {
        let entries: Vec<HistoryEntry> = [10.0, 20.0, 30.0]
            .iter()
            .map(|u| HistoryEntry {
                time: Local::now(),
                usage: *u,
            })
            .collect();
        let stats = Statistics {
            mean: 20.0,
            min: 10.0,
            max: 30.0,
        };
        let text = render_history(entries.iter(), &stats);
        assert_eq!(text.matches('|').count(), 3);
        assert!(text.contains("Mean :  20.0%"));
        assert!(text.contains("Min  :  10.0%"));
        assert!(text.contains("Max  :  30.0%"));
    }
}
