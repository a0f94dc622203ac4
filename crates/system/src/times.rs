//! Cumulative CPU time breakdown from `/proc/stat`.
//!
//! The kernel reports jiffies since boot; values are converted to seconds
//! using the clock tick rate. Platforms without `/proc/stat` report `None`.

use scope_core::CpuTimes;

/// Read the aggregate CPU time breakdown, in seconds.
#[cfg(target_os = "linux")]
pub fn read() -> Option<CpuTimes> {
    let content = match std::fs::read_to_string("/proc/stat") {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("cannot read /proc/stat: {e}");
            return None;
        }
    };
    parse(&content, clock_ticks_per_second())
}

#[cfg(not(target_os = "linux"))]
pub fn read() -> Option<CpuTimes> {
    None
}

/// Kernel clock ticks per second (`USER_HZ`), normally 100.
#[cfg(target_os = "linux")]
fn clock_ticks_per_second() -> f64 {
    // SAFETY: sysconf with a valid name has no memory-safety concerns.
    let ticks = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
    if ticks > 0 {
        ticks as f64
    } else {
        100.0
    }
}

/// Parse the aggregate `cpu ` line of `/proc/stat` content.
///
/// Format: `cpu user nice system idle iowait irq softirq ...` in jiffies.
/// The first five fields are required; interrupt time is `irq + softirq`.
fn parse(content: &str, ticks_per_second: f64) -> Option<CpuTimes> {
    let line = content.lines().find(|l| l.starts_with("cpu "))?;
    let fields: Vec<u64> = line
        .split_whitespace()
        .skip(1)
        .map(|f| f.parse().unwrap_or(0))
        .collect();

    if fields.len() < 5 {
        return None;
    }

    let seconds = |jiffies: u64| jiffies as f64 / ticks_per_second;
    let irq = fields.get(5).copied().unwrap_or(0);
    let softirq = fields.get(6).copied().unwrap_or(0);

    Some(CpuTimes {
        user: seconds(fields[0]),
        system: seconds(fields[2]),
        idle: seconds(fields[3]),
        iowait: seconds(fields[4]),
        interrupt: seconds(irq + softirq),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "cpu  10000 500 3000 80000 1200 40 60 0 0 0\n\
                          cpu0 5000 250 1500 40000 600 20 30 0 0 0\n\
                          intr 4287231 0 0 0\n\
                          ctxt 1234567\n";

    #[test]
    fn parses_aggregate_line_into_seconds() {
        let times = parse(SAMPLE, 100.0).expect("sample should parse");

        assert_eq!(times.user, 100.0);
        assert_eq!(times.system, 30.0);
        assert_eq!(times.idle, 800.0);
        assert_eq!(times.iowait, 12.0);
        // irq 40 + softirq 60 = 100 jiffies = 1 second
        assert_eq!(times.interrupt, 1.0);
    }

    #[test]
    fn respects_clock_tick_rate() {
        let times = parse(SAMPLE, 250.0).expect("sample should parse");
        assert_eq!(times.user, 40.0);
    }

    #[test]
    fn minimal_five_field_line_parses() {
        let times = parse("cpu  100 0 50 800 20", 100.0).expect("minimal line");
        assert_eq!(times.iowait, 0.2);
        assert_eq!(times.interrupt, 0.0);
    }

    #[test]
    fn missing_cpu_line_is_none() {
        assert!(parse("intr 1 2 3\nctxt 42\n", 100.0).is_none());
    }

    #[test]
    fn per_core_lines_are_not_mistaken_for_aggregate() {
        // "cpu0" must not match the aggregate "cpu " prefix.
        assert!(parse("cpu0 5000 250 1500 40000 600 20 30 0 0 0\n", 100.0).is_none());
    }

    #[test]
    fn truncated_line_is_none() {
        assert!(parse("cpu  100 200 300", 100.0).is_none());
    }
}
