//! Interactive terminal surface: a numbered menu dispatching to one
//! explicitly owned [`SamplingMonitor`] instance.

pub mod input;
pub mod menu;

pub use menu::Command;

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use scope_core::{Result, ScopeError};
use scope_system::{LoopOutcome, SamplingMonitor, SNAPSHOT_WINDOW};

const DEFAULT_EXPORT_FILENAME: &str = "cpu_data.json";
const DEFAULT_LOOP_SAMPLES: u64 = 60;
const DEFAULT_LOOP_INTERVAL: Duration = Duration::from_secs(1);

/// ANSI: clear screen and move the cursor home, printed before each
/// real-time frame.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Run the interactive menu until the user quits or stdin closes.
///
/// Errors from individual actions are reported and the menu continues; only
/// terminal-level I/O failure ends the session early.
pub fn run() -> Result<()> {
    let stop = Arc::new(AtomicBool::new(false));
    install_interrupt_handler(&stop);

    let mut monitor = SamplingMonitor::new();

    loop {
        // Re-arm the flag so a Ctrl-C from a previous loop run is forgotten.
        stop.store(false, Ordering::Relaxed);

        print!("{}", menu::menu_text());
        let Some(line) = prompt("Select an option (1-7): ")? else {
            break; // stdin closed
        };
        if stop.load(Ordering::Relaxed) {
            println!("\nInterrupted.");
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };

        if command == Command::Quit {
            println!("Goodbye!");
            break;
        }

        if let Err(e) = dispatch(command, &mut monitor, &stop) {
            println!("Error: {e}");
        }
    }

    Ok(())
}

fn dispatch(
    command: Command,
    monitor: &mut SamplingMonitor,
    stop: &Arc<AtomicBool>,
) -> Result<()> {
    match command {
        Command::ShowInfo => {
            let info = monitor.static_info()?;
            print!("{}", scope_render::render_static_info(&info));
        }
        Command::ShowUsage => {
            println!("\nMeasuring CPU usage...");
            let snapshot = monitor.snapshot(SNAPSHOT_WINDOW)?;
            print!("{}", scope_render::render_usage(&snapshot));
        }
        Command::MonitorDefault => {
            run_monitor(monitor, DEFAULT_LOOP_SAMPLES, DEFAULT_LOOP_INTERVAL, stop);
        }
        Command::MonitorCustom => {
            let Some(samples) = prompt_sample_count()? else {
                return Ok(());
            };
            let Some(interval) = prompt_interval()? else {
                return Ok(());
            };
            run_monitor(monitor, samples, interval, stop);
        }
        Command::ShowHistory => show_history(monitor),
        Command::Export => {
            let Some(raw) = prompt("File name (default: cpu_data.json): ")? else {
                return Ok(());
            };
            let name = raw.trim();
            let path = if name.is_empty() {
                DEFAULT_EXPORT_FILENAME
            } else {
                name
            };
            monitor.export_snapshot(path)?;
            println!("CPU data saved to '{path}'.");
        }
        Command::Quit => {}
    }
    Ok(())
}

fn run_monitor(
    monitor: &mut SamplingMonitor,
    samples: u64,
    interval: Duration,
    stop: &Arc<AtomicBool>,
) {
    println!(
        "\nReal-time monitor: {samples} samples @ {:.1}s. Press Ctrl-C to stop.",
        interval.as_secs_f64()
    );

    let outcome = monitor.run_loop(samples, interval, stop, |step, snapshot| {
        print!("{CLEAR_SCREEN}");
        print!("{}", scope_render::render_frame(step, samples, snapshot));
        let _ = io::stdout().flush();
    });

    match outcome {
        LoopOutcome::Interrupted => println!("\nMonitoring interrupted."),
        LoopOutcome::Completed => println!("\nMonitoring finished."),
    }
}

fn show_history(monitor: &SamplingMonitor) {
    match monitor.statistics() {
        Ok(stats) => {
            let recent = monitor
                .history()
                .recent(scope_render::HISTORY_DISPLAY_LIMIT);
            print!("{}", scope_render::render_history(recent, &stats));
        }
        Err(ScopeError::EmptyHistory) => {
            println!("No history yet - run the real-time monitor first.");
        }
        Err(e) => println!("Error: {e}"),
    }
}

/// Print `text`, flush, and read one line. `None` means stdin closed.
fn prompt(text: &str) -> Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt_sample_count() -> Result<Option<u64>> {
    loop {
        let Some(line) = prompt("Duration (samples): ")? else {
            return Ok(None);
        };
        match input::parse_sample_count(&line) {
            Ok(count) => return Ok(Some(count)),
            Err(e) => println!("{e}"),
        }
    }
}

fn prompt_interval() -> Result<Option<Duration>> {
    loop {
        let Some(line) = prompt("Interval in seconds (default 1): ")? else {
            return Ok(None);
        };
        match input::parse_interval(&line) {
            Ok(interval) => return Ok(Some(interval)),
            Err(e) => println!("{e}"),
        }
    }
}

fn install_interrupt_handler(stop: &Arc<AtomicBool>) {
    let flag = Arc::clone(stop);
    if let Err(e) = ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed)) {
        tracing::warn!("could not install Ctrl-C handler: {e}; interrupt support disabled");
    }
}
