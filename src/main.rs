//! cpuscope — interactive CPU monitor for the terminal.
//!
//! Run with:  `RUST_LOG=info cpuscope`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: warn).
    // Logs go to stderr so the rendered tables on stdout stay clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("cpuscope v{} starting", env!("CARGO_PKG_VERSION"));

    scope_cli::run().map_err(Into::into)
}
