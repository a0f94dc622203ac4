//! Numeric input parsing for the custom-monitor prompts.

use std::time::Duration;

use scope_core::{Result, ScopeError};

/// Longest accepted display interval, in seconds.
const MAX_INTERVAL_SECS: f64 = 3600.0;

/// Parse the requested number of samples. Must be a positive integer.
pub fn parse_sample_count(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let count: u64 = trimmed.parse().map_err(|_| {
        ScopeError::InvalidInput(format!("'{trimmed}' is not a whole number"))
    })?;
    if count == 0 {
        return Err(ScopeError::InvalidInput(
            "duration must be at least 1 sample".to_string(),
        ));
    }
    Ok(count)
}

/// Parse the display interval in seconds. Empty input means the 1 s default;
/// anything non-positive, non-finite, or absurdly long is rejected.
pub fn parse_interval(input: &str) -> Result<Duration> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Duration::from_secs(1));
    }

    let secs: f64 = trimmed.parse().map_err(|_| {
        ScopeError::InvalidInput(format!("'{trimmed}' is not a number"))
    })?;
    if !secs.is_finite() || secs <= 0.0 || secs > MAX_INTERVAL_SECS {
        return Err(ScopeError::InvalidInput(format!(
            "interval must be between 0 and {MAX_INTERVAL_SECS} seconds"
        )));
    }
    Ok(Duration::from_secs_f64(secs))
}
