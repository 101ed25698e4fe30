//! Log subscriber setup
//!
//! Events go to stderr so JSON written to stdout stays machine-readable.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "warn";

/// First non-blank directive of: command-line flag, `CHESS_INSIGHT_LOG`,
/// `RUST_LOG`, then [`DEFAULT_FILTER`]
pub fn filter_directive<'a>(
    flag: Option<&'a str>,
    configured: Option<&'a str>,
    rust_log: Option<&'a str>,
) -> &'a str {
    [flag, configured, rust_log]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|directive| !directive.is_empty())
        .unwrap_or(DEFAULT_FILTER)
}

pub fn init(flag: Option<&str>, configured: Option<&str>) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = filter_directive(flag, configured, rust_log.as_deref());
    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid log filter {directive:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
