use tracing_subscriber::EnvFilter;

use crate::stderr_buffer::BufferedStderr;

/// Environment variable holding an EnvFilter directive, e.g. "resume_ats=trace"
pub const LOG_ENV: &str = "RESUME_ATS_LOG";

/// Filter used when `LOG_ENV` is unset
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global tracing subscriber.
///
/// Output goes through `stderr_buffer`, so log lines emitted while the TUI is
/// active are held until the terminal is restored. Calling this twice is a
/// no-op.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_ansi(false)
        .with_writer(|| BufferedStderr)
        .try_init();
}
