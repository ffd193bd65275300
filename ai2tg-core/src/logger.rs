//! Logging initialization: human-readable format (timestamp, level, target, message, fields) to stderr.

use std::io;

use tracing_subscriber::{
    fmt::format::{FmtSpan, Writer},
    fmt::time::FormatTime,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Directives for `-d`: everything at debug except the HTTP stack, which stays at info.
const VERBOSE_DIRECTIVES: &str = "debug,hyper=info,hyper_util=info,h2=info,rustls=info,reqwest=info";

const NORMAL_DIRECTIVES: &str = "info";

/// Local time in `YYYY-MM-DD HH:MM:SS` for human-readable log lines.
struct ChronoLocal;

impl FormatTime for ChronoLocal {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let t = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        write!(w, "{} ", t)
    }
}

/// Level filter for the two verbosity modes: `info` normally, `debug` when `verbose`.
pub fn log_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose {
        VERBOSE_DIRECTIVES
    } else {
        NORMAL_DIRECTIVES
    })
}

/// Initializes the global tracing subscriber. Call once, before anything logs.
///
/// Output: `YYYY-MM-DD HH:MM:SS LEVEL target: message key=value ...` on stderr, no ANSI codes.
/// Stdout is left to the confirmation prompt.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let event_format = tracing_subscriber::fmt::format()
        .with_timer(ChronoLocal)
        .with_level(true)
        .with_target(true)
        .with_thread_ids(false);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .event_format(event_format)
        .with_span_events(FmtSpan::NONE)
        .with_ansi(false);

    Registry::default()
        .with(log_filter(verbose))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
