use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging system.
///
/// Reports go to stdout, so logs are written to stderr. The filter comes from
/// `RUST_LOG` and defaults to `warn`. When stderr is not a terminal the events
/// are emitted as flattened JSON lines.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if io::stderr().is_terminal() {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init();
    }
}

pub fn default_output_format() -> OutputFormat {
    if io::stdout().is_terminal() {
        OutputFormat::Pretty
    } else {
        OutputFormat::Plain
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Pretty,
    Json,
}
