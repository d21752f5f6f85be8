use clap::ValueEnum;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Filter directive for a `-v` count, used when `RUST_LOG` is unset.
///
/// The CLI already prints created files itself, so the default only lets
/// warnings through (e.g. an unrecognised HTTP annotation).
pub fn filter_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,svckit_protogen=info,svckit_cli=info",
        2 => "info,svckit_protogen=debug,svckit_cli=debug",
        _ => "debug,svckit_protogen=trace,svckit_cli=trace",
    }
}

/// Install the global `tracing` subscriber. Logs go to stderr so that
/// command output on stdout stays clean.
pub fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose)));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(false)
                        .with_file(verbose >= 3)
                        .with_line_number(verbose >= 3)
                        .with_writer(std::io::stderr)
                        .compact(),
                )
                .init();
        }
    }
}
