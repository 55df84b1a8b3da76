use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `RUST_LOG` wins; otherwise registry mutations and rejections log at info,
/// and `--verbose` opens up the per-operation debug lines.
fn registry_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose {
        "vaccine_registry=debug,info"
    } else {
        "vaccine_registry=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Human-readable logs for interactive `show` / `search` / `book` runs.
///
/// Logs go to stderr: stdout carries only the JSON or CSV report, so
/// `vaccine-registry search ... > out.csv` stays clean.
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(registry_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Selected by `--json-logs`. One JSON object per booking or rejection,
/// for collectors that parse stderr line by line.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(registry_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(false),
        )
        .init();
}
