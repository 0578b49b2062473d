use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = match (verbose, level) {
            (true, _) => "pixles_media=debug,info".to_string(),
            (false, Some(level)) => format!("pixles_media={}", level),
            (false, None) => "pixles_media=info".to_string(),
        };
        EnvFilter::new(directive)
    })
}

/// Installs the global subscriber for the command-line tool.
///
/// `RUST_LOG` wins over both `verbose` and the configured `level`.
pub fn init_cli_logger(verbose: bool, json: bool, level: Option<&str>) {
    let filter = default_filter(verbose, level);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init();
    }
}
