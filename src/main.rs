use anyhow::Context;
use clap::Parser;
use pixles_media::config::cli::{resolve_scan, Command};
use pixles_media::utils::error::{ErrorSeverity, MediaError};
use pixles_media::utils::{logger, report, validation::Validate};
use pixles_media::{CliConfig, MediaScanner, TomlConfig};
use std::io::Write;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // Logging comes up before config errors are reported, so an unusable
    // file falls back to the default level and format
    let file_config = config.load_file_config();
    let defaults = TomlConfig::default();
    let logging_source = match &file_config {
        Ok(file_config) if file_config.validate().is_ok() => file_config,
        _ => &defaults,
    };
    logger::init_cli_logger(
        config.verbose,
        config.json_logs || logging_source.json_logs(),
        Some(logging_source.logging.level.as_str()),
    );

    tracing::debug!("CLI config: {:?}", config);

    let file_config = match file_config {
        Ok(file_config) => file_config,
        Err(e) => exit_with(&e),
    };
    if let Err(e) = config.validate().and_then(|_| file_config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        exit_with(&e);
    }

    match config.command {
        Command::Init => {
            pixles_media::init();
            println!("pixles_media {} ready", env!("CARGO_PKG_VERSION"));
        }
        Command::Print { values } => pixles_media::print_vector(&values),
        Command::Detect { paths } => {
            let mut unrecognised = 0;
            let mut exit_code = 0;
            for path in &paths {
                match pixles_media::fs::probe(path).await {
                    Ok(probe) => println!(
                        "{}\t{}\t{}",
                        probe.media_type,
                        probe.media_type.mime_type(),
                        path.display()
                    ),
                    Err(e) => {
                        tracing::warn!("{}: {}", path.display(), e);
                        eprintln!("❌ {}", e.user_friendly_message());
                        let code = match e {
                            MediaError::UnknownFormat { .. } | MediaError::NotAFile { .. } => {
                                unrecognised += 1;
                                2
                            }
                            other => severity_exit_code(other.severity()),
                        };
                        exit_code = exit_code.max(code);
                    }
                }
            }
            if unrecognised > 0 {
                tracing::info!("{} of {} paths were not recognised", unrecognised, paths.len());
            }
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        Command::Scan {
            dir,
            format,
            no_recursive,
            include_hidden,
            follow_links,
            max_depth,
        } => {
            let (options, report_format) = resolve_scan(
                &file_config,
                format,
                no_recursive,
                include_hidden,
                follow_links,
                max_depth,
            );

            let scanner = MediaScanner::new(options);
            let scan_report = match scanner.scan(&dir).await {
                Ok(scan_report) => scan_report,
                Err(e) => exit_with(&e),
            };

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            report::write_report(&mut out, &scan_report, report_format)
                .context("failed to write scan report")?;
            out.flush().context("failed to flush stdout")?;
        }
    }

    Ok(())
}

fn exit_with(e: &MediaError) -> ! {
    tracing::error!(
        "{} (severity: {:?}); {}",
        e,
        e.severity(),
        e.recovery_suggestion()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(severity_exit_code(e.severity()))
}

fn severity_exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
