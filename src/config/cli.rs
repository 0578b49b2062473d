use crate::config::toml_config::TomlConfig;
use crate::core::scan::ScanOptions;
use crate::utils::error::{MediaError, Result};
use crate::utils::report::ReportFormat;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pixles-media")]
#[command(about = "Inspect and classify Pixles media files", version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Call the library entry point
    Init,

    /// Print each value on its own line
    Print {
        values: Vec<String>,
    },

    /// Detect the media type of files
    Detect {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Probe every media file under a directory
    Scan {
        dir: PathBuf,

        #[arg(long, value_enum)]
        format: Option<ReportFormat>,

        /// Only look at the top level of DIR
        #[arg(long)]
        no_recursive: bool,

        #[arg(long)]
        include_hidden: bool,

        #[arg(long)]
        follow_links: bool,

        #[arg(long)]
        max_depth: Option<usize>,
    },
}

impl CliConfig {
    /// An unreadable file is reported as a configuration problem, not an
    /// I/O failure.
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        let Some(path) = &self.config else {
            return Ok(TomlConfig::default());
        };

        TomlConfig::from_file(path).map_err(|e| match e {
            MediaError::IoError(io) => MediaError::ConfigError {
                message: format!("cannot read {}: {}", path.display(), io),
            },
            other => other,
        })
    }
}

/// Flags given on the command line win over the file.
pub fn resolve_scan(
    file: &TomlConfig,
    format: Option<ReportFormat>,
    no_recursive: bool,
    include_hidden: bool,
    follow_links: bool,
    max_depth: Option<usize>,
) -> (ScanOptions, ReportFormat) {
    let mut options = file.scan_options();
    if no_recursive {
        options.recursive = false;
    }
    options.include_hidden |= include_hidden;
    options.follow_links |= follow_links;
    if max_depth.is_some() {
        options.max_depth = max_depth;
    }

    let report_format = format.unwrap_or(file.output.format);
    (options, report_format)
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("--config", &path.to_string_lossy())?;
        }
        if let Command::Scan { dir, max_depth, .. } = &self.command {
            validation::validate_path("scan <DIR>", &dir.to_string_lossy())?;
            if let Some(depth) = max_depth {
                validation::validate_positive_number("--max-depth", *depth, 1)?;
            }
        }
        Ok(())
    }
}
