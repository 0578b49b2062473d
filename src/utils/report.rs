use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::scan::ScanReport;
use crate::utils::error::{MediaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "csv"];
}

impl FromStr for ReportFormat {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "csv" => Ok(ReportFormat::Csv),
            _ => Err(MediaError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    path: String,
    media_type: String,
    mime_type: &'a str,
    size_bytes: u64,
    modified: String,
}

pub fn write_report<W: Write>(out: &mut W, report: &ScanReport, format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Text => write_text(out, report)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        ReportFormat::Csv => write_csv(out, report)?,
    }
    out.flush()?;
    Ok(())
}

fn write_text<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    for probe in &report.media {
        writeln!(
            out,
            "{}\t{}\t{}",
            probe.media_type,
            probe.size_bytes,
            probe.path.display()
        )?;
    }
    writeln!(
        out,
        "{} images, {} videos ({} bytes), {} skipped, {} errors",
        report.image_count(),
        report.video_count(),
        report.total_bytes(),
        report.skipped,
        report.errors
    )?;
    Ok(())
}

fn write_csv<W: Write>(out: &mut W, report: &ScanReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    if report.media.is_empty() {
        writer.write_record(["path", "media_type", "mime_type", "size_bytes", "modified"])?;
    }
    for probe in &report.media {
        writer.serialize(CsvRow {
            path: probe.path.display().to_string(),
            media_type: probe.media_type.to_string(),
            mime_type: probe.media_type.mime_type(),
            size_bytes: probe.size_bytes,
            modified: probe
                .modified
                .map(|m| m.to_rfc3339())
                .unwrap_or_default(),
        })?;
    }
    writer.flush()?;
    Ok(())
}
