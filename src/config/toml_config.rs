use crate::core::scan::ScanOptions;
use crate::utils::error::{MediaError, Result};
use crate::utils::report::ReportFormat;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub logging: LoggingConfig,
    pub scan: ScanConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub recursive: bool,
    pub follow_links: bool,
    pub include_hidden: bool,
    pub max_depth: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let options = ScanOptions::default();
        Self {
            recursive: options.recursive,
            follow_links: options.follow_links,
            include_hidden: options.include_hidden,
            max_depth: options.max_depth,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: ReportFormat,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| MediaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left
    /// as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            recursive: self.scan.recursive,
            follow_links: self.scan.follow_links,
            include_hidden: self.scan.include_hidden,
            max_depth: self.scan.max_depth,
        }
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format.eq_ignore_ascii_case("json")
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("logging.level", &self.logging.level)?;
        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validation::validate_one_of("logging.format", &self.logging.format, &LOG_FORMATS)?;

        if let Some(depth) = self.scan.max_depth {
            validation::validate_positive_number("scan.max_depth", depth, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[logging]
level = "debug"
format = "json"

[scan]
recursive = false
include_hidden = true
max_depth = 4

[output]
format = "csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.logging.level, "debug");
        assert!(config.json_logs());
        assert_eq!(config.output.format, ReportFormat::Csv);

        let options = config.scan_options();
        assert!(!options.recursive);
        assert!(!options.follow_links);
        assert!(options.include_hidden);
        assert_eq!(options.max_depth, Some(4));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.logging.level, "info");
        assert!(!config.json_logs());
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(config.scan_options(), ScanOptions::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PIXLES_MEDIA_TEST_LEVEL", "warn");

        let toml_content = r#"
[logging]
level = "${PIXLES_MEDIA_TEST_LEVEL}"
format = "${PIXLES_MEDIA_TEST_UNSET_FORMAT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "${PIXLES_MEDIA_TEST_UNSET_FORMAT}");
        assert!(config.validate().is_err());

        std::env::remove_var("PIXLES_MEDIA_TEST_LEVEL");
    }

    #[test]
    fn test_config_validation() {
        let bad_level = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(bad_level.validate().is_err());

        let zero_depth = TomlConfig::from_toml_str("[scan]\nmax_depth = 0\n").unwrap();
        assert!(zero_depth.validate().is_err());

        assert!(TomlConfig::from_toml_str("[output]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output.format, ReportFormat::Json);
    }
}
