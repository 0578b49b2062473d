use crate::domain::model::MediaType;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Path is not a file: {path}")]
    NotAFile { path: String },

    #[error("Unknown media format: {path}")]
    UnknownFormat { path: String },

    #[error("Not an image: {0}")]
    NotAnImage(MediaType),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),

    #[error("Directory walk failed: {0}")]
    WalkError(#[from] walkdir::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl MediaError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            MediaError::UnknownFormat { .. } | MediaError::NotAnImage(_) => ErrorSeverity::Medium,
            MediaError::NotAFile { .. }
            | MediaError::ConfigError { .. }
            | MediaError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            MediaError::IoError(_)
            | MediaError::JoinError(_)
            | MediaError::WalkError(_)
            | MediaError::SerializationError(_)
            | MediaError::CsvError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            MediaError::NotAFile { path } => format!("'{}' is not a regular file", path),
            MediaError::UnknownFormat { path } => {
                format!("'{}' is not a recognised image or video", path)
            }
            MediaError::NotAnImage(media_type) => {
                format!("Expected an image but found {}", media_type)
            }
            MediaError::IoError(e) => format!("Could not access the file system: {}", e),
            MediaError::ConfigError { message } => format!("Invalid configuration: {}", message),
            MediaError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid setting '{}': {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            MediaError::NotAFile { .. } => "Pass a path to a file, or use `scan` for directories",
            MediaError::UnknownFormat { .. } | MediaError::NotAnImage(_) => {
                "Check that the file is a supported image or video"
            }
            MediaError::IoError(_) | MediaError::WalkError(_) => {
                "Check that the path exists and is readable"
            }
            MediaError::ConfigError { .. } | MediaError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and try again"
            }
            MediaError::JoinError(_) => "Retry the operation",
            MediaError::SerializationError(_) | MediaError::CsvError(_) => {
                "Try a different output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, MediaError>;
