pub mod config;
pub mod core;
pub mod domain;
pub mod ffi;
pub mod fs;
pub mod metadata;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::TomlConfig;
pub use crate::core::{entry::init, entry::print_vector, MediaScanner, ScanOptions, ScanReport};
pub use domain::model::{ImageMediaType, MediaProbe, MediaType, RawImageFormat, VideoMediaType};
pub use utils::error::{MediaError, Result};
