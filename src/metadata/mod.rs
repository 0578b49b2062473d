//! Plain metadata value types shared by image and video files.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

pub mod geo;
pub mod orientation;

pub use geo::GpsLocation;
pub use orientation::Orientation;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub enum ColorSpace {
    #[default]
    Srgb,
    AdobeRgb,
    DisplayP3,
    ProPhoto,
    Linear,
    Other(String),
}

impl FromStr for ColorSpace {
    type Err = Infallible;

    /// Lenient match on ICC profile descriptions such as "sRGB IEC61966-2.1"
    /// or "Display P3". Unrecognised names are kept verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();

        let space = if normalized.starts_with("srgb") {
            ColorSpace::Srgb
        } else if normalized.starts_with("adobergb") {
            ColorSpace::AdobeRgb
        } else if normalized.contains("displayp3") {
            ColorSpace::DisplayP3
        } else if normalized.starts_with("prophoto") {
            ColorSpace::ProPhoto
        } else if normalized.starts_with("linear") {
            ColorSpace::Linear
        } else {
            ColorSpace::Other(s.trim().to_string())
        };
        Ok(space)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeviceMetadata {
    pub make: String,
    pub model: String,
    pub lens: Option<String>,
    pub serial_number: Option<String>,
    pub software_version: Option<String>,
}

impl DeviceMetadata {
    /// "Sony ILCE-7M4", or just the model when it already carries the make
    /// (Canon writes "Canon EOS R5" into both tags).
    pub fn display_name(&self) -> String {
        let make = self.make.trim();
        let model = self.model.trim();
        if make.is_empty() {
            return model.to_string();
        }
        if model.to_ascii_lowercase().starts_with(&make.to_ascii_lowercase()) {
            model.to_string()
        } else {
            format!("{} {}", make, model)
        }
    }
}
