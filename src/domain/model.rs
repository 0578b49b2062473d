use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Image(ImageMediaType),
    Video(VideoMediaType),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageMediaType {
    Jpeg,
    Jxl,
    Heic,
    Png,
    Tiff,
    Avif,
    WebP,
    Gif,
    Bmp,
    Raw(RawImageFormat),
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawImageFormat {
    /// Adobe Digital Negative
    Dng,
    /// Sony ARW
    Arw,
    /// Canon CR2
    Cr2,
    /// Canon CR3
    Cr3,
    /// Nikon NEF
    Nef,
    /// Fujifilm RAF
    Raf,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoMediaType {
    Mp4,
    Webm,
    Mov,
    Avi,
    Mkv,
}

impl MediaType {
    pub fn is_image(&self) -> bool {
        matches!(self, MediaType::Image(_))
    }

    pub fn is_video(&self) -> bool {
        matches!(self, MediaType::Video(_))
    }

    /// Canonical lowercase extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            MediaType::Image(t) => t.extension(),
            MediaType::Video(t) => t.extension(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            MediaType::Image(t) => t.mime_type(),
            MediaType::Video(t) => t.mime_type(),
        }
    }
}

impl ImageMediaType {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageMediaType::Jpeg => "jpg",
            ImageMediaType::Jxl => "jxl",
            ImageMediaType::Heic => "heic",
            ImageMediaType::Png => "png",
            ImageMediaType::Tiff => "tiff",
            ImageMediaType::Avif => "avif",
            ImageMediaType::WebP => "webp",
            ImageMediaType::Gif => "gif",
            ImageMediaType::Bmp => "bmp",
            ImageMediaType::Raw(raw) => raw.extension(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageMediaType::Jpeg => "image/jpeg",
            ImageMediaType::Jxl => "image/jxl",
            ImageMediaType::Heic => "image/heic",
            ImageMediaType::Png => "image/png",
            ImageMediaType::Tiff => "image/tiff",
            ImageMediaType::Avif => "image/avif",
            ImageMediaType::WebP => "image/webp",
            ImageMediaType::Gif => "image/gif",
            ImageMediaType::Bmp => "image/bmp",
            ImageMediaType::Raw(raw) => raw.mime_type(),
        }
    }
}

impl RawImageFormat {
    pub const ALL: [RawImageFormat; 6] = [
        RawImageFormat::Dng,
        RawImageFormat::Arw,
        RawImageFormat::Cr2,
        RawImageFormat::Cr3,
        RawImageFormat::Nef,
        RawImageFormat::Raf,
    ];

    pub fn extension(&self) -> &'static str {
        match self {
            RawImageFormat::Dng => "dng",
            RawImageFormat::Arw => "arw",
            RawImageFormat::Cr2 => "cr2",
            RawImageFormat::Cr3 => "cr3",
            RawImageFormat::Nef => "nef",
            RawImageFormat::Raf => "raf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            RawImageFormat::Dng => "image/x-adobe-dng",
            RawImageFormat::Arw => "image/x-sony-arw",
            RawImageFormat::Cr2 => "image/x-canon-cr2",
            RawImageFormat::Cr3 => "image/x-canon-cr3",
            RawImageFormat::Nef => "image/x-nikon-nef",
            RawImageFormat::Raf => "image/x-fuji-raf",
        }
    }

    /// Matches a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|raw| raw.extension().eq_ignore_ascii_case(ext))
    }
}

impl VideoMediaType {
    pub fn extension(&self) -> &'static str {
        match self {
            VideoMediaType::Mp4 => "mp4",
            VideoMediaType::Webm => "webm",
            VideoMediaType::Mov => "mov",
            VideoMediaType::Avi => "avi",
            VideoMediaType::Mkv => "mkv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            VideoMediaType::Mp4 => "video/mp4",
            VideoMediaType::Webm => "video/webm",
            VideoMediaType::Mov => "video/quicktime",
            VideoMediaType::Avi => "video/x-msvideo",
            VideoMediaType::Mkv => "video/x-matroska",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaType::Image(ImageMediaType::Raw(raw)) => write!(f, "raw/{}", raw.extension()),
            other => f.write_str(other.extension()),
        }
    }
}

/// What a probe learned about a single file on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MediaProbe {
    pub path: PathBuf,
    pub media_type: MediaType,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_from_extension_is_case_insensitive() {
        assert_eq!(RawImageFormat::from_extension("DNG"), Some(RawImageFormat::Dng));
        assert_eq!(RawImageFormat::from_extension("cr3"), Some(RawImageFormat::Cr3));
        assert_eq!(RawImageFormat::from_extension("jpg"), None);
    }

    #[test]
    fn test_display_uses_canonical_names() {
        assert_eq!(MediaType::Image(ImageMediaType::Jpeg).to_string(), "jpg");
        assert_eq!(MediaType::Video(VideoMediaType::Mov).to_string(), "mov");
        assert_eq!(
            MediaType::Image(ImageMediaType::Raw(RawImageFormat::Nef)).to_string(),
            "raw/nef"
        );
    }

    #[test]
    fn test_mime_types() {
        let heic = MediaType::Image(ImageMediaType::Heic);
        assert!(heic.is_image());
        assert_eq!(heic.mime_type(), "image/heic");

        let webm = MediaType::Video(VideoMediaType::Webm);
        assert!(webm.is_video());
        assert_eq!(webm.mime_type(), "video/webm");
    }
}
