use std::path::Path;

use file_format::FileFormat;

use crate::domain::model::{ImageMediaType, MediaType, RawImageFormat, VideoMediaType};
use crate::utils::error::Result;

macro_rules! img {
    ($variant:ident) => {
        Some(MediaType::Image(ImageMediaType::$variant))
    };
}

macro_rules! vid {
    ($variant:ident) => {
        Some(MediaType::Video(VideoMediaType::$variant))
    };
}

/// Sniffs the content signature of `file_path` and classifies it.
///
/// The read happens on the blocking pool. `Ok(None)` means the file was
/// readable but is not a supported image or video.
pub async fn detect_media_type(file_path: &Path) -> Result<Option<MediaType>> {
    let path = file_path.to_path_buf();
    let fmt = tokio::task::spawn_blocking(move || FileFormat::from_file(path)).await??;

    tracing::trace!("Signature of {} is {:?}", file_path.display(), fmt);
    Ok(classify(fmt, raw_hint(file_path)))
}

/// Same as [`detect_media_type`] for an in-memory buffer. `ext_hint` is the
/// file extension, if any, used only to tell RAW formats apart.
pub fn detect_media_type_from_bytes(bytes: &[u8], ext_hint: Option<&str>) -> Option<MediaType> {
    let fmt = FileFormat::from_bytes(bytes);
    classify(fmt, ext_hint.and_then(RawImageFormat::from_extension))
}

fn raw_hint(path: &Path) -> Option<RawImageFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(RawImageFormat::from_extension)
}

// Most RAW containers are TIFF (DNG, ARW, CR2, NEF) or ISO-BMFF (CR3), so the
// signature alone cannot always name them. The extension only decides for a
// TIFF signature or content file-format could not identify at all; any other
// recognised format (empty, text, PDF, ...) is never media.
fn classify(fmt: FileFormat, raw: Option<RawImageFormat>) -> Option<MediaType> {
    match fmt {
        // Image formats
        FileFormat::JointPhotographicExpertsGroup => img!(Jpeg),
        FileFormat::JpegXl => img!(Jxl),
        FileFormat::HighEfficiencyImageCoding | FileFormat::HighEfficiencyImageFileFormat => {
            img!(Heic)
        }
        FileFormat::PortableNetworkGraphics => img!(Png),
        FileFormat::TagImageFileFormat => match raw {
            Some(raw) => Some(MediaType::Image(ImageMediaType::Raw(raw))),
            None => img!(Tiff),
        },
        FileFormat::Av1ImageFileFormat => img!(Avif),
        FileFormat::Webp => img!(WebP),
        FileFormat::GraphicsInterchangeFormat => img!(Gif),
        FileFormat::WindowsBitmap => img!(Bmp),

        // Video formats
        FileFormat::Mpeg4Part14Video => vid!(Mp4),
        FileFormat::Webm => vid!(Webm),
        FileFormat::AppleQuicktime => vid!(Mov),
        FileFormat::AudioVideoInterleave => vid!(Avi),
        FileFormat::MatroskaVideo => vid!(Mkv),

        FileFormat::ArbitraryBinaryData => {
            raw.map(|raw| MediaType::Image(ImageMediaType::Raw(raw)))
        }

        // Camera RAW formats file-format names itself (CR2, CR3, NEF, RAF, ...)
        other => RawImageFormat::from_extension(other.extension())
            .map(|raw| MediaType::Image(ImageMediaType::Raw(raw))),
    }
}
