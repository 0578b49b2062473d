use std::path::Path;

use chrono::{DateTime, Utc};
use tokio::fs;

use crate::domain::model::{ImageMediaType, MediaProbe, MediaType};
use crate::utils::error::{MediaError, Result};

pub mod ext;

pub use ext::{detect_media_type, detect_media_type_from_bytes};

/// Classifies a single file and collects its size and modification time.
pub async fn probe(file_path: &Path) -> Result<MediaProbe> {
    let metadata = fs::metadata(file_path).await?;
    if !metadata.is_file() {
        return Err(MediaError::NotAFile {
            path: file_path.display().to_string(),
        });
    }

    let media_type = ext::detect_media_type(file_path)
        .await?
        .ok_or_else(|| MediaError::UnknownFormat {
            path: file_path.display().to_string(),
        })?;

    // Not every platform records mtime
    let modified = metadata.modified().ok().map(DateTime::<Utc>::from);

    Ok(MediaProbe {
        path: file_path.to_path_buf(),
        media_type,
        size_bytes: metadata.len(),
        modified,
    })
}

/// Detects the image type of `path`, rejecting videos with
/// [`MediaError::NotAnImage`].
pub async fn detect_image_type(path: &Path) -> Result<ImageMediaType> {
    let probe = probe(path).await?;
    match probe.media_type {
        MediaType::Image(t) => Ok(t),
        other => Err(MediaError::NotAnImage(other)),
    }
}
