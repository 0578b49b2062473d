use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::{DirEntry, WalkDir};

use crate::domain::model::MediaProbe;
use crate::fs;
use crate::utils::error::{MediaError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOptions {
    pub recursive: bool,
    pub follow_links: bool,
    pub include_hidden: bool,
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            recursive: true,
            follow_links: false,
            include_hidden: false,
            max_depth: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub root: PathBuf,
    /// Sorted by path.
    pub media: Vec<MediaProbe>,
    /// Regular files that are not a supported image or video.
    pub skipped: usize,
    /// Files that could not be read.
    pub errors: usize,
}

impl ScanReport {
    pub fn image_count(&self) -> usize {
        self.media.iter().filter(|p| p.media_type.is_image()).count()
    }

    pub fn video_count(&self) -> usize {
        self.media.iter().filter(|p| p.media_type.is_video()).count()
    }

    pub fn total_bytes(&self) -> u64 {
        self.media.iter().map(|p| p.size_bytes).sum()
    }
}

pub struct MediaScanner {
    options: ScanOptions,
}

impl MediaScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    pub async fn scan(&self, root: &Path) -> Result<ScanReport> {
        let metadata = tokio::fs::metadata(root).await?;
        if !metadata.is_dir() {
            return Err(MediaError::NotAFile {
                path: root.display().to_string(),
            });
        }

        tracing::info!("Scanning {}", root.display());
        let (files, walk_errors) = self.collect_files(root).await?;
        tracing::debug!("Found {} candidate files", files.len());

        let mut media = Vec::new();
        let mut skipped = 0;
        let mut errors = walk_errors;

        for path in files {
            match fs::probe(&path).await {
                Ok(probe) => {
                    tracing::debug!("{} -> {}", path.display(), probe.media_type);
                    media.push(probe);
                }
                Err(MediaError::UnknownFormat { .. }) => skipped += 1,
                Err(e) => {
                    tracing::warn!("Failed to probe {}: {}", path.display(), e);
                    errors += 1;
                }
            }
        }

        media.sort_by(|a, b| a.path.cmp(&b.path));

        let report = ScanReport {
            root: root.to_path_buf(),
            media,
            skipped,
            errors,
        };
        tracing::info!(
            "Scan finished: {} images, {} videos, {} skipped, {} errors",
            report.image_count(),
            report.video_count(),
            report.skipped,
            report.errors
        );
        Ok(report)
    }

    async fn collect_files(&self, root: &Path) -> Result<(Vec<PathBuf>, usize)> {
        let root = root.to_path_buf();
        let options = self.options.clone();

        tokio::task::spawn_blocking(move || walk(&root, &options)).await?
    }
}

/// Returns the regular files under `root` and the number of entries below it
/// that could not be read (dangling links, loops, unreadable directories).
fn walk(root: &Path, options: &ScanOptions) -> Result<(Vec<PathBuf>, usize)> {
    let max_depth = if options.recursive {
        options.max_depth.unwrap_or(usize::MAX)
    } else {
        1
    };

    let include_hidden = options.include_hidden;
    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .max_depth(max_depth)
        .into_iter()
        .filter_entry(move |entry| include_hidden || entry.depth() == 0 || !is_hidden(entry));

    let mut files = Vec::new();
    let mut errors = 0;
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // The root itself failing is fatal; anything below it is not
            Err(e) if e.depth() == 0 => return Err(e.into()),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                errors += 1;
                continue;
            }
        };
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok((files, errors))
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
