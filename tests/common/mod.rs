#![allow(dead_code)]

use std::path::{Path, PathBuf};

pub const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x06\0\0\0";
pub const JPEG: &[u8] = b"\xff\xd8\xff\xe0\0\x10JFIF\0\x01\x01\0\0\x01\0\x01\0\0";
pub const GIF: &[u8] = b"GIF89a\x01\0\x01\0\0\0\0;";
pub const AVI: &[u8] = b"RIFF\x24\0\0\0AVI LIST\x04\0\0\0hdrl";
pub const TIFF: &[u8] = b"II*\0\x08\0\0\0\0\0\0\0\0\0\0\0";

pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, contents).unwrap();
    path
}
