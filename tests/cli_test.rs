mod common;

use anyhow::Result;
use common::{write_file, PNG};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn pixles_media(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_pixles-media"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_init_succeeds() -> Result<()> {
    let output = pixles_media(&["init"])?;

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8(output.stdout)?.contains("ready"));
    Ok(())
}

#[test]
fn test_print_writes_values_in_order() -> Result<()> {
    let output = pixles_media(&["print", "alpha", "beta", "gamma"])?;

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(output.stdout, b"alpha\nbeta\ngamma\n");

    let empty = pixles_media(&["print"])?;
    assert_eq!(empty.status.code(), Some(0));
    assert!(empty.stdout.is_empty());
    Ok(())
}

#[test]
fn test_missing_config_file_exits_with_config_code() -> Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("nope.toml");

    let output = pixles_media(&["-c", path_arg(&missing), "init"])?;

    assert_eq!(output.status.code(), Some(1));
    Ok(())
}

#[test]
fn test_invalid_log_level_reports_only_the_validation_error() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_file(dir.path(), "pixles.toml", b"[logging]\nlevel = \"loud\"\n");

    let output = pixles_media(&["-c", path_arg(&config), "init"])?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr)?;
    assert!(!stderr.contains("ignoring"));
    assert!(stderr.contains("logging.level"));
    Ok(())
}

#[test]
fn test_detect_exit_codes() -> Result<()> {
    let dir = TempDir::new()?;
    let png = write_file(dir.path(), "a.png", PNG);
    let text = write_file(dir.path(), "notes.txt", b"not media\n");
    let missing = dir.path().join("does-not-exist.png");

    let ok = pixles_media(&["detect", path_arg(&png)])?;
    assert_eq!(ok.status.code(), Some(0));
    assert!(String::from_utf8(ok.stdout)?.starts_with("png\timage/png\t"));

    let unknown = pixles_media(&["detect", path_arg(&png), path_arg(&text)])?;
    assert_eq!(unknown.status.code(), Some(2));

    let directory = pixles_media(&["detect", path_arg(dir.path())])?;
    assert_eq!(directory.status.code(), Some(2));

    let io = pixles_media(&["detect", path_arg(&missing)])?;
    assert_eq!(io.status.code(), Some(3));

    // An I/O failure outranks an unrecognised file
    let mixed = pixles_media(&["detect", path_arg(&text), path_arg(&missing)])?;
    assert_eq!(mixed.status.code(), Some(3));
    Ok(())
}

#[test]
fn test_scan_csv_output() -> Result<()> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "a.png", PNG);

    let output = pixles_media(&["scan", path_arg(dir.path()), "--format", "csv"])?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout)?;
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("path,media_type,mime_type,size_bytes,modified")
    );
    assert!(lines.next().unwrap().contains(",png,image/png,"));

    let missing = pixles_media(&["scan", path_arg(&dir.path().join("nope"))])?;
    assert_eq!(missing.status.code(), Some(3));
    Ok(())
}
