//! Sparse image-file management.
//!
//! Test filesystems are created on a flat sparse file rather than a real
//! block device, so runs need no privileges and leave nothing behind but
//! one file under the testing directory.

use std::fs::{File, OpenOptions};
use std::path::Path;

use crate::errors::{RigError, RigResult};

/// Create a fresh sparse image of `bytes` at `path`.
///
/// Parent directories are created as needed and a stale image from a
/// previous entry is replaced, so every filesystem starts from a blank
/// device.
pub fn allocate(path: &Path, bytes: u64) -> RigResult<()> {
    if bytes == 0 {
        return Err(RigError::Storage(format!(
            "refusing to allocate empty image at {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            RigError::Storage(format!(
                "failed to create image directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(path).map_err(|e| {
        RigError::Storage(format!("failed to create image {}: {}", path.display(), e))
    })?;
    file.set_len(bytes).map_err(|e| {
        RigError::Storage(format!("failed to size image {}: {}", path.display(), e))
    })?;

    tracing::debug!(image = %path.display(), bytes, "allocated image");
    Ok(())
}

/// Extend an existing image to `bytes`. Shrinking is refused.
pub fn grow(path: &Path, bytes: u64) -> RigResult<()> {
    let current = std::fs::metadata(path)
        .map_err(|e| {
            RigError::Storage(format!("cannot stat image {}: {}", path.display(), e))
        })?
        .len();

    if bytes <= current {
        return Err(RigError::Storage(format!(
            "refusing to shrink image {} from {} to {} bytes",
            path.display(),
            current,
            bytes
        )));
    }

    let file = OpenOptions::new().write(true).open(path).map_err(|e| {
        RigError::Storage(format!("failed to open image {}: {}", path.display(), e))
    })?;
    file.set_len(bytes).map_err(|e| {
        RigError::Storage(format!("failed to grow image {}: {}", path.display(), e))
    })?;

    tracing::debug!(image = %path.display(), from = current, to = bytes, "grew image");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_allocate_creates_sparse_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("testing").join("img");

        allocate(&path, 4096).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 4096);
    }

    #[test]
    fn test_allocate_replaces_stale_image() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("img");

        std::fs::write(&path, b"leftover from a previous run").unwrap();
        allocate(&path, 1024).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 1024);
    }

    #[test]
    fn test_allocate_rejects_zero() {
        let tmp = TempDir::new().unwrap();
        assert!(allocate(&tmp.path().join("img"), 0).is_err());
    }

    #[test]
    fn test_grow_extends() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("img");

        allocate(&path, 1024).unwrap();
        grow(&path, 2048).unwrap();
        assert_eq!(std::fs::metadata(&path).unwrap().len(), 2048);
    }

    #[test]
    fn test_grow_refuses_shrink() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("img");

        allocate(&path, 2048).unwrap();
        assert!(grow(&path, 1024).is_err());
        assert!(grow(&path, 2048).is_err());
    }

    #[test]
    fn test_grow_missing_image() {
        let tmp = TempDir::new().unwrap();
        assert!(grow(&tmp.path().join("nope"), 4096).is_err());
    }
}
