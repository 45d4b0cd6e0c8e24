//! The filesystem-creation collaborator.
//!
//! The dispatcher talks to a `FilesystemCreator` and never to mkfs
//! directly, so tests can substitute a recording implementation and the
//! production path stays swappable.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::errors::{RigError, RigResult};
use crate::{image, size};

/// The four parameters handed to the creator per matrix entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateRequest {
    /// Image file standing in for the target device.
    pub dev: PathBuf,
    /// Filesystem type name (matrix key).
    pub fstype: String,
    /// Size specification, forwarded verbatim (e.g. `"512M"`).
    pub fssize: String,
    /// Exercise the grow path after creation.
    pub grow: bool,
}

/// Creates one filesystem per request. A failure is fatal to the run;
/// the dispatcher performs no retry and no per-entry isolation.
pub trait FilesystemCreator {
    fn create(&self, req: &CreateRequest) -> RigResult<()>;
}

/// Production creator: allocates the image and shells out to the
/// filesystem's mkfs tool.
#[derive(Clone, Debug, Default)]
pub struct MkfsCreator {
    _private: (),
}

impl MkfsCreator {
    pub fn new() -> Self {
        Self::default()
    }

    fn run_tool(program: &str, args: &[&str], dev: &str) -> RigResult<()> {
        let output = Command::new(program)
            .args(args)
            .arg(dev)
            .output()
            .map_err(|e| {
                RigError::Creation(format!("failed to run {}: {}", program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RigError::Creation(format!(
                "{} failed with exit code {:?}: {}",
                program,
                output.status.code(),
                stderr
            )));
        }
        Ok(())
    }

    fn grow_filesystem(&self, req: &CreateRequest, bytes: u64) -> RigResult<()> {
        let grown = bytes.checked_mul(2).ok_or_else(|| {
            RigError::Storage(format!("grown size overflows for '{}'", req.fssize))
        })?;
        image::grow(&req.dev, grown)?;

        let dev = dev_str(&req.dev)?;
        match resizer_invocation(&req.fstype) {
            Some((program, args)) => {
                Self::run_tool(program, args, dev)?;
                tracing::info!(fstype = %req.fstype, dev, to = grown, "resized filesystem");
            }
            None => {
                // No offline resizer; the enlarged image is still useful
                // to callers that mount and grow online.
                tracing::debug!(
                    fstype = %req.fstype,
                    "no offline resizer, image enlarged without resize"
                );
            }
        }
        Ok(())
    }
}

impl FilesystemCreator for MkfsCreator {
    fn create(&self, req: &CreateRequest) -> RigResult<()> {
        let bytes = size::parse_size(&req.fssize)?;
        let (program, args) = mkfs_invocation(&req.fstype).ok_or_else(|| {
            RigError::Unsupported(format!("no mkfs tool known for '{}'", req.fstype))
        })?;

        image::allocate(&req.dev, bytes)?;

        let dev = dev_str(&req.dev)?;
        Self::run_tool(program, args, dev)?;
        tracing::info!(fstype = %req.fstype, dev, fssize = %req.fssize, "created filesystem");

        if req.grow {
            self.grow_filesystem(req, bytes)?;
        }
        Ok(())
    }
}

fn dev_str(dev: &Path) -> RigResult<&str> {
    dev.to_str().ok_or_else(|| {
        RigError::Storage(format!("invalid device path: {}", dev.display()))
    })
}

/// mkfs program and fixed arguments per filesystem type.
///
/// Force flags keep the tools from prompting when the image carries a
/// previous filesystem signature.
fn mkfs_invocation(fstype: &str) -> Option<(&'static str, &'static [&'static str])> {
    let invocation: (&str, &[&str]) = match fstype {
        "ext2" => ("mkfs.ext2", &["-F", "-q"]),
        "ext3" => ("mkfs.ext3", &["-F", "-q"]),
        "ext4" => ("mkfs.ext4", &["-F", "-q"]),
        "xfs" => ("mkfs.xfs", &["-f", "-q"]),
        "btrfs" => ("mkfs.btrfs", &["-f"]),
        "vfat" => ("mkfs.vfat", &[]),
        "f2fs" => ("mkfs.f2fs", &["-f"]),
        _ => return None,
    };
    Some(invocation)
}

/// Offline resize tool per filesystem type, where one exists.
fn resizer_invocation(fstype: &str) -> Option<(&'static str, &'static [&'static str])> {
    match fstype {
        // resize2fs grows to the device size when no size is given
        "ext2" | "ext3" | "ext4" => Some(("resize2fs", &["-f"])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_mkfs_invocations() {
        let (program, args) = mkfs_invocation("ext4").unwrap();
        assert_eq!(program, "mkfs.ext4");
        assert!(args.contains(&"-F"));

        assert_eq!(mkfs_invocation("btrfs").unwrap().0, "mkfs.btrfs");
        assert_eq!(mkfs_invocation("vfat").unwrap().0, "mkfs.vfat");
    }

    #[test]
    fn test_unknown_fstype_has_no_invocation() {
        assert!(mkfs_invocation("zfs").is_none());
        assert!(mkfs_invocation("").is_none());
    }

    #[test]
    fn test_resizer_only_for_ext_family() {
        assert!(resizer_invocation("ext2").is_some());
        assert!(resizer_invocation("ext4").is_some());
        assert!(resizer_invocation("xfs").is_none());
        assert!(resizer_invocation("btrfs").is_none());
        assert!(resizer_invocation("vfat").is_none());
    }

    #[test]
    fn test_unsupported_fstype_errors_before_touching_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let creator = MkfsCreator::new();
        let req = CreateRequest {
            dev: tmp.path().join("img"),
            fstype: "zfs".to_string(),
            fssize: "512M".to_string(),
            grow: false,
        };

        assert!(matches!(
            creator.create(&req),
            Err(RigError::Unsupported(_))
        ));
        assert!(!req.dev.exists());
    }

    #[test]
    fn test_bad_size_errors_before_touching_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let creator = MkfsCreator::new();
        let req = CreateRequest {
            dev: tmp.path().join("img"),
            fstype: "ext4".to_string(),
            fssize: "huge".to_string(),
            grow: false,
        };

        assert!(matches!(creator.create(&req), Err(RigError::Config(_))));
        assert!(!req.dev.exists());
    }
}
