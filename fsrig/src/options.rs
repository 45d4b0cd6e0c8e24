//! Configuration for the harness.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{RigError, RigResult};
use crate::layout::dirs as const_dirs;
use crate::size;

/// Environment variable overriding the harness home directory.
pub const FSRIG_HOME_ENV: &str = "FSRIG_HOME";

/// Per-filesystem test profile: how big the image should be and whether
/// the grown-image path is exercised after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsProfile {
    /// Size specification forwarded to the creator (e.g. `"512M"`).
    pub fssize: String,

    /// Grow the image after creation and resize where supported.
    #[serde(default)]
    pub grow: bool,
}

impl FsProfile {
    pub fn new(fssize: impl Into<String>, grow: bool) -> Self {
        Self {
            fssize: fssize.into(),
            grow,
        }
    }
}

/// The filesystem matrix: type name to profile.
///
/// BTreeMap keeps keys unique and iteration deterministic; entry order
/// affects execution sequence only, never the outcome.
pub type FsMatrix = BTreeMap<String, FsProfile>;

/// Configuration options for a harness run.
///
/// Users can create it with defaults and modify fields as needed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RigOptions {
    /// Harness home directory (config file, testing scratch space).
    #[serde(default = "default_home_dir")]
    pub home_dir: PathBuf,

    /// Filesystem types to test.
    #[serde(default = "default_matrix")]
    pub matrix: FsMatrix,
}

fn default_home_dir() -> PathBuf {
    std::env::var(FSRIG_HOME_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            path.push(const_dirs::FSRIG_DIR);
            path
        })
}

/// Built-in set of tested filesystems.
pub fn default_matrix() -> FsMatrix {
    let mut matrix = FsMatrix::new();
    matrix.insert("ext2".to_string(), FsProfile::new("512M", true));
    matrix.insert("ext3".to_string(), FsProfile::new("512M", true));
    matrix.insert("ext4".to_string(), FsProfile::new("512M", true));
    matrix.insert("xfs".to_string(), FsProfile::new("512M", false));
    matrix.insert("btrfs".to_string(), FsProfile::new("1G", true));
    matrix.insert("vfat".to_string(), FsProfile::new("512M", false));
    matrix
}

impl Default for RigOptions {
    fn default() -> Self {
        Self {
            home_dir: default_home_dir(),
            matrix: default_matrix(),
        }
    }
}

impl RigOptions {
    /// Validate the matrix before running.
    ///
    /// Every profile must carry a parseable, non-zero size. An empty
    /// matrix is valid: the dispatcher vacuously succeeds.
    pub fn sanitize(&self) -> RigResult<()> {
        for (fstype, profile) in &self.matrix {
            if fstype.trim().is_empty() {
                return Err(RigError::Config(
                    "matrix contains an empty filesystem type".to_string(),
                ));
            }
            let bytes = size::parse_size(&profile.fssize).map_err(|e| {
                RigError::Config(format!("matrix entry '{}': {}", fstype, e))
            })?;
            if bytes == 0 {
                return Err(RigError::Config(format!(
                    "matrix entry '{}': size must be non-zero",
                    fstype
                )));
            }
        }
        Ok(())
    }
}
