//! Filesystem layout of the harness home directory.

use std::path::{Path, PathBuf};

/// Directory and file names under the harness home.
pub mod dirs {
    /// Default home directory name, relative to the user home.
    pub const FSRIG_DIR: &str = ".fsrig";
    /// Scratch directory holding test images.
    pub const TESTING_DIR: &str = "testing";
    /// Image file acting as the target device.
    pub const IMAGE_FILE: &str = "img";
    /// Configuration file name.
    pub const CONFIG_FILE: &str = "config.json";
}

/// Path derivation over the harness home directory.
///
/// Pure derivation, no I/O. The setup stage is responsible for actually
/// materializing the directories.
#[derive(Clone, Debug)]
pub struct RigLayout {
    home_dir: PathBuf,
}

impl RigLayout {
    pub fn new(home_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
        }
    }

    pub fn home_dir(&self) -> &Path {
        &self.home_dir
    }

    /// Scratch directory that holds the test image.
    pub fn testing_dir(&self) -> PathBuf {
        self.home_dir.join(dirs::TESTING_DIR)
    }

    /// The image file each filesystem is created on. Every matrix entry
    /// reuses the same path, one after the other.
    pub fn image_path(&self) -> PathBuf {
        self.testing_dir().join(dirs::IMAGE_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.home_dir.join(dirs::CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_derive_from_home() {
        let layout = RigLayout::new("/srv/rig");
        assert_eq!(layout.home_dir(), Path::new("/srv/rig"));
        assert_eq!(layout.testing_dir(), PathBuf::from("/srv/rig/testing"));
        assert_eq!(layout.image_path(), PathBuf::from("/srv/rig/testing/img"));
        assert_eq!(layout.config_path(), PathBuf::from("/srv/rig/config.json"));
    }

    #[test]
    fn test_image_basename() {
        let layout = RigLayout::new("/home/user/.fsrig");
        let image = layout.image_path();
        assert_eq!(image.file_name().unwrap(), "img");
    }
}
