//! Release target descriptors and the file naming conventions built on them

use std::fmt;
use std::path::{Path, PathBuf};

/// The version/OS/architecture triple shared by every prefix in one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Release version (e.g., "v1.0.0")
    pub version: String,
    /// Operating system identifier (e.g., "linux")
    pub os: String,
    /// Architecture identifier (e.g., "amd64")
    pub arch: String,
}

impl Target {
    pub fn new(version: impl Into<String>, os: impl Into<String>, arch: impl Into<String>) -> Self {
        Target {
            version: version.into(),
            os: os.into(),
            arch: arch.into(),
        }
    }

    /// Where the build step leaves the binary for `prefix`: `<build_dir>/<prefix>_<os>_<arch>`
    pub fn source_path(&self, build_dir: &Path, prefix: &str) -> PathBuf {
        build_dir.join(format!("{}_{}_{}", prefix, self.os, self.arch))
    }

    /// Archive file name: `<prefix>_<version>_<os>_<arch>.zip`
    pub fn archive_name(&self, prefix: &str) -> String {
        format!("{}_{}_{}_{}.zip", prefix, self.version, self.os, self.arch)
    }

    pub fn archive_path(&self, destination: &Path, prefix: &str) -> PathBuf {
        destination.join(self.archive_name(prefix))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}@{}", self.os, self.arch, self.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linux_amd64() -> Target {
        Target::new("v1.0.0", "linux", "amd64")
    }

    #[test]
    fn source_path_under_build_dir() {
        let path = linux_amd64().source_path(Path::new("build"), "mytool");
        assert_eq!(path, Path::new("build").join("mytool_linux_amd64"));
    }

    #[test]
    fn archive_name_includes_version() {
        let name = linux_amd64().archive_name("mytool");
        assert_eq!(name, "mytool_v1.0.0_linux_amd64.zip");
    }

    #[test]
    fn archive_path_joins_destination() {
        let path = linux_amd64().archive_path(Path::new("release"), "mytool");
        assert_eq!(path, Path::new("release").join("mytool_v1.0.0_linux_amd64.zip"));
    }

    #[test]
    fn identifiers_are_not_interpreted() {
        let target = Target::new("nightly-2024.01", "windows", "arm64");
        assert_eq!(target.archive_name("a.b"), "a.b_nightly-2024.01_windows_arm64.zip");
        assert_eq!(
            target.source_path(Path::new("out"), "a.b"),
            Path::new("out").join("a.b_windows_arm64")
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(linux_amd64().to_string(), "linux/amd64@v1.0.0");
    }
}
