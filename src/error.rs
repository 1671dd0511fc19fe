use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while packaging a binary into a release archive.
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("failed to read source binary '{}': {source}", .path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("source path has no file name: {}", .0.display())]
    InvalidSource(PathBuf),

    #[error("failed to create destination directory '{}': {source}", .path.display())]
    CreateDestination {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write archive '{}': {source}", .path.display())]
    WriteArchive {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("zip error for '{}': {source}", .path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}
