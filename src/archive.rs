use crate::error::PackageError;
use crate::target::Target;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Make sure the destination directory exists.
///
/// Only the last path component is created; a missing parent is an error.
pub fn ensure_destination(dir: &Path) -> Result<(), PackageError> {
    if dir.is_dir() {
        return Ok(());
    }

    debug!("creating destination directory {}", dir.display());
    fs::create_dir(dir).map_err(|e| PackageError::CreateDestination {
        path: dir.to_path_buf(),
        source: e,
    })
}

/// Package a single binary into a release archive.
///
/// # Arguments
/// * `source` - Path to the built binary
/// * `destination` - Directory where the archive will be placed
/// * `entry_name` - Name of the binary inside the archive
/// * `target` - Version/OS/architecture used to name the archive
///
/// # Returns
/// Path to `<destination>/<entry_name>_<version>_<os>_<arch>.zip` on success.
/// An existing archive at that path is overwritten.
pub fn package(
    source: &Path,
    destination: &Path,
    entry_name: &str,
    target: &Target,
) -> Result<PathBuf, PackageError> {
    ensure_destination(destination)?;

    let output = target.archive_path(destination, entry_name);

    let comment: Box<[u8]> = source
        .file_name()
        .ok_or_else(|| PackageError::InvalidSource(source.to_path_buf()))?
        .as_encoded_bytes()
        .into();

    // Read the source before touching the output so a missing binary leaves nothing behind
    let (data, mode) = read_source(source)?;

    let mut options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .last_modified_time(DateTime::default())
        .large_file(needs_zip64(data.len()));
    if let Some(mode) = mode {
        options = options.unix_permissions(mode);
    }

    let file = File::create(&output).map_err(|e| PackageError::WriteArchive {
        path: output.clone(),
        source: e,
    })?;

    let zip_err = |e| PackageError::Zip {
        path: output.clone(),
        source: e,
    };

    let mut writer = ZipWriter::new(file);
    writer.start_file(entry_name, options).map_err(zip_err)?;
    writer
        .write_all(&data)
        .map_err(|e| PackageError::WriteArchive {
            path: output.clone(),
            source: e,
        })?;
    writer.set_raw_comment(comment);
    writer.finish().map_err(zip_err)?;

    info!(
        "packaged {} ({} bytes) as {}",
        source.display(),
        data.len(),
        output.display()
    );
    Ok(output)
}

/// Package the binary the build step produced for `prefix`.
///
/// The source is `<build_dir>/<prefix>_<os>_<arch>` and the entry is named `prefix`.
pub fn package_prefix(
    build_dir: &Path,
    destination: &Path,
    prefix: &str,
    target: &Target,
) -> Result<PathBuf, PackageError> {
    let source = target.source_path(build_dir, prefix);
    debug!("packaging {} for {}", source.display(), target);
    package(&source, destination, prefix, target)
}

/// Entries at or past the 4 GiB boundary must be written with ZIP64 extensions
fn needs_zip64(len: usize) -> bool {
    len as u64 >= u64::from(u32::MAX)
}

/// Read the whole source file along with its permission bits, where the platform has them
fn read_source(source: &Path) -> Result<(Vec<u8>, Option<u32>), PackageError> {
    let read_err = |e| PackageError::ReadSource {
        path: source.to_path_buf(),
        source: e,
    };

    let mut file = File::open(source).map_err(read_err)?;
    let metadata = file.metadata().map_err(read_err)?;

    let mut data = Vec::with_capacity(usize::try_from(metadata.len()).unwrap_or(0));
    file.read_to_end(&mut data).map_err(read_err)?;

    Ok((data, file_mode(&metadata)))
}

#[cfg(unix)]
fn file_mode(metadata: &fs::Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn file_mode(_metadata: &fs::Metadata) -> Option<u32> {
    None
}
