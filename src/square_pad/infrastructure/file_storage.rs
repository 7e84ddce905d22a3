use super::error::InfrastructureError;
use crate::domain::image_store_trait::ImageStore;
use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// `ImageStore` backed by the local filesystem.
///
/// Saves go through a sibling temporary file that is renamed into place,
/// so readers never observe a half-written destination. An existing
/// symlink at the destination is written through, not replaced.
pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }

    fn temp_path_for(path: &Path) -> Result<PathBuf, InfrastructureError> {
        let file_name = path.file_name().ok_or_else(|| {
            InfrastructureError::FileStorageError(format!("{} has no file name", path.display()))
        })?;
        let mut temp_name = OsString::from(".");
        temp_name.push(file_name);
        temp_name.push(format!(".{}.tmp", std::process::id()));
        Ok(path.with_file_name(temp_name))
    }

    // Follows a symlink at `path` so the rename lands on its target.
    fn resolve_target(path: &Path) -> Result<PathBuf, InfrastructureError> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.file_type().is_symlink() => {
                fs::canonicalize(path).map_err(InfrastructureError::IoError)
            }
            _ => Ok(path.to_path_buf()),
        }
    }

    fn write_new(temp_path: &Path, data: &[u8]) -> std::io::Result<()> {
        // create_new refuses to clobber a file someone else left behind.
        let mut file = OpenOptions::new().write(true).create_new(true).open(temp_path)?;
        file.write_all(data)?;
        file.sync_all()
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageStore for LocalFileStorage {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).map_err(InfrastructureError::IoError)?;
        Ok(data)
    }

    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        let target = Self::resolve_target(path)?;
        let temp_path = Self::temp_path_for(&target)?;
        if let Err(e) = Self::write_new(&temp_path, data) {
            if e.kind() != std::io::ErrorKind::AlreadyExists && temp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&temp_path) {
                    log::warn!("Could not remove {}: {}", temp_path.display(), cleanup);
                }
            }
            return Err(InfrastructureError::IoError(e));
        }
        if let Err(e) = fs::rename(&temp_path, &target) {
            if temp_path.exists() {
                if let Err(cleanup) = fs::remove_file(&temp_path) {
                    log::warn!("Could not remove {}: {}", temp_path.display(), cleanup);
                }
            }
            return Err(InfrastructureError::IoError(e));
        }
        log::debug!("Wrote {} bytes to {}", data.len(), target.display());
        Ok(())
    }
}
