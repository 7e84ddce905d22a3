use std::path::Path;

use crate::infrastructure::error::InfrastructureError;

#[cfg(test)]
use mockall::automock;

/// Where source images come from and padded images go.
#[cfg_attr(test, automock)]
pub trait ImageStore {
    fn exists(&self, path: &Path) -> bool;

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError>;

    /// Must not leave a partial file at `path` when it fails. A symlink at
    /// `path` is written through to its target.
    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError>;
}
