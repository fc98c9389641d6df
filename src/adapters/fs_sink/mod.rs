// Filesystem clip sink - Writes downloaded clips into an output directory

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::ports::ClipSink;

/// Saves clips under a fixed directory
pub struct FsClipSink {
    output_dir: PathBuf,
}

impl FsClipSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl ClipSink for FsClipSink {
    async fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf, DomainError> {
        // Only a bare file name is accepted; never write outside the output directory
        let name = Path::new(filename)
            .file_name()
            .filter(|name| *name == std::ffi::OsStr::new(filename))
            .ok_or_else(|| DomainError::Save(format!("invalid file name: {}", filename)))?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| {
                DomainError::Save(format!(
                    "cannot create {}: {}",
                    self.output_dir.display(),
                    e
                ))
            })?;

        let path = self.output_dir.join(name);
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| DomainError::Save(format!("cannot write {}: {}", path.display(), e)))?;
        Ok(path)
    }
}
