//! Implements SummarySinkPort by overwriting a single text file.
//!
//! The destination is only touched once the full summary is in hand, and is replaced
//! via write-to-temp + rename so a failed write never leaves a truncated file.

use crate::domain::{DomainError, Summary};
use crate::ports::SummarySinkPort;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::info;

/// Summary file sink. Overwritten each run, never appended.
pub struct SummaryFile {
    path: PathBuf,
}

impl SummaryFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Sibling temp path: `<file name>.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name: OsString = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from("summary"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Atomic save using write-replace pattern.
    /// 1. Write to temp file
    /// 2. sync_all() to ensure flush to disk
    /// 3. Atomic rename to target path
    async fn write_atomic(&self, contents: &[u8]) -> Result<(), DomainError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| DomainError::Output(format!("create output dir: {}", e)))?;
        }

        let temp_path = self.temp_path();
        let result = async {
            let mut f = fs::File::create(&temp_path)
                .await
                .map_err(|e| DomainError::Output(format!("create temp file: {}", e)))?;
            f.write_all(contents)
                .await
                .map_err(|e| DomainError::Output(format!("write temp file: {}", e)))?;
            f.sync_all()
                .await
                .map_err(|e| DomainError::Output(format!("sync temp file: {}", e)))?;
            drop(f); // Close file handle before rename

            fs::rename(&temp_path, &self.path)
                .await
                .map_err(|e| DomainError::Output(format!("atomic rename failed: {}", e)))
        }
        .await;

        if result.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }
        result
    }
}

#[async_trait::async_trait]
impl SummarySinkPort for SummaryFile {
    async fn emit(&self, summary: &Summary) -> Result<(), DomainError> {
        self.write_atomic(summary.as_str().as_bytes()).await?;
        let abs_path = self
            .path
            .canonicalize()
            .unwrap_or_else(|_| self.path.clone());
        info!(
            path = %abs_path.display(),
            bytes = summary.len(),
            "saved summary to disk"
        );
        Ok(())
    }

    fn name(&self) -> String {
        format!("file:{}", self.path.display())
    }
}
