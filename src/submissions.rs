use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::models::SubmissionRecord;

/// Append-only text log of accepted submissions. Records are only ever
/// added; there is no rewrite or delete path.
pub struct SubmissionLog {
    path: PathBuf,
    /// Serialises appends from concurrent requests within this process.
    write_lock: Mutex<()>,
}

impl SubmissionLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record, creating the parent directory on first use.
    pub async fn append(&self, record: &SubmissionRecord) -> io::Result<()> {
        let line = record.to_line();
        let _guard = self.write_lock.lock().await;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if fs::metadata(dir).await.is_err() {
                fs::create_dir_all(dir).await?;
                tracing::info!("📁 Created data directory: {}", dir.display());
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}
