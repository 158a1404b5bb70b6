use async_trait::async_trait;
use rudns_application::ports::ResponseLog;
use rudns_domain::{DomainError, Response};
use std::path::{Path, PathBuf};
use tokio::fs::{File, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// Text file holding one encoded response per line.
///
/// Writers are serialised so lines from concurrent connections never interleave.
pub struct FileResponseLog {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileResponseLog {
    /// Opens `path` for appending, creating it if needed. Used by the servers.
    pub async fn append_mode(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(|e| Self::open_error(&path, e))?;
        Ok(Self::from_file(path, file))
    }

    /// Recreates `path` empty. Used for the client's per-run resolved log.
    pub async fn truncate_mode(path: impl AsRef<Path>) -> Result<Self, DomainError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)
            .await
            .map_err(|e| Self::open_error(&path, e))?;
        Ok(Self::from_file(path, file))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn from_file(path: PathBuf, file: File) -> Self {
        Self {
            path,
            file: Mutex::new(file),
        }
    }

    fn open_error(path: &Path, e: std::io::Error) -> DomainError {
        DomainError::ResponseLog(format!("Failed to open {}: {}", path.display(), e))
    }
}

#[async_trait]
impl ResponseLog for FileResponseLog {
    async fn append(&self, response: &Response) -> Result<(), DomainError> {
        let line = format!("{}\n", response);
        let mut file = self.file.lock().await;

        file.write_all(line.as_bytes()).await.map_err(|e| {
            DomainError::ResponseLog(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        file.flush().await.map_err(|e| {
            DomainError::ResponseLog(format!("Failed to flush {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), id = response.id, "Response logged");
        Ok(())
    }
}
