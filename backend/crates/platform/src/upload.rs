//! Uploaded File Storage
//!
//! Writes uploaded files to a local directory and hands back the stored path.
//! Names are `<unix-millis>-<random>-<sanitized original name>`. Files are
//! created exclusively, so an existing upload is never overwritten.

use std::io;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

use crate::crypto::{random_bytes, to_base64url};

/// Longest file name component kept from the client
const MAX_NAME_LENGTH: usize = 100;

/// Fresh names tried before giving up on a save
const MAX_NAME_ATTEMPTS: usize = 4;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Uploaded file is empty")]
    Empty,

    #[error("Upload I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Store writing into a directory on the local disk
#[derive(Debug, Clone)]
pub struct DiskUploadStore {
    dir: PathBuf,
}

impl DiskUploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist `bytes` and return the stored path
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<String, UploadError> {
        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }

        tokio::fs::create_dir_all(&self.dir).await?;

        let sanitized = sanitize_file_name(original_name);

        for _ in 0..MAX_NAME_ATTEMPTS {
            let file_name = format!(
                "{}-{}-{}",
                Utc::now().timestamp_millis(),
                to_base64url(&random_bytes(6)),
                sanitized
            );
            let path = self.dir.join(file_name);

            match write_new_file(&path, bytes).await {
                Ok(()) => return Ok(path.to_string_lossy().into_owned()),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(UploadError::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "no free upload name",
        )))
    }
}

/// Write `bytes` to a file that must not exist yet
async fn write_new_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await
}

/// Reduce a client-supplied name to a safe single path component
pub fn sanitize_file_name(name: &str) -> String {
    // Browsers on Windows may send the full client path
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(MAX_NAME_LENGTH)
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
