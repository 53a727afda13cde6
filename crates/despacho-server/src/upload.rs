use std::path::{Path, PathBuf};

use despacho_config::UploadConfig;
use uuid::Uuid;

use crate::error::ApiError;

/// Headroom for multipart boundaries and part headers on top of the
/// file size ceiling
const MULTIPART_OVERHEAD: u64 = 8 * 1024;

/// Validation policy for uploaded audio files
pub(crate) struct UploadPolicy {
    scratch_dir: PathBuf,
    max_bytes: u64,
    allowed_extensions: Vec<String>,
}

impl UploadPolicy {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            scratch_dir: config.scratch_dir.clone(),
            max_bytes: config.max_bytes,
            allowed_extensions: config
                .allowed_extensions
                .iter()
                .map(|ext| ext.to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn scratch_dir(&self) -> &Path {
        &self.scratch_dir
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    /// Ceiling for the whole request body: the file limit plus
    /// multipart overhead
    pub fn body_limit(&self) -> u64 {
        self.max_bytes.saturating_add(MULTIPART_OVERHEAD)
    }

    /// Fast-fail on the declared request size
    ///
    /// The declared length covers boundaries and part headers as well
    /// as the file, so a file at the ceiling must not be rejected here;
    /// the actual per-part byte count is still checked after reading.
    pub fn check_declared_size(&self, declared: u64) -> Result<(), ApiError> {
        self.check_size(declared.saturating_sub(MULTIPART_OVERHEAD))
    }

    /// Check the filename's extension against the allow-list
    ///
    /// Returns the normalized lowercase extension (with leading dot) so
    /// the scratch file keeps the original suffix.
    pub fn validate_extension(&self, filename: &str) -> Result<String, ApiError> {
        let extension = filename
            .rsplit_once('.')
            .filter(|(stem, suffix)| !stem.is_empty() && !suffix.is_empty())
            .map(|(_, suffix)| format!(".{}", suffix.to_ascii_lowercase()));

        match extension {
            Some(ext) if self.allowed_extensions.contains(&ext) => Ok(ext),
            _ => Err(ApiError::bad_request(format!(
                "unsupported audio format, allowed: {}",
                self.allowed_extensions.join(", ")
            ))),
        }
    }

    /// Enforce the size ceiling, for both declared and actual sizes
    pub fn check_size(&self, bytes: u64) -> Result<(), ApiError> {
        if bytes > self.max_bytes {
            return Err(ApiError::payload_too_large(format!(
                "file too large, limit is {} MB",
                self.max_bytes / (1024 * 1024)
            )));
        }
        Ok(())
    }
}

/// An accepted upload written to scratch storage under a random name
///
/// Removal is explicit via [`remove`](Self::remove) on the normal path;
/// dropping an un-removed scratch file (a cancelled or timed-out
/// request) spawns a best-effort removal so no request leaks a file.
pub(crate) struct ScratchFile {
    path: PathBuf,
    removed: bool,
}

impl ScratchFile {
    pub async fn write(dir: &Path, extension: &str, bytes: &[u8]) -> std::io::Result<Self> {
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(format!("{}{extension}", Uuid::new_v4()));
        tokio::fs::write(&path, bytes).await?;

        Ok(Self { path, removed: false })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the scratch file, logging rather than failing on error
    pub async fn remove(mut self) {
        self.removed = true;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => tracing::debug!(path = %self.path.display(), "scratch file removed"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!(path = %self.path.display(), "failed to remove scratch file: {e}"),
        }
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        if self.removed {
            return;
        }

        let path = std::mem::take(&mut self.path);
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                if let Err(e) = tokio::fs::remove_file(&path).await
                    && e.kind() != std::io::ErrorKind::NotFound
                {
                    tracing::warn!(path = %path.display(), "failed to remove scratch file: {e}");
                }
            });
        } else if let Err(e) = std::fs::remove_file(&path)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            tracing::warn!(path = %path.display(), "failed to remove scratch file: {e}");
        }
    }
}

/// Delete any files left in the scratch directory
///
/// Run at shutdown to clear leftovers from abandoned requests.
pub async fn sweep_scratch(dir: &Path) {
    let Ok(mut entries) = tokio::fs::read_dir(dir).await else {
        return;
    };

    let mut swept = 0u64;
    while let Ok(Some(entry)) = entries.next_entry().await {
        if entry.file_type().await.is_ok_and(|t| t.is_file()) && tokio::fs::remove_file(entry.path()).await.is_ok() {
            swept += 1;
        }
    }

    if swept > 0 {
        tracing::info!(swept, dir = %dir.display(), "scratch directory swept");
    }
}
