use std::path::PathBuf;

use serde::Deserialize;

/// Limits and scratch storage for audio uploads
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UploadConfig {
    /// Directory where accepted uploads are written before processing
    #[serde(default = "default_scratch_dir")]
    pub scratch_dir: PathBuf,
    /// Size ceiling for a single upload, in bytes
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
    /// Accepted file extensions, lowercase with a leading dot
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            scratch_dir: default_scratch_dir(),
            max_bytes: default_max_bytes(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_scratch_dir() -> PathBuf {
    PathBuf::from("uploads")
}

const fn default_max_bytes() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_extensions() -> Vec<String> {
    [".wav", ".mp3", ".m4a", ".flac"].map(str::to_string).into()
}
