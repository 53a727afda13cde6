use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded =
            crate::env::expand_env(&raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if limits are zero or the extension allow-list
    /// is malformed
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.request_timeout_secs == 0 {
            anyhow::bail!("server.request_timeout_secs must be greater than 0");
        }

        if self.upload.max_bytes == 0 {
            anyhow::bail!("upload.max_bytes must be greater than 0");
        }

        if self.upload.allowed_extensions.is_empty() {
            anyhow::bail!("upload.allowed_extensions must not be empty");
        }

        for ext in &self.upload.allowed_extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                anyhow::bail!("upload extension '{ext}' must start with a dot followed by a suffix");
            }
            if ext.chars().skip(1).any(|c| !c.is_ascii_alphanumeric()) {
                anyhow::bail!("upload extension '{ext}' contains invalid characters");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("despacho.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_minimal_config() {
        let (_dir, path) = write_config("");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.upload.max_bytes, 10 * 1024 * 1024);
        assert!(config.upload.allowed_extensions.contains(&".wav".to_string()));
        assert!(config.stt.provider.is_none());
        assert!(config.llm.provider.is_none());
    }

    #[test]
    fn loads_provider_sections() {
        let (_dir, path) = write_config(
            r#"
            [stt.provider]
            type = "google"
            api_key = "stt-key"

            [llm.provider]
            type = "openai"
            api_key = "llm-key"
            model = "gemini-1.5-flash"
            "#,
        );
        let config = Config::load(&path).unwrap();
        let stt = config.stt.provider.unwrap();
        assert_eq!(stt.language, "es-ES");
        assert_eq!(stt.sample_rate_hertz, 16_000);
        let llm = config.llm.provider.unwrap();
        assert_eq!(llm.model, "gemini-1.5-flash");
    }

    #[test]
    fn rejects_zero_timeout() {
        let (_dir, path) = write_config("[server]\nrequest_timeout_secs = 0\n");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn rejects_malformed_extension() {
        let (_dir, path) = write_config("[upload]\nallowed_extensions = [\"wav\"]\n");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn rejects_unknown_fields() {
        let (_dir, path) = write_config("[server]\nbogus = true\n");
        assert!(Config::load(&path).is_err());
    }

    #[test]
    fn expands_env_placeholders() {
        temp_env::with_var("DESPACHO_LLM_KEY", Some("from-env"), || {
            let (_dir, path) = write_config(
                "[llm.provider]\ntype = \"openai\"\napi_key = \"{{ env.DESPACHO_LLM_KEY }}\"\n",
            );
            let config = Config::load(&path).unwrap();
            assert!(config.llm.provider.unwrap().api_key.is_some());
        });
    }
}
