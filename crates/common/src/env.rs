//! Environment/runtime helpers
//!
//! Sanity checks run once at startup, before the database is touched.

use tracing::{info, warn};

/// Ensure the config file referenced by `CONFIG_PATH` is readable; warn when it
/// is missing since env vars can stand in for it.
pub async fn ensure_env(config_path: &str) -> anyhow::Result<()> {
    match tokio::fs::metadata(config_path).await {
        Ok(meta) if meta.is_file() => {
            info!(%config_path, "using config file");
        }
        Ok(_) => {
            return Err(anyhow::anyhow!("{config_path} exists but is not a regular file"));
        }
        Err(_) => {
            warn!(%config_path, "config file not found; falling back to environment variables");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ensure_env;

    #[tokio::test]
    async fn missing_config_is_not_fatal() {
        assert!(ensure_env("/nonexistent/config.toml").await.is_ok());
    }

    #[tokio::test]
    async fn directory_is_rejected() {
        let dir = std::env::temp_dir();
        assert!(ensure_env(dir.to_str().unwrap()).await.is_err());
    }
}
