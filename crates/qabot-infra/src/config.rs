//! Configuration loader for qabot.
//!
//! Resolves the data directory and reads `config.toml` from it into
//! [`QaConfig`]. Falls back to defaults when the file is missing or
//! malformed, so a fresh install talks to the public generation endpoint.

use std::path::{Path, PathBuf};

use qabot_types::config::QaConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "QABOT_DATA_DIR";

/// Resolve the data directory.
///
/// Priority: `QABOT_DATA_DIR`, then `~/.qabot`, then `./.qabot`.
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV).ok(), dirs::home_dir())
}

/// Pick the data directory from an override value and a home directory.
fn data_dir_from(override_dir: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }

    if let Some(home) = home {
        return home.join(".qabot");
    }

    PathBuf::from(".qabot")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`QaConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - Otherwise returns the parsed config (absent fields take their defaults).
pub async fn load_config(data_dir: &Path) -> QaConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return QaConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return QaConfig::default();
        }
    };

    match toml::from_str::<QaConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            QaConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).await;
        assert_eq!(config, QaConfig::default());
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            r#"
endpoint = "http://localhost:11434/api/generate"
model = "llama3.1"
max_tokens = 256
port = 8080
"#,
        )
        .await
        .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.endpoint, "http://localhost:11434/api/generate");
        assert_eq!(config.model, "llama3.1");
        assert_eq!(config.max_tokens, 256);
        assert_eq!(config.port, 8080);
        assert!(config.persist_failures);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config, QaConfig::default());
    }

    #[tokio::test]
    async fn load_config_wrong_type_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "max_tokens = \"lots\"")
            .await
            .unwrap();

        let config = load_config(tmp.path()).await;
        assert_eq!(config.max_tokens, 100);
    }

    #[test]
    fn data_dir_override_wins() {
        let dir = data_dir_from(
            Some("/tmp/test-qabot".to_string()),
            Some(PathBuf::from("/home/someone")),
        );
        assert_eq!(dir, PathBuf::from("/tmp/test-qabot"));
    }

    #[test]
    fn data_dir_defaults_under_home() {
        let dir = data_dir_from(None, Some(PathBuf::from("/home/someone")));
        assert_eq!(dir, PathBuf::from("/home/someone/.qabot"));
    }

    #[test]
    fn data_dir_without_home_is_relative() {
        assert_eq!(data_dir_from(None, None), PathBuf::from(".qabot"));
    }
}
