use anyhow::Context;
use scratchcard_core::GameConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub data_dir: PathBuf,
    pub default_cards: usize,
    pub surface_width: u32,
    pub surface_height: u32,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("scratchcard"),
            default_cards: 6,
            surface_width: 200,
            surface_height: 120,
        }
    }
}

impl CliConfig {
    pub fn default_game_config_path(&self) -> PathBuf {
        self.data_dir.join("game.json")
    }

    /// Explicit path first, then `<data_dir>/game.json`, then built-in defaults.
    pub async fn load_game_config(&self, explicit: Option<&Path>) -> anyhow::Result<GameConfig> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = self.default_game_config_path();
                if !tokio::fs::try_exists(&fallback).await.unwrap_or(false) {
                    return Ok(GameConfig::default());
                }
                fallback
            }
        };

        let raw = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = GameConfig::from_json_str(&raw)?;

        tracing::debug!("Loaded game config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scratchcard_core::ScratchError;
    use tempfile::tempdir;

    fn config_in(dir: &Path) -> CliConfig {
        CliConfig {
            data_dir: dir.to_path_buf(),
            ..CliConfig::default()
        }
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = config_in(temp_dir.path())
            .load_game_config(None)
            .await
            .unwrap();
        assert_eq!(config.reveal_threshold, 0.5);
    }

    #[tokio::test]
    async fn test_data_dir_file_is_used() {
        let temp_dir = tempdir().unwrap();
        let cli = config_in(temp_dir.path());
        tokio::fs::write(cli.default_game_config_path(), r#"{ "brush_radius": 9 }"#)
            .await
            .unwrap();

        let config = cli.load_game_config(None).await.unwrap();
        assert_eq!(config.brush_radius, 9.0);
    }

    #[tokio::test]
    async fn test_invalid_explicit_file_is_rejected() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("bad.json");
        tokio::fs::write(&path, r#"{ "clamp_rate": 3 }"#).await.unwrap();

        let err = config_in(temp_dir.path())
            .load_game_config(Some(&path))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScratchError>(),
            Some(ScratchError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_explicit_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert!(config_in(temp_dir.path())
            .load_game_config(Some(&path))
            .await
            .is_err());
    }
}
