use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub catalog: Option<String>,
    pub prompt: Option<String>,
    pub echo_commands: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_partial_file() {
        let config: FileConfig = toml::from_str("prompt = \"juke> \"").unwrap();

        assert_eq!(config.prompt.as_deref(), Some("juke> "));
        assert!(config.catalog.is_none());
        assert!(config.echo_commands.is_none());
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "prompt = [not toml").unwrap();

        assert!(FileConfig::load(&path).is_err());
    }
}
