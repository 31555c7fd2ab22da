mod file_config;

pub use file_config::FileConfig;

use std::path::PathBuf;

pub const DEFAULT_PROMPT: &str = ">> ";

/// CLI arguments that take part in config resolution; mirrors the values a
/// TOML file can override.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub catalog: Option<PathBuf>,
    pub prompt: Option<String>,
    pub echo_commands: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog: Option<PathBuf>,
    pub prompt: String,
    pub echo_commands: bool,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file
    /// config. TOML values override CLI values where present.
    pub fn resolve(cli: CliConfig, file: Option<FileConfig>) -> AppConfig {
        let file = file.unwrap_or_default();
        AppConfig {
            catalog: file.catalog.map(PathBuf::from).or(cli.catalog),
            prompt: file
                .prompt
                .or(cli.prompt)
                .unwrap_or_else(|| DEFAULT_PROMPT.to_owned()),
            echo_commands: file.echo_commands.unwrap_or(cli.echo_commands),
        }
    }
}
