use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jukebox::command::{Command, Jukebox};
use jukebox::config::{AppConfig, CliConfig, FileConfig};
use jukebox::repl::run_repl;
use jukebox::script::run_script;

fn parse_path(s: &str) -> Result<PathBuf> {
    let path_buf = PathBuf::from(s);
    let original_path = match path_buf.canonicalize() {
        Ok(path) => path,
        Err(msg) => {
            if msg.kind() == std::io::ErrorKind::NotFound {
                path_buf
            } else {
                return Err(msg).with_context(|| format!("Error resolving path: {}", s));
            }
        }
    };
    if original_path.is_absolute() {
        return Ok(original_path);
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(original_path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to a command script. Starts an interactive session when omitted.
    #[clap(value_parser = parse_path)]
    pub script: Option<PathBuf>,

    /// Path to a TOML config file.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// Path to a song catalog file loaded before any command runs.
    #[clap(long, value_parser = parse_path)]
    pub catalog: Option<PathBuf>,

    /// The prompt shown in interactive mode.
    #[clap(long)]
    pub prompt: Option<String>,

    /// Echo each script line before its output.
    #[clap(long)]
    pub echo_commands: bool,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    // Command output owns stdout; logs go to stderr.
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    let file_config = match &cli_args.config {
        Some(path) => Some(FileConfig::load(path)?),
        None => None,
    };
    let config = AppConfig::resolve(
        CliConfig {
            catalog: cli_args.catalog,
            prompt: cli_args.prompt,
            echo_commands: cli_args.echo_commands,
        },
        file_config,
    );

    let mut jukebox = Jukebox::new();
    if let Some(path) = &config.catalog {
        info!("Preloading catalog from {}...", path.display());
        jukebox
            .execute(Command::LoadData { path: path.clone() })
            .with_context(|| format!("Could not preload catalog {}", path.display()))?;
    }

    match &cli_args.script {
        Some(script) => {
            let stdout = std::io::stdout();
            run_script(
                &mut jukebox,
                script,
                &mut stdout.lock(),
                config.echo_commands,
            )
        }
        None => run_repl(&mut jukebox, &config.prompt),
    }
}
