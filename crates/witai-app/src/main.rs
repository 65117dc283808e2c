mod cli;
mod commands;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use witai_common::WitaiError;
use witai_config::WitaiConfig;
use witai_platform::FileStore;
use witai_style::{SanitizerOptions, StyleSanitizer};

use cli::{Args, Command};

/// Directive used until the config has been read.
const BOOTSTRAP_DIRECTIVE: &str = "witai=info";

fn log_filter(directive: &str) -> EnvFilter {
    let directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    EnvFilter::from_default_env().add_directive(directive)
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(directive))
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config, falling back to defaults. The loader logs validation
/// problems itself.
fn load_config(path: Option<&Path>) -> WitaiConfig {
    witai_config::load_config(path).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WitaiConfig::default()
    })
}

/// Store path: `--store`, then `[storage] path`, then the platform default.
fn store_path(args: &Args, config: &WitaiConfig) -> Result<PathBuf, WitaiError> {
    if let Some(ref path) = args.store {
        return Ok(path.clone());
    }
    if let Some(ref path) = config.storage.path {
        return Ok(PathBuf::from(path));
    }

    if let Err(e) = witai_platform::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }
    Ok(witai_platform::store_file()?)
}

fn run(args: &Args, config: &WitaiConfig) -> Result<(), WitaiError> {
    if args.command == Command::Config {
        println!("{}", witai_config::config_to_json(config));
        return Ok(());
    }

    let path = store_path(args, config)?;
    tracing::debug!("Using store {}", path.display());
    let store = FileStore::open(path)?;

    let options = SanitizerOptions {
        storage_key: config.style.storage_key.clone(),
        element_id: config.style.element_id.clone(),
    };
    let mut sanitizer = StyleSanitizer::new(store, options)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&args.command, &mut sanitizer, std::io::stdin().lock(), &mut out)
}

fn main() -> ExitCode {
    let args = cli::parse();

    // The config level seeds the global filter, so config loading logs
    // through a scoped subscriber.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(log_filter(
            args.log_level.as_deref().unwrap_or(BOOTSTRAP_DIRECTIVE),
        ))
        .with_writer(std::io::stderr)
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || {
        load_config(args.config.as_deref())
    });

    let directive = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.directive());
    init_logging(&directive);

    tracing::debug!("Witai v{} ({:?})", env!("CARGO_PKG_VERSION"), args.command);

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
