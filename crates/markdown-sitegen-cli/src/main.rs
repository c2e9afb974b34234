use anyhow::{Context, Result, bail};
use markdown_sitegen_config::Config;
use markdown_sitegen_engine::{copy_dir_recursive, generate_site};
use std::{env, path::PathBuf, process};

/// Finds the configuration and the directory its relative paths are based on.
///
/// An explicit config file argument wins; relative paths in it are resolved
/// against the file's own directory. Otherwise the user config is tried, and
/// failing that the default layout in the current directory is used.
fn load_config(args: &[String]) -> Result<Config> {
    let current_dir = env::current_dir().context("Failed to determine current directory")?;

    match args {
        [] => match Config::load()? {
            Some(config) => {
                log::info!("Loaded config from {}", Config::config_path().display());
                Ok(config.resolve(&current_dir))
            }
            None => {
                log::info!("No config file found, using default layout");
                Ok(Config::default().resolve(&current_dir))
            }
        },
        [config_path] => {
            let config_path = PathBuf::from(config_path);
            log::info!("Using config from CLI argument: {}", config_path.display());
            let config = Config::load_from_path(&config_path)?
                .with_context(|| format!("Config file not found: {}", config_path.display()))?;
            let base = config_path
                .parent()
                .map(|p| current_dir.join(p))
                .unwrap_or(current_dir);
            Ok(config.resolve(&base))
        }
        _ => bail!("Usage: markdown-sitegen [config.toml]"),
    }
}

fn build(config: &Config) -> Result<()> {
    if config.static_dir.is_dir() {
        let copied = copy_dir_recursive(&config.static_dir, &config.output_dir).with_context(|| {
            format!(
                "Failed to copy static files from {}",
                config.static_dir.display()
            )
        })?;
        log::info!(
            "Copied {copied} static files into {}",
            config.output_dir.display()
        );
    } else {
        log::warn!(
            "Static directory {} not found, skipping asset copy",
            config.static_dir.display()
        );
    }

    let pages = generate_site(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
    )
    .context("Site generation failed")?;

    for page in &pages {
        log::debug!("{} -> {} ({})", page.source.display(), page.output.display(), page.title);
    }
    log::info!("Built {} pages", pages.len());
    Ok(())
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let config = load_config(&args)?;
    log::debug!("Resolved config: {config:?}");
    build(&config)
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(e) = run() {
        log::error!("{e:#}");
        process::exit(1);
    }
}
