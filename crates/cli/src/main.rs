// FILE: crates/cli/src/main.rs

use anyhow::{bail, Context, Result};
use bookshelf_catalog::{AuthorOrder, Catalog};
use bookshelf_config::{Config, ConfigManager};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::io;
use std::path::PathBuf;

mod commands;
mod prompt;
mod shell;

use prompt::Prompter;
use shell::Shell;

fn build_cli() -> Command {
    Command::new("bookshelf")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Bookshelf Team")
        .about("Interactive book catalog kept in a local JSON file")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the catalog file [default: books.json]"),
        )
        .arg(
            Arg::new("page-size")
                .short('p')
                .long("page-size")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Books shown per page when listing [default: 50]"),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .help("Config file to read instead of the user config"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Disable colored output")
                .action(ArgAction::SetTrue),
        )
}

/// Resolves settings: defaults < config file < environment < flags
fn resolve_config(matches: &ArgMatches) -> Result<(Config, Option<String>)> {
    let manager = match matches.get_one::<PathBuf>("config") {
        Some(path) => ConfigManager::from_file(path.clone()),
        None => ConfigManager::new().context("Failed to locate config directory")?,
    };

    // Logging is not up yet, so a load failure is reported by the caller
    let (mut config, load_warning) = match manager.load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e.to_string())),
    };

    config.apply_env_overrides(|key| std::env::var(key).ok());

    if let Some(path) = matches.get_one::<PathBuf>("file") {
        config.catalog.path = path.clone();
    }
    if let Some(size) = matches.get_one::<usize>("page-size") {
        config.catalog.page_size = *size;
    }
    if matches.get_flag("no-color") {
        config.app.color_output = false;
    }

    if let Err(errors) = config.validate() {
        let message = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        bail!("Invalid configuration: {}", message);
    }

    Ok((config, load_warning))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    let (config, load_warning) = resolve_config(&matches)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.app.log_level.to_string()),
    )
    .init();

    if let Some(warning) = load_warning {
        log::warn!("Failed to load config: {}, using defaults", warning);
    }

    if !config.app.color_output {
        console::set_colors_enabled(false);
    }

    let path = &config.catalog.path;
    let author_order = if config.catalog.sort_authors {
        AuthorOrder::Sorted
    } else {
        AuthorOrder::FirstSeen
    };
    let catalog = Catalog::open(path)
        .with_context(|| format!("Failed to open catalog at {}", path.display()))?
        .with_author_order(author_order);

    log::info!(
        "Using catalog {} (page size {})",
        catalog.path().display(),
        config.catalog.page_size
    );

    let io = Prompter::new(io::stdin().lock(), io::stdout().lock());
    Shell::new(catalog, io, config.catalog.page_size).run()
}
