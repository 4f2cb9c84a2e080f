mod app;
mod cli;
mod config;
mod effects;
mod ui;

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use finder_logging::{finder_error, finder_info, LogDestination};
use jobfinder_core::{JobNature, SearchPhase};
use jobfinder_engine::EngineHandle;
use log::LevelFilter;

use crate::app::App;
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::effects::EffectRunner;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?
        .with_env(|key| std::env::var(key).ok())
        .with_cli(&cli);
    init_logging(&config, cli.verbose);

    let settings = config.search_settings()?;
    finder_info!("Job search backend: {}", settings.base_url);
    let engine = EngineHandle::new(settings).context("failed to start search engine")?;
    let mut app = App::new(EffectRunner::new(engine), io::stdout());

    if let Some(raw) = &cli.criteria.job_nature {
        if let Err(err) = raw.parse::<JobNature>() {
            eprintln!("{err}");
            return Ok(ExitCode::from(2));
        }
    }

    // Flags pre-fill the form in both modes.
    let edits = cli.criteria.field_values();
    let interactive = cli.interactive || edits.is_empty();
    for (field, value) in edits {
        app.set_field(field, value);
    }

    if interactive {
        app.run_interactive(&mut io::stdin().lock())
            .context("terminal input failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    match app.submit_form() {
        Ok(SearchPhase::Resolved) => Ok(ExitCode::SUCCESS),
        Ok(_) => Ok(ExitCode::FAILURE),
        Err(err) => {
            finder_error!("Search not submitted: {}", err);
            eprintln!("Please fill out the required fields: {err}.");
            Ok(ExitCode::from(2))
        }
    }
}

fn init_logging(config: &AppConfig, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    match &config.log_file {
        Some(path) if verbose => finder_logging::initialize(LogDestination::Both(path.clone()), level),
        Some(path) => finder_logging::initialize(LogDestination::File(path.clone()), LevelFilter::Info),
        None => finder_logging::initialize(LogDestination::Terminal, level),
    }
}
