//! tabset - replay tab group scenarios headlessly
//!
//! Reads a scenario file, drives a tab group through its steps and prints
//! one JSON document per step (render plans and emitted events).

mod scenario;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use tabset_core::{Config, TabGroup};

use crate::scenario::{replay, to_nodes, Scenario};

/// Log level argument for CLI
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LogLevelArg {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevelArg {
    fn as_directive(self) -> &'static str {
        match self {
            LogLevelArg::Off => "off",
            LogLevelArg::Error => "error",
            LogLevelArg::Warn => "warn",
            LogLevelArg::Info => "info",
            LogLevelArg::Debug => "debug",
            LogLevelArg::Trace => "trace",
        }
    }
}

/// tabset - headless tab group scenario runner
#[derive(Parser)]
#[command(name = "tabset")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Host configuration; its tab props apply when the scenario has none
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log level (overrides config and RUST_LOG)
    #[arg(long, value_enum, value_name = "LEVEL")]
    log_level: Option<LogLevelArg>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };

    match cli.log_level {
        Some(level) => tabset_core::init_logging_with(level.as_directive()),
        None if std::env::var_os("RUST_LOG").is_some() => tabset_core::init_logging(),
        None => tabset_core::init_logging_with(&config.log_filter),
    }

    let json = std::fs::read_to_string(&cli.scenario)
        .with_context(|| format!("failed to read scenario {}", cli.scenario.display()))?;
    let scenario: Scenario = serde_json::from_str(&json)
        .with_context(|| format!("invalid scenario {}", cli.scenario.display()))?;

    let children = to_nodes(&scenario.panes);
    let group = TabGroup::new(scenario.config.unwrap_or(config.tabs), &children);

    tracing::info!(
        scenario = %cli.scenario.display(),
        steps = scenario.steps.len(),
        "Replaying scenario"
    );

    let outputs = replay(&group, children, &scenario.steps).context("scenario step failed")?;
    group.dispose();

    for output in &outputs {
        let line = if cli.pretty {
            serde_json::to_string_pretty(output)?
        } else {
            serde_json::to_string(output)?
        };
        println!("{line}");
    }

    Ok(())
}
