/// Configuration resolution module
///
/// This module handles:
/// - Building a ReportConfig from CLI arguments
/// - Resolving the report title (flag, environment, default)
use crate::cli::CliArgs;
use log::debug;
use std::env;
use std::path::PathBuf;

/// Environment variable consulted when no `--title` is given
pub const TITLE_ENV: &str = "SCENARIO_ASCIIDOC_TITLE";

/// Title used when neither the flag nor the environment provides one
pub const DEFAULT_TITLE: &str = "Scenario Report";

/// Fully resolved settings for one report run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub source_dir: PathBuf,
    pub target_dir: PathBuf,
    pub title: String,
    pub exclude_empty_scenarios: bool,
}

/// Build a complete ReportConfig from CLI arguments
///
/// The generator receives a fully resolved, immutable configuration.
pub fn build_report_config(args: &CliArgs) -> Result<ReportConfig, String> {
    debug!("Building report config from CLI args");

    let title = resolve_title(args.title.as_deref(), env::var(TITLE_ENV).ok())?;
    debug!("Report title: {}", title);

    let config = ReportConfig {
        source_dir: args.source_dir.clone(),
        target_dir: args.target_dir.clone(),
        title,
        exclude_empty_scenarios: args.exclude_empty_scenarios,
    };

    debug!("Reading reports from {:?}, writing to {:?}", config.source_dir, config.target_dir);
    Ok(config)
}

/// Pick the title: the flag wins over the environment, which wins over the default
fn resolve_title(flag: Option<&str>, env_value: Option<String>) -> Result<String, String> {
    if let Some(title) = flag {
        return Ok(title.trim().to_string());
    }

    match env_value {
        Some(value) if value.trim().is_empty() => Err(format!("{} is set but empty", TITLE_ENV)),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(DEFAULT_TITLE.to_string()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
