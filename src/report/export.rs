//! Report document set generation.
//!
//! Builds the index, statistics and overview pages plus one document per
//! feature, and writes them below the target directory:
//!
//! ```text
//! <target>/index.asciidoc
//! <target>/totalStatistics.asciidoc
//! <target>/allScenarios.asciidoc
//! <target>/failedScenarios.asciidoc
//! <target>/pendingScenarios.asciidoc
//! <target>/features/<feature>.asciidoc
//! ```
//!
//! The overview pages only hold `include::` directives; failed and pending
//! pages pull the tagged scenario regions out of the feature documents.

use super::blocks::{AsciiDocBlockConverter, LINE_SEPARATOR, ReportBlockConverter};
use super::feature::FeatureWriter;
use super::format::status_tag;
use super::stats::{feature_statistics, total_statistics};
use super::types::{FeaturePage, FeatureStatistics};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::types::{ExecutionStatus, ReportModel, ReportStatistics};
use chrono::{DateTime, Local};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

pub const INDEX_FILE: &str = "index.asciidoc";
pub const STATISTICS_FILE: &str = "totalStatistics.asciidoc";
pub const ALL_SCENARIOS_FILE: &str = "allScenarios.asciidoc";
pub const FAILED_SCENARIOS_FILE: &str = "failedScenarios.asciidoc";
pub const PENDING_SCENARIOS_FILE: &str = "pendingScenarios.asciidoc";
pub const FEATURES_DIR: &str = "features";

const FILE_EXTENSION: &str = ".asciidoc";

/// File name of a feature document, derived from the class name.
///
/// Anything outside `[A-Za-z0-9._-]` becomes `_`.
pub fn feature_file_name(model: &ReportModel) -> String {
    let stem: String = model
        .class_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    format!("{}{}", stem, FILE_EXTENSION)
}

/// Make `file_name` unique among `used` by appending `-2`, `-3`, ... to its stem.
/// Names are compared case-insensitively.
pub fn unique_file_name(file_name: String, used: &mut HashSet<String>) -> String {
    if used.insert(file_name.to_lowercase()) {
        return file_name;
    }

    let stem = file_name.strip_suffix(FILE_EXTENSION).unwrap_or(&file_name);
    let mut suffix = 2;
    loop {
        let candidate = format!("{}-{}{}", stem, suffix, FILE_EXTENSION);
        if used.insert(candidate.to_lowercase()) {
            return candidate;
        }
        suffix += 1;
    }
}

/// Describe the feature document of a model for the overview pages.
///
/// Only scenarios that end up in the feature document count, so that the
/// overview pages never include a tag region that was not written.
pub fn feature_page(model: &ReportModel, exclude_empty_scenarios: bool) -> FeaturePage {
    let written = || model.scenarios.iter().filter(|s| !exclude_empty_scenarios || s.has_steps());

    FeaturePage {
        name: model.display_name().to_string(),
        file_name: feature_file_name(model),
        has_failed: written().any(|s| s.execution_status == ExecutionStatus::Failed),
        has_pending: written().any(|s| s.execution_status.is_pending()),
    }
}

fn include(target: &str, tag: Option<&str>) -> String {
    match tag {
        Some(tag) => format!("include::{}[tag=scenario-{}]", target, tag),
        None => format!("include::{}[]", target),
    }
}

fn feature_path(page: &FeaturePage) -> String {
    format!("{}/{}", FEATURES_DIR, page.file_name)
}

/// The entry document: title, generation time and the overview pages
pub fn index_document(title: &str, generated_at: &DateTime<Local>) -> String {
    let mut lines = vec![
        format!("= {}", title),
        ":toc: left".to_string(),
        ":toclevels: 3".to_string(),
        ":icons: font".to_string(),
        String::new(),
        format!("Generated on {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
    ];

    for (heading, file) in [
        ("Statistics", STATISTICS_FILE),
        ("Failed Scenarios", FAILED_SCENARIOS_FILE),
        ("Pending Scenarios", PENDING_SCENARIOS_FILE),
        ("All Scenarios", ALL_SCENARIOS_FILE),
    ] {
        lines.push(String::new());
        lines.push(format!("== {}", heading));
        lines.push(String::new());
        lines.push(include(file, None));
    }

    lines.join(LINE_SEPARATOR)
}

/// The statistics table of all features
pub fn statistics_document(
    converter: &impl ReportBlockConverter,
    features: &[FeatureStatistics],
    total: &ReportStatistics,
) -> String {
    converter.convert_statistics_block(features, total)
}

/// Every feature document in full
pub fn all_scenarios_document(pages: &[FeaturePage]) -> String {
    if pages.is_empty() {
        return "No scenarios found.".to_string();
    }

    let includes: Vec<String> = pages.iter().map(|page| include(&feature_path(page), None)).collect();
    includes.join(&LINE_SEPARATOR.repeat(2))
}

/// Scenarios tagged `failed`, grouped by feature
pub fn failed_scenarios_document(pages: &[FeaturePage]) -> String {
    tagged_scenarios_document(pages, ExecutionStatus::Failed, |page| page.has_failed)
}

/// Scenarios tagged `pending`, grouped by feature
pub fn pending_scenarios_document(pages: &[FeaturePage]) -> String {
    tagged_scenarios_document(pages, ExecutionStatus::ScenarioPending, |page| page.has_pending)
}

fn tagged_scenarios_document(
    pages: &[FeaturePage],
    status: ExecutionStatus,
    selected: impl Fn(&FeaturePage) -> bool,
) -> String {
    let tag = status_tag(status);
    let sections: Vec<String> = pages
        .iter()
        .filter(|page| selected(*page))
        .map(|page| {
            [format!("=== {}", page.name), String::new(), include(&feature_path(page), Some(tag))].join(LINE_SEPARATOR)
        })
        .collect();

    if sections.is_empty() {
        return format!("No {} scenarios.", tag);
    }
    sections.join(&LINE_SEPARATOR.repeat(2))
}

fn write_document(path: &Path, content: &str) -> Result<(), ReportError> {
    debug!("Writing {}", path.display());
    let mut text = content.to_string();
    text.push_str(LINE_SEPARATOR);
    fs::write(path, text).map_err(|e| ReportError::io(path, e))
}

/// Write the complete document set for `models` below the target directory
/// and return the total statistics.
///
/// Feature documents are written in model order; a conversion error in any
/// feature aborts the run before the overview pages are written.
pub fn generate_report(models: &[ReportModel], config: &ReportConfig) -> Result<ReportStatistics, ReportError> {
    let features_dir = config.target_dir.join(FEATURES_DIR);
    fs::create_dir_all(&features_dir).map_err(|e| ReportError::io(&features_dir, e))?;

    let converter = AsciiDocBlockConverter::new();
    let writer = FeatureWriter::new(converter).exclude_empty_scenarios(config.exclude_empty_scenarios);
    let statistics = feature_statistics(models);

    let mut pages = Vec::with_capacity(models.len());
    let mut used_names = HashSet::with_capacity(models.len());
    for (model, (_, feature_stats)) in models.iter().zip(&statistics) {
        let mut page = feature_page(model, config.exclude_empty_scenarios);
        let file_name = unique_file_name(page.file_name.clone(), &mut used_names);
        if file_name != page.file_name {
            warn!("{} and an earlier feature share a file name, writing {}", model.class_name, file_name);
            page.file_name = file_name;
        }
        let document = writer.write(model, feature_stats)?;
        write_document(&features_dir.join(&page.file_name), &document)?;
        pages.push(page);
    }

    let total = total_statistics(&statistics);
    let target = &config.target_dir;

    write_document(&target.join(STATISTICS_FILE), &statistics_document(&converter, &statistics, &total))?;
    write_document(&target.join(ALL_SCENARIOS_FILE), &all_scenarios_document(&pages))?;
    write_document(&target.join(FAILED_SCENARIOS_FILE), &failed_scenarios_document(&pages))?;
    write_document(&target.join(PENDING_SCENARIOS_FILE), &pending_scenarios_document(&pages))?;
    write_document(&target.join(INDEX_FILE), &index_document(&config.title, &Local::now()))?;

    info!(
        "Wrote {} feature documents ({} scenarios) to {}",
        pages.len(),
        total.num_scenarios,
        target.display()
    );
    Ok(total)
}

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;
