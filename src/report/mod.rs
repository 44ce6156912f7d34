//! Report generation module - model to AsciiDoc conversion.
//!
//! This module handles:
//! - Converting sections of the report model into AsciiDoc blocks
//! - Assembling blocks into feature documents
//! - Calculating feature and total statistics
//! - Writing the document set of a report
//!
//! # Module Organization
//!
//! - `blocks` - The `ReportBlockConverter` trait and its AsciiDoc implementation
//! - `cases` - Read-only cases table view over a scenario
//! - `table` - AsciiDoc table rendering shared by all tables
//! - `format` - Durations and status labels
//! - `feature` - Feature document assembly
//! - `stats` - Statistics calculation and summation
//! - `export` - Index, overview pages and file output
//! - `types` - Rendering inputs that span several model entities

mod blocks;
mod cases;
mod export;
mod feature;
mod format;
mod stats;
mod table;
mod types;

// Re-export the converter
pub use blocks::{AsciiDocBlockConverter, LINE_SEPARATOR, ReportBlockConverter};
pub use cases::{CaseRow, CasesTable, ScenarioCasesTable};
pub use types::{FeaturePage, FeatureStatistics, StepLine};

// Re-export document assembly
pub use feature::FeatureWriter;
pub use format::format_duration;
pub use stats::{feature_statistics, statistics_for, total_statistics};

// Re-export document set output
pub use export::{
    ALL_SCENARIOS_FILE, FAILED_SCENARIOS_FILE, FEATURES_DIR, INDEX_FILE, PENDING_SCENARIOS_FILE, STATISTICS_FILE,
    all_scenarios_document, failed_scenarios_document, feature_file_name, feature_page, generate_report,
    index_document, pending_scenarios_document, statistics_document, unique_file_name,
};
