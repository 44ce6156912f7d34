//! Render JSON scenario reports as AsciiDoc documents.
//!
//! The pipeline runs one way: report files are loaded into the typed model
//! (`types`), every feature is converted block by block (`report`) and the
//! resulting documents are written below a target directory.
//!
//! ```no_run
//! use scenario_asciidoc::{config::ReportConfig, loader, report};
//! use std::path::PathBuf;
//!
//! let config = ReportConfig {
//!     source_dir: PathBuf::from("jgiven-reports/json"),
//!     target_dir: PathBuf::from("jgiven-reports/asciidoc"),
//!     title: "Scenarios".to_string(),
//!     exclude_empty_scenarios: false,
//! };
//! let models = loader::load_report_models(&config.source_dir)?;
//! report::generate_report(&models, &config)?;
//! # Ok::<(), scenario_asciidoc::error::ReportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod types;
pub mod ui;

pub use error::{ConvertError, ReportError};
pub use report::{AsciiDocBlockConverter, FeatureWriter, ReportBlockConverter};
