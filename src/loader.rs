/// Loading of JSON report files
///
/// Every `*.json` file directly inside the source directory holds one
/// report model. Files are read in file-name order so that repeated runs
/// produce identical documents.
use crate::error::ReportError;
use crate::types::ReportModel;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

const REPORT_EXTENSION: &str = "json";

/// List the report files of a directory, sorted by file name
pub fn report_files(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let entries = fs::read_dir(dir).map_err(|e| ReportError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ReportError::io(dir, e))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == REPORT_EXTENSION) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Read and parse a single report file
pub fn load_report_model(path: &Path) -> Result<ReportModel, ReportError> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    serde_json::from_str(&content).map_err(|source| ReportError::Parse { path: path.to_path_buf(), source })
}

/// Load every report model of a directory.
///
/// The first file that cannot be read or parsed aborts loading.
pub fn load_report_models(dir: &Path) -> Result<Vec<ReportModel>, ReportError> {
    let files = report_files(dir)?;
    if files.is_empty() {
        warn!("No report files found in {}", dir.display());
    }

    let mut models = Vec::with_capacity(files.len());
    for file in &files {
        debug!("Loading report {}", file.display());
        let model = load_report_model(file)?;
        debug!("Loaded '{}' with {} scenarios", model.display_name(), model.scenarios.len());
        models.push(model);
    }

    Ok(models)
}
