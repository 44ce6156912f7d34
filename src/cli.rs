use clap::Parser;
use std::path::PathBuf;

/// Default directory holding the JSON report files
pub const DEFAULT_SOURCE_DIR: &str = "jgiven-reports/json";

/// Default directory the AsciiDoc documents are written to
pub const DEFAULT_TARGET_DIR: &str = "jgiven-reports/asciidoc";

#[derive(Parser, Debug, Clone)]
#[command(name = "scenario-asciidoc")]
#[command(about = "Render JSON scenario reports as AsciiDoc documents")]
#[command(version)]
pub struct CliArgs {
    /// Directory containing the JSON report files (one feature per file)
    #[arg(long, short = 's', value_name = "DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: PathBuf,

    /// Directory to write the AsciiDoc documents to (created if missing)
    #[arg(long, short = 't', value_name = "DIR", default_value = DEFAULT_TARGET_DIR)]
    pub target_dir: PathBuf,

    /// Title of the index document
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Leave out scenarios that have no steps at all
    #[arg(long)]
    pub exclude_empty_scenarios: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if !self.source_dir.is_dir() {
            return Err(format!("Source directory {} does not exist", self.source_dir.display()));
        }

        if self.source_dir == self.target_dir {
            return Err("--source-dir and --target-dir must be different directories".to_string());
        }

        if self.target_dir.is_file() {
            return Err(format!("Target {} is a file, expected a directory", self.target_dir.display()));
        }

        if let Some(ref title) = self.title
            && title.trim().is_empty()
        {
            return Err("--title must not be empty".to_string());
        }

        Ok(())
    }
}
