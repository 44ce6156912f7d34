//! AsciiDoc block conversion.
//!
//! Every operation maps one section of the report model onto a single,
//! self-contained block of AsciiDoc text. Blocks are joined with
//! `LINE_SEPARATOR` internally and never end with one. Conversions are
//! pure: the converter holds no state and never retains its inputs.

use super::cases::CasesTable;
use super::format::{capitalize, format_duration, status_label, status_tag};
use super::table::{AsciiDocTable, ColumnStyle};
use super::types::{FeatureStatistics, StepLine};
use crate::error::ConvertError;
use crate::types::{ArgumentInfo, ArgumentPayload, ExecutionStatus, ReportStatistics, Word};

/// Separator between the lines of a block
pub const LINE_SEPARATOR: &str = "\n";

const PASSTHROUGH_FENCE: &str = "++++";
const LITERAL_FENCE: &str = "....";
const EXAMPLE_FENCE: &str = "====";
const LIST_CONTINUATION: &str = "+";
const NO_STACKTRACE: &str = "No stacktrace provided";

const INTRO_WORD_ROLE: &str = "jg-introWord";
const ARGUMENT_ROLE: &str = "jg-argument";
const ARGUMENT_TABLE_ROLE: &str = "jg-argumentTable";
const CASES_TABLE_ROLE: &str = "jg-casesTable";
const EXCEPTION_ROLE: &str = "jg-exception";

/// Parameter name that doubles as the case description
const DESCRIPTION_PARAMETER: &str = "description";

const STATISTICS_HEADER: [&str; 10] = [
    "feature",
    "total classes",
    "successful scenarios",
    "failed scenarios",
    "pending scenarios",
    "total scenarios",
    "failed cases",
    "total cases",
    "total steps",
    "duration",
];

/// Converts report model sections into text blocks of one markup dialect
pub trait ReportBlockConverter {
    /// Feature heading, outcome summary and optional description
    fn convert_feature_header_block(
        &self,
        feature_name: &str,
        statistics: &ReportStatistics,
        description: Option<&str>,
    ) -> String;

    /// Begin marker, scenario heading, status line, optional description and tags
    fn convert_scenario_header_block(
        &self,
        name: &str,
        status: ExecutionStatus,
        duration_in_nanos: u64,
        tag_names: &[String],
        description: Option<&str>,
    ) -> String;

    /// Case heading and the parameter values of the case
    fn convert_case_header_block(
        &self,
        case_nr: u32,
        parameter_names: &[String],
        parameter_values: &[String],
        description: Option<&str>,
    ) -> Result<String, ConvertError>;

    /// A single step as a list item
    fn convert_step_block(&self, step: &StepLine<'_>) -> String;

    /// Error caption and collapsible stack trace of a failed case
    fn convert_case_footer_block(&self, header: &str, stack_trace: Option<&[String]>) -> String;

    /// End marker matching the begin marker of the scenario header
    fn convert_scenario_footer_block(&self, status: ExecutionStatus) -> String;

    /// One row per case with its derived arguments and status
    fn convert_cases_table_block(&self, cases_table: &dyn CasesTable) -> Result<String, ConvertError>;

    /// Per-feature statistics followed by a `sum` row
    fn convert_statistics_block(&self, feature_statistics: &[FeatureStatistics], total: &ReportStatistics) -> String;
}

/// `ReportBlockConverter` producing AsciiDoc
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiDocBlockConverter;

impl AsciiDocBlockConverter {
    pub fn new() -> Self {
        AsciiDocBlockConverter
    }
}

/// A rendered word: either inline text or a block that needs its own
/// list continuation
enum RenderedWord {
    Inline(String),
    Detached(String),
}

fn push_fenced(lines: &mut Vec<String>, fence: &str, content: &str) {
    lines.push(fence.to_string());
    lines.push(content.to_string());
    lines.push(fence.to_string());
}

fn is_multiline(text: &str) -> bool {
    text.contains('\n') || text.contains('\r')
}

fn render_argument(value: &str, info: &ArgumentInfo) -> RenderedWord {
    if let Some(ref parameter_name) = info.parameter_name {
        return RenderedWord::Inline(format!("[.{}]*<{}>*", ARGUMENT_ROLE, parameter_name));
    }

    let text = match info.payload {
        Some(ArgumentPayload::Table(ref table)) => {
            let lines = AsciiDocTable::from_data_table(table, ARGUMENT_TABLE_ROLE).to_lines();
            return RenderedWord::Detached(lines.join(LINE_SEPARATOR));
        }
        Some(ArgumentPayload::Scalar(ref formatted)) => formatted.as_str(),
        None => value,
    };

    if is_multiline(text) {
        let mut lines = vec![format!("[.{}]", ARGUMENT_ROLE)];
        push_fenced(&mut lines, LITERAL_FENCE, text);
        RenderedWord::Detached(lines.join(LINE_SEPARATOR))
    } else {
        RenderedWord::Inline(format!("[.{}]_{}_", ARGUMENT_ROLE, text))
    }
}

fn render_word(word: &Word) -> RenderedWord {
    match word {
        Word::Intro(value) => RenderedWord::Inline(format!("[.{}]*{}*", INTRO_WORD_ROLE, capitalize(value))),
        Word::Plain(value) => RenderedWord::Inline(value.clone()),
        Word::Argument { value, info } => render_argument(value, info),
    }
}

fn push_continuation(block: &mut String) {
    block.push_str(LINE_SEPARATOR);
    block.push_str(LIST_CONTINUATION);
    block.push_str(LINE_SEPARATOR);
}

fn statistics_row(label: &str, statistics: &ReportStatistics) -> Vec<String> {
    vec![
        label.to_string(),
        statistics.num_classes.to_string(),
        statistics.num_successful_scenarios.to_string(),
        statistics.num_failed_scenarios.to_string(),
        statistics.num_pending_scenarios.to_string(),
        statistics.num_scenarios.to_string(),
        statistics.num_failed_cases.to_string(),
        statistics.num_cases.to_string(),
        statistics.num_steps.to_string(),
        format_duration(statistics.duration_in_nanos),
    ]
}

impl ReportBlockConverter for AsciiDocBlockConverter {
    fn convert_feature_header_block(
        &self,
        feature_name: &str,
        statistics: &ReportStatistics,
        description: Option<&str>,
    ) -> String {
        let mut lines = vec![
            format!("=== {}", feature_name),
            String::new(),
            format!(
                "{} Successful, {} Failed, {} Pending, {} Total ({})",
                statistics.num_successful_scenarios,
                statistics.num_failed_scenarios,
                statistics.num_pending_scenarios,
                statistics.num_scenarios,
                format_duration(statistics.duration_in_nanos)
            ),
        ];

        if let Some(description) = description {
            lines.push(String::new());
            push_fenced(&mut lines, PASSTHROUGH_FENCE, description);
        }

        lines.join(LINE_SEPARATOR)
    }

    fn convert_scenario_header_block(
        &self,
        name: &str,
        status: ExecutionStatus,
        duration_in_nanos: u64,
        tag_names: &[String],
        description: Option<&str>,
    ) -> String {
        let mut lines = vec![
            format!("// tag::scenario-{}[]", status_tag(status)),
            String::new(),
            format!("==== {}", capitalize(name)),
            String::new(),
            format!("[{}] ({})", status_label(status), format_duration(duration_in_nanos)),
        ];

        if let Some(description) = description.filter(|d| !d.is_empty()) {
            lines.push(String::new());
            push_fenced(&mut lines, PASSTHROUGH_FENCE, description);
        }

        if !tag_names.is_empty() {
            lines.push(String::new());
            lines.push(format!("Tags: _{}_", tag_names.join(", ")));
        }

        lines.join(LINE_SEPARATOR)
    }

    fn convert_case_header_block(
        &self,
        case_nr: u32,
        parameter_names: &[String],
        parameter_values: &[String],
        description: Option<&str>,
    ) -> Result<String, ConvertError> {
        if parameter_names.len() != parameter_values.len() {
            return Err(ConvertError::AlignmentMismatch {
                context: "case header",
                names: parameter_names.len(),
                values: parameter_values.len(),
            });
        }

        let mut heading = format!("===== Case {}", case_nr);
        if let Some(description) = description {
            let is_parameter = parameter_names
                .iter()
                .zip(parameter_values)
                .any(|(name, value)| name == DESCRIPTION_PARAMETER && value == description);
            if is_parameter {
                heading.push(' ');
                heading.push_str(description);
            }
        }

        if parameter_names.is_empty() {
            return Ok(heading);
        }

        let parameters: Vec<String> = parameter_names
            .iter()
            .zip(parameter_values)
            .map(|(name, value)| format!("{} = {}", name, value))
            .collect();

        let mut lines = vec![heading, String::new()];
        push_fenced(&mut lines, EXAMPLE_FENCE, &parameters.join(", "));

        Ok(lines.join(LINE_SEPARATOR))
    }

    fn convert_step_block(&self, step: &StepLine<'_>) -> String {
        let mut block = String::new();

        if let Some(title) = step.section_title {
            block.push('.');
            block.push_str(title);
            block.push_str(LINE_SEPARATOR);
        }

        block.push_str(&"*".repeat(step.depth + 1));

        // Inline text following a detached block starts a new continuation
        let mut after_block = false;
        for word in step.words {
            match render_word(word) {
                RenderedWord::Inline(text) => {
                    if after_block {
                        push_continuation(&mut block);
                    } else {
                        block.push(' ');
                    }
                    block.push_str(&text);
                    after_block = false;
                }
                RenderedWord::Detached(text) => {
                    push_continuation(&mut block);
                    block.push_str(&text);
                    after_block = true;
                }
            }
        }

        if step.is_failed {
            if after_block {
                push_continuation(&mut block);
            } else {
                block.push(' ');
            }
            block.push_str(&format!(
                "[.right]#[{}] ({})#",
                step.status.as_str(),
                format_duration(step.duration_in_nanos)
            ));
            after_block = false;
        }

        if let Some(description) = step.description.filter(|d| !d.is_empty()) {
            if after_block {
                push_continuation(&mut block);
            } else {
                block.push_str(" +");
                block.push_str(LINE_SEPARATOR);
            }
            block.push_str(&format!("  _+++{}+++_", description));
        }

        block
    }

    fn convert_case_footer_block(&self, header: &str, stack_trace: Option<&[String]>) -> String {
        let mut lines = vec![
            format!(".{}", header),
            format!("[.{}%collapsible]", EXCEPTION_ROLE),
            EXAMPLE_FENCE.to_string(),
        ];

        match stack_trace {
            Some(stack_trace) => {
                lines.push(LITERAL_FENCE.to_string());
                lines.extend(stack_trace.iter().cloned());
                lines.push(LITERAL_FENCE.to_string());
            }
            None => lines.push(NO_STACKTRACE.to_string()),
        }

        lines.push(EXAMPLE_FENCE.to_string());
        lines.join(LINE_SEPARATOR)
    }

    fn convert_scenario_footer_block(&self, status: ExecutionStatus) -> String {
        format!("// end::scenario-{}[]", status_tag(status))
    }

    fn convert_cases_table_block(&self, cases_table: &dyn CasesTable) -> Result<String, ConvertError> {
        let placeholders = cases_table.placeholders();
        let with_descriptions = cases_table.has_descriptions();

        let mut header = vec!["#".to_string()];
        if with_descriptions {
            header.push("Description".to_string());
        }
        header.extend(placeholders.iter().cloned());
        header.push("Status".to_string());

        let mut rows = vec![header];
        for row in cases_table.rows() {
            if row.arguments.len() != placeholders.len() {
                return Err(ConvertError::AlignmentMismatch {
                    context: "cases table",
                    names: placeholders.len(),
                    values: row.arguments.len(),
                });
            }

            let mut cells = vec![row.nr.to_string()];
            if with_descriptions {
                cells.push(row.description.unwrap_or_default().to_string());
            }
            cells.extend(row.arguments.iter().cloned());
            cells.push(row.status.as_str().to_string());
            rows.push(cells);
        }

        let default_columns = placeholders.len() + usize::from(with_descriptions);
        let mut columns = vec![ColumnStyle::Header];
        columns.extend(std::iter::repeat_n(ColumnStyle::Default, default_columns));
        columns.push(ColumnStyle::RightAligned);

        let table = AsciiDocTable::new(rows).title("Cases").role(CASES_TABLE_ROLE).option("header").columns(columns);
        Ok(table.to_lines().join(LINE_SEPARATOR))
    }

    fn convert_statistics_block(&self, feature_statistics: &[FeatureStatistics], total: &ReportStatistics) -> String {
        let mut rows = vec![STATISTICS_HEADER.iter().map(|cell| cell.to_string()).collect::<Vec<_>>()];
        for (name, statistics) in feature_statistics {
            rows.push(statistics_row(name, statistics));
        }
        rows.push(statistics_row("sum", total));

        let table = AsciiDocTable::new(rows).title("Total Statistics").option("header").option("footer");
        table.to_lines().join(LINE_SEPARATOR)
    }
}

#[cfg(test)]
#[path = "blocks_test.rs"]
mod blocks_test;
