/// Core data structures for scenario reports
///
/// This module defines the report model consumed by the AsciiDoc converter:
/// features (`ReportModel`), scenarios, cases, steps, words and statistics.
/// The JSON shape follows the report files written by the test runner, with
/// camelCase keys. Status tokens and data tables are validated on load.
use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Outcome of a scenario or a single case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ExecutionStatus {
    Success,
    Failed,
    ScenarioPending,
    SomeStepsPending,
}

impl ExecutionStatus {
    /// Enum token as written in report files (e.g. "SCENARIO_PENDING")
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "SUCCESS",
            ExecutionStatus::Failed => "FAILED",
            ExecutionStatus::ScenarioPending => "SCENARIO_PENDING",
            ExecutionStatus::SomeStepsPending => "SOME_STEPS_PENDING",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ExecutionStatus::ScenarioPending | ExecutionStatus::SomeStepsPending)
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionStatus {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUCCESS" => Ok(ExecutionStatus::Success),
            "FAILED" => Ok(ExecutionStatus::Failed),
            "SCENARIO_PENDING" => Ok(ExecutionStatus::ScenarioPending),
            "SOME_STEPS_PENDING" => Ok(ExecutionStatus::SomeStepsPending),
            other => Err(ConvertError::UnsupportedStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for ExecutionStatus {
    type Error = ConvertError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExecutionStatus> for String {
    fn from(status: ExecutionStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Outcome of a single step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepStatus {
    Passed,
    Failed,
    Skipped,
    Pending,
    Aborted,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Passed => "PASSED",
            StepStatus::Failed => "FAILED",
            StepStatus::Skipped => "SKIPPED",
            StepStatus::Pending => "PENDING",
            StepStatus::Aborted => "ABORTED",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which edge of a data table holds the header cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeaderType {
    None,
    #[default]
    Horizontal,
    Vertical,
    Both,
}

impl HeaderType {
    /// First row is a header
    pub fn is_horizontal(&self) -> bool {
        matches!(self, HeaderType::Horizontal | HeaderType::Both)
    }

    /// First column is a header
    pub fn is_vertical(&self) -> bool {
        matches!(self, HeaderType::Vertical | HeaderType::Both)
    }
}

/// Tabular step argument
///
/// Always holds at least one row and every row has the same, non-zero width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDataTable", into = "RawDataTable")]
pub struct DataTable {
    header_type: HeaderType,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(header_type: HeaderType, rows: Vec<Vec<String>>) -> Result<Self, ConvertError> {
        let Some(first) = rows.first() else {
            return Err(ConvertError::MalformedArgument("data table has no rows".to_string()));
        };

        let width = first.len();
        if width == 0 {
            return Err(ConvertError::MalformedArgument("data table has no columns".to_string()));
        }

        if let Some((index, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(ConvertError::MalformedArgument(format!(
                "data table row {} has {} cells, expected {}",
                index,
                row.len(),
                width
            )));
        }

        Ok(DataTable { header_type, rows })
    }

    pub fn header_type(&self) -> HeaderType {
        self.header_type
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataTable {
    #[serde(default)]
    header_type: HeaderType,
    data: Vec<Vec<String>>,
}

impl TryFrom<RawDataTable> for DataTable {
    type Error = ConvertError;

    fn try_from(raw: RawDataTable) -> Result<Self, Self::Error> {
        DataTable::new(raw.header_type, raw.data)
    }
}

impl From<DataTable> for RawDataTable {
    fn from(table: DataTable) -> Self {
        RawDataTable { header_type: table.header_type, data: table.rows }
    }
}

/// Structured value carried by an argument word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentPayload {
    Scalar(String),
    Table(DataTable),
}

/// Metadata of an argument word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentInfo {
    pub argument_name: String,
    /// Set when the argument stands for a scenario parameter (cases-as-table view)
    pub parameter_name: Option<String>,
    pub payload: Option<ArgumentPayload>,
}

/// A single word of a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWord", into = "RawWord")]
pub enum Word {
    /// Leading keyword such as "given" or "when"
    Intro(String),
    Plain(String),
    Argument { value: String, info: ArgumentInfo },
}

impl Word {
    pub fn intro(value: impl Into<String>) -> Self {
        Word::Intro(value.into())
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Word::Plain(value.into())
    }

    /// Argument word whose formatted value is a scalar string
    pub fn argument(argument_name: impl Into<String>, value: impl Into<String>, formatted: impl Into<String>) -> Self {
        Word::Argument {
            value: value.into(),
            info: ArgumentInfo {
                argument_name: argument_name.into(),
                parameter_name: None,
                payload: Some(ArgumentPayload::Scalar(formatted.into())),
            },
        }
    }

    /// Argument word carrying a data table
    pub fn table_argument(argument_name: impl Into<String>, value: impl Into<String>, table: DataTable) -> Self {
        Word::Argument {
            value: value.into(),
            info: ArgumentInfo {
                argument_name: argument_name.into(),
                parameter_name: None,
                payload: Some(ArgumentPayload::Table(table)),
            },
        }
    }

    /// Mark an argument word as a placeholder for the given parameter.
    /// Intro and plain words are returned unchanged.
    pub fn with_parameter_name(self, name: impl Into<String>) -> Self {
        match self {
            Word::Argument { value, mut info } => {
                info.parameter_name = Some(name.into());
                Word::Argument { value, info }
            }
            other => other,
        }
    }

    /// Raw value of the word
    pub fn value(&self) -> &str {
        match self {
            Word::Intro(value) | Word::Plain(value) => value,
            Word::Argument { value, .. } => value,
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawWord {
    value: String,
    #[serde(default, skip_serializing_if = "is_false")]
    is_intro_word: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    argument_info: Option<RawArgumentInfo>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArgumentInfo {
    #[serde(default)]
    argument_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    parameter_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    formatted_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data_table: Option<DataTable>,
}

impl TryFrom<RawWord> for Word {
    type Error = ConvertError;

    fn try_from(raw: RawWord) -> Result<Self, Self::Error> {
        match (raw.is_intro_word, raw.argument_info) {
            (true, Some(_)) => Err(ConvertError::MalformedArgument(format!(
                "word '{}' is both an intro word and an argument",
                raw.value
            ))),
            (true, None) => Ok(Word::Intro(raw.value)),
            (false, None) => Ok(Word::Plain(raw.value)),
            (false, Some(info)) => {
                // The formatted value is kept alongside a table by the writer; the table wins
                let payload = match (info.data_table, info.formatted_value) {
                    (Some(table), _) => Some(ArgumentPayload::Table(table)),
                    (None, Some(formatted)) => Some(ArgumentPayload::Scalar(formatted)),
                    (None, None) => None,
                };
                Ok(Word::Argument {
                    value: raw.value,
                    info: ArgumentInfo {
                        argument_name: info.argument_name,
                        parameter_name: info.parameter_name,
                        payload,
                    },
                })
            }
        }
    }
}

impl From<Word> for RawWord {
    fn from(word: Word) -> Self {
        match word {
            Word::Intro(value) => RawWord { value, is_intro_word: true, argument_info: None },
            Word::Plain(value) => RawWord { value, is_intro_word: false, argument_info: None },
            Word::Argument { value, info } => {
                let (formatted_value, data_table) = match info.payload {
                    Some(ArgumentPayload::Scalar(formatted)) => (Some(formatted), None),
                    Some(ArgumentPayload::Table(table)) => (None, Some(table)),
                    None => (None, None),
                };
                RawWord {
                    value,
                    is_intro_word: false,
                    argument_info: Some(RawArgumentInfo {
                        argument_name: info.argument_name,
                        parameter_name: info.parameter_name,
                        formatted_value,
                        data_table,
                    }),
                }
            }
        }
    }
}

/// A tag attached to scenarios of a feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "type")]
    pub tag_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Name shown in reports: the value if present, otherwise the tag type
    pub fn display_name(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.tag_type)
    }
}

/// A single step of a case, possibly with nested steps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepModel {
    pub words: Vec<Word>,
    #[serde(default)]
    pub nested_steps: Vec<StepModel>,
    pub status: StepStatus,
    #[serde(default)]
    pub duration_in_nanos: u64,
    #[serde(default)]
    pub extended_description: Option<String>,
    /// Section title steps carry the title as their words
    #[serde(default)]
    pub is_section_title: bool,
}

impl StepModel {
    /// Title text of a section title step (its words joined by spaces)
    pub fn section_title(&self) -> Option<String> {
        if !self.is_section_title {
            return None;
        }
        Some(self.words.iter().map(Word::value).collect::<Vec<_>>().join(" "))
    }
}

/// One execution of a scenario with concrete arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioCaseModel {
    pub case_nr: u32,
    #[serde(default)]
    pub steps: Vec<StepModel>,
    #[serde(default)]
    pub explicit_arguments: Vec<String>,
    #[serde(default)]
    pub derived_arguments: Vec<String>,
    pub status: ExecutionStatus,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub stack_trace: Option<Vec<String>>,
    #[serde(default)]
    pub duration_in_nanos: u64,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioModel {
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub test_method_name: String,
    /// Display name of the scenario
    pub description: String,
    #[serde(default)]
    pub extended_description: Option<String>,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub explicit_parameters: Vec<String>,
    #[serde(default)]
    pub derived_parameters: Vec<String>,
    #[serde(default)]
    pub cases_as_table: bool,
    #[serde(default)]
    pub scenario_cases: Vec<ScenarioCaseModel>,
    #[serde(default)]
    pub duration_in_nanos: u64,
    pub execution_status: ExecutionStatus,
}

impl ScenarioModel {
    /// True if at least one case has at least one step
    pub fn has_steps(&self) -> bool {
        self.scenario_cases.iter().any(|case| !case.steps.is_empty())
    }
}

/// A feature: all scenarios of one test class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportModel {
    pub class_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tag_map: BTreeMap<String, Tag>,
    #[serde(default)]
    pub scenarios: Vec<ScenarioModel>,
}

impl ReportModel {
    /// Feature name shown in reports: the explicit name, or the simple class name
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.class_name.rsplit('.').next().unwrap_or(&self.class_name),
        }
    }

    /// Resolve the tag ids of a scenario to display names. Unknown ids are shown as-is.
    pub fn tag_names(&self, scenario: &ScenarioModel) -> Vec<String> {
        scenario
            .tag_ids
            .iter()
            .map(|id| self.tag_map.get(id).map(|tag| tag.display_name().to_string()).unwrap_or_else(|| id.clone()))
            .collect()
    }
}

/// Aggregate counts for a feature or a whole report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    pub num_classes: u32,
    pub num_scenarios: u32,
    pub num_successful_scenarios: u32,
    pub num_failed_scenarios: u32,
    pub num_pending_scenarios: u32,
    pub num_cases: u32,
    pub num_failed_cases: u32,
    pub num_steps: u32,
    pub duration_in_nanos: u64,
}

impl Add for ReportStatistics {
    type Output = ReportStatistics;

    fn add(self, other: ReportStatistics) -> ReportStatistics {
        ReportStatistics {
            num_classes: self.num_classes.saturating_add(other.num_classes),
            num_scenarios: self.num_scenarios.saturating_add(other.num_scenarios),
            num_successful_scenarios: self.num_successful_scenarios.saturating_add(other.num_successful_scenarios),
            num_failed_scenarios: self.num_failed_scenarios.saturating_add(other.num_failed_scenarios),
            num_pending_scenarios: self.num_pending_scenarios.saturating_add(other.num_pending_scenarios),
            num_cases: self.num_cases.saturating_add(other.num_cases),
            num_failed_cases: self.num_failed_cases.saturating_add(other.num_failed_cases),
            num_steps: self.num_steps.saturating_add(other.num_steps),
            duration_in_nanos: self.duration_in_nanos.saturating_add(other.duration_in_nanos),
        }
    }
}

impl AddAssign for ReportStatistics {
    fn add_assign(&mut self, other: ReportStatistics) {
        *self = *self + other;
    }
}

impl Sum for ReportStatistics {
    fn sum<I: Iterator<Item = ReportStatistics>>(iter: I) -> Self {
        iter.fold(ReportStatistics::default(), Add::add)
    }
}

impl<'a> Sum<&'a ReportStatistics> for ReportStatistics {
    fn sum<I: Iterator<Item = &'a ReportStatistics>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
