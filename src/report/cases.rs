//! Read-only table view over the cases of a scenario.

use crate::types::{ExecutionStatus, ScenarioModel};

/// One row of a cases table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRow<'a> {
    pub nr: u32,
    pub status: ExecutionStatus,
    /// Derived argument values, aligned with `CasesTable::placeholders`
    pub arguments: &'a [String],
    pub description: Option<&'a str>,
}

/// Data of a cases table: column placeholders plus one row per case
pub trait CasesTable {
    /// Derived parameter names, in column order
    fn placeholders(&self) -> &[String];

    /// True if any case carries a description
    fn has_descriptions(&self) -> bool;

    /// Rows in case order
    fn rows(&self) -> Vec<CaseRow<'_>>;
}

/// `CasesTable` backed by a scenario model
#[derive(Debug, Clone, Copy)]
pub struct ScenarioCasesTable<'a> {
    scenario: &'a ScenarioModel,
}

impl<'a> ScenarioCasesTable<'a> {
    pub fn new(scenario: &'a ScenarioModel) -> Self {
        ScenarioCasesTable { scenario }
    }
}

impl CasesTable for ScenarioCasesTable<'_> {
    fn placeholders(&self) -> &[String] {
        &self.scenario.derived_parameters
    }

    fn has_descriptions(&self) -> bool {
        self.scenario.scenario_cases.iter().any(|case| case.description.is_some())
    }

    fn rows(&self) -> Vec<CaseRow<'_>> {
        self.scenario
            .scenario_cases
            .iter()
            .map(|case| CaseRow {
                nr: case.case_nr,
                status: case.status,
                arguments: &case.derived_arguments,
                description: case.description.as_deref(),
            })
            .collect()
    }
}
