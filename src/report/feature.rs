//! Feature document assembly.
//!
//! Walks one report model and stitches the converter's blocks into the
//! document of a feature: header, then every scenario wrapped in its
//! `tag::`/`end::` markers so that overview pages can include scenarios
//! by status.

use super::blocks::{AsciiDocBlockConverter, LINE_SEPARATOR, ReportBlockConverter};
use super::cases::ScenarioCasesTable;
use super::types::StepLine;
use crate::error::ConvertError;
use crate::types::{
    ExecutionStatus, ReportModel, ReportStatistics, ScenarioCaseModel, ScenarioModel, StepModel, StepStatus, Word,
};
use log::debug;

const OPEN_BLOCK_FENCE: &str = "--";

/// Writes feature documents using a block converter
#[derive(Debug, Clone, Default)]
pub struct FeatureWriter<C = AsciiDocBlockConverter> {
    converter: C,
    exclude_empty_scenarios: bool,
}

impl<C: ReportBlockConverter> FeatureWriter<C> {
    pub fn new(converter: C) -> Self {
        FeatureWriter { converter, exclude_empty_scenarios: false }
    }

    /// Skip scenarios whose cases have no steps at all
    pub fn exclude_empty_scenarios(mut self, exclude: bool) -> Self {
        self.exclude_empty_scenarios = exclude;
        self
    }

    /// Render the whole feature. Blocks are separated by one blank line.
    pub fn write(&self, model: &ReportModel, statistics: &ReportStatistics) -> Result<String, ConvertError> {
        let mut blocks = vec![self.converter.convert_feature_header_block(
            model.display_name(),
            statistics,
            model.description.as_deref(),
        )];

        for scenario in &model.scenarios {
            if self.exclude_empty_scenarios && !scenario.has_steps() {
                debug!("Skipping empty scenario '{}' of {}", scenario.description, model.class_name);
                continue;
            }
            self.write_scenario(model, scenario, &mut blocks)?;
        }

        Ok(blocks.join(&LINE_SEPARATOR.repeat(2)))
    }

    fn write_scenario(
        &self,
        model: &ReportModel,
        scenario: &ScenarioModel,
        blocks: &mut Vec<String>,
    ) -> Result<(), ConvertError> {
        let tag_names = model.tag_names(scenario);
        blocks.push(self.converter.convert_scenario_header_block(
            &scenario.description,
            scenario.execution_status,
            scenario.duration_in_nanos,
            &tag_names,
            scenario.extended_description.as_deref(),
        ));

        let cases = &scenario.scenario_cases;
        if scenario.cases_as_table && cases.len() > 1 {
            // The first case carries the steps with parameter placeholders
            self.write_steps(&cases[0], blocks);
            blocks.push(self.converter.convert_cases_table_block(&ScenarioCasesTable::new(scenario))?);
        } else {
            for case in cases {
                if cases.len() > 1 {
                    blocks.push(self.converter.convert_case_header_block(
                        case.case_nr,
                        &scenario.explicit_parameters,
                        &case.explicit_arguments,
                        case.description.as_deref(),
                    )?);
                }

                self.write_steps(case, blocks);

                if case.status == ExecutionStatus::Failed
                    && let Some(ref error_message) = case.error_message
                {
                    blocks.push(self.converter.convert_case_footer_block(error_message, case.stack_trace.as_deref()));
                }
            }
        }

        blocks.push(self.converter.convert_scenario_footer_block(scenario.execution_status));
        Ok(())
    }

    /// Steps of a case as list blocks. A section title closes the current
    /// list and titles the first step of the next one. A title with no step
    /// left to carry it becomes an empty titled block.
    fn write_steps(&self, case: &ScenarioCaseModel, blocks: &mut Vec<String>) {
        let case_unsuccessful = case.status != ExecutionStatus::Success;
        let mut lines: Vec<String> = Vec::new();
        let mut section_title: Option<String> = None;

        for step in &case.steps {
            if let Some(title) = step.section_title() {
                if !lines.is_empty() {
                    blocks.push(lines.join(LINE_SEPARATOR));
                    lines.clear();
                }
                if let Some(empty) = section_title.replace(title) {
                    blocks.push(empty_section(&empty));
                }
                continue;
            }

            self.push_step(step, 0, case_unsuccessful, section_title.take().as_deref(), &mut lines);
        }

        if !lines.is_empty() {
            blocks.push(lines.join(LINE_SEPARATOR));
        }
        if let Some(empty) = section_title {
            debug!("Section '{}' of case {} has no steps", empty, case.case_nr);
            blocks.push(empty_section(&empty));
        }
    }

    fn push_step(
        &self,
        step: &StepModel,
        depth: usize,
        case_unsuccessful: bool,
        section_title: Option<&str>,
        lines: &mut Vec<String>,
    ) {
        let line = StepLine {
            depth,
            words: &step.words,
            status: step.status,
            duration_in_nanos: step.duration_in_nanos,
            description: step.extended_description.as_deref(),
            is_failed: step.status == StepStatus::Failed,
            section_title,
            case_unsuccessful,
        };
        lines.push(self.converter.convert_step_block(&line));

        for nested in &step.nested_steps {
            match nested.section_title() {
                // Nested section titles stay inside the list as italic items
                Some(title) => {
                    let words = [Word::plain(format!("_{}_", title))];
                    let line = StepLine { depth: depth + 1, case_unsuccessful, ..StepLine::new(&words) };
                    lines.push(self.converter.convert_step_block(&line));
                }
                None => self.push_step(nested, depth + 1, case_unsuccessful, None, lines),
            }
        }
    }
}

/// Titled open block without content
fn empty_section(title: &str) -> String {
    [format!(".{}", title), OPEN_BLOCK_FENCE.to_string(), OPEN_BLOCK_FENCE.to_string()].join(LINE_SEPARATOR)
}

#[cfg(test)]
#[path = "feature_test.rs"]
mod feature_test;
