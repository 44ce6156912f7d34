//! Statistics generation for report models.
//!
//! This module aggregates scenarios, cases and steps of a feature into
//! `ReportStatistics`, and features into report totals.

use super::types::FeatureStatistics;
use crate::types::{ExecutionStatus, ReportModel, ReportStatistics, StepModel};

/// Count a step and all of its nested steps
fn count_steps(step: &StepModel) -> u32 {
    step.nested_steps.iter().map(count_steps).fold(1, u32::saturating_add)
}

/// Calculate statistics for a single feature.
///
/// Each report model is one class. Scenarios are classified by their
/// execution status; both pending statuses count as pending.
pub fn statistics_for(model: &ReportModel) -> ReportStatistics {
    let mut statistics = ReportStatistics { num_classes: 1, ..Default::default() };

    for scenario in &model.scenarios {
        statistics.num_scenarios += 1;
        statistics.duration_in_nanos = statistics.duration_in_nanos.saturating_add(scenario.duration_in_nanos);

        match scenario.execution_status {
            ExecutionStatus::Success => statistics.num_successful_scenarios += 1,
            ExecutionStatus::Failed => statistics.num_failed_scenarios += 1,
            ExecutionStatus::ScenarioPending | ExecutionStatus::SomeStepsPending => {
                statistics.num_pending_scenarios += 1
            }
        }

        for case in &scenario.scenario_cases {
            statistics.num_cases += 1;
            if case.status == ExecutionStatus::Failed {
                statistics.num_failed_cases += 1;
            }
            let steps = case.steps.iter().map(count_steps).fold(0, u32::saturating_add);
            statistics.num_steps = statistics.num_steps.saturating_add(steps);
        }
    }

    statistics
}

/// Statistics of every feature, keyed by display name, in model order
pub fn feature_statistics(models: &[ReportModel]) -> Vec<FeatureStatistics> {
    models.iter().map(|model| (model.display_name().to_string(), statistics_for(model))).collect()
}

/// Sum of all feature statistics
pub fn total_statistics(features: &[FeatureStatistics]) -> ReportStatistics {
    features.iter().map(|(_, statistics)| statistics).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScenarioCaseModel, ScenarioModel, StepStatus, Word};

    fn step(nested: Vec<StepModel>) -> StepModel {
        StepModel {
            words: vec![Word::intro("given")],
            nested_steps: nested,
            status: StepStatus::Passed,
            duration_in_nanos: 0,
            extended_description: None,
            is_section_title: false,
        }
    }

    fn case(nr: u32, status: ExecutionStatus, steps: Vec<StepModel>) -> ScenarioCaseModel {
        ScenarioCaseModel {
            case_nr: nr,
            steps,
            explicit_arguments: vec![],
            derived_arguments: vec![],
            status,
            error_message: None,
            stack_trace: None,
            duration_in_nanos: 0,
            description: None,
        }
    }

    fn scenario(status: ExecutionStatus, duration: u64, cases: Vec<ScenarioCaseModel>) -> ScenarioModel {
        ScenarioModel {
            class_name: "org.example.FeatureTest".to_string(),
            test_method_name: "scenario".to_string(),
            description: "scenario".to_string(),
            extended_description: None,
            tag_ids: vec![],
            explicit_parameters: vec![],
            derived_parameters: vec![],
            cases_as_table: false,
            scenario_cases: cases,
            duration_in_nanos: duration,
            execution_status: status,
        }
    }

    fn model(name: &str, scenarios: Vec<ScenarioModel>) -> ReportModel {
        ReportModel {
            class_name: format!("org.example.{}", name),
            name: None,
            description: None,
            tag_map: Default::default(),
            scenarios,
        }
    }

    #[test]
    fn test_statistics_for_feature() {
        let feature = model(
            "CoffeeTest",
            vec![
                scenario(
                    ExecutionStatus::Failed,
                    1_000_000,
                    vec![
                        case(1, ExecutionStatus::Success, vec![step(vec![]), step(vec![step(vec![])])]),
                        case(2, ExecutionStatus::Failed, vec![step(vec![])]),
                    ],
                ),
                scenario(
                    ExecutionStatus::Success,
                    2_000_000,
                    vec![case(1, ExecutionStatus::Success, vec![step(vec![])])],
                ),
                scenario(
                    ExecutionStatus::SomeStepsPending,
                    0,
                    vec![case(1, ExecutionStatus::SomeStepsPending, vec![])],
                ),
            ],
        );

        let statistics = statistics_for(&feature);

        assert_eq!(statistics.num_classes, 1);
        assert_eq!(statistics.num_scenarios, 3);
        assert_eq!(statistics.num_successful_scenarios, 1);
        assert_eq!(statistics.num_failed_scenarios, 1);
        assert_eq!(statistics.num_pending_scenarios, 1);
        assert_eq!(statistics.num_cases, 4);
        assert_eq!(statistics.num_failed_cases, 1);
        assert_eq!(statistics.num_steps, 5);
        assert_eq!(statistics.duration_in_nanos, 3_000_000);
    }

    #[test]
    fn test_feature_and_total_statistics() {
        let models = vec![
            model("One", vec![scenario(ExecutionStatus::Success, 5, vec![])]),
            model("Two", vec![scenario(ExecutionStatus::Failed, 7, vec![])]),
        ];

        let features = feature_statistics(&models);
        assert_eq!(features[0].0, "One");
        assert_eq!(features[1].0, "Two");

        let total = total_statistics(&features);
        assert_eq!(total.num_classes, 2);
        assert_eq!(total.num_successful_scenarios, 1);
        assert_eq!(total.num_failed_scenarios, 1);
        assert_eq!(total.duration_in_nanos, 12);
    }

    #[test]
    fn test_durations_saturate() {
        let feature = model(
            "SlowTest",
            vec![scenario(ExecutionStatus::Success, u64::MAX, vec![]), scenario(ExecutionStatus::Success, 10, vec![])],
        );

        assert_eq!(statistics_for(&feature).duration_in_nanos, u64::MAX);
    }

    #[test]
    fn test_empty_feature_counts_its_class() {
        let statistics = statistics_for(&model("Empty", vec![]));
        assert_eq!(statistics, ReportStatistics { num_classes: 1, ..Default::default() });
    }
}
