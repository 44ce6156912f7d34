/// Tests for feature document assembly

#[cfg(test)]
mod tests {
    use crate::report::blocks::AsciiDocBlockConverter;
    use crate::report::feature::FeatureWriter;
    use crate::report::stats::statistics_for;
    use crate::types::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn step(words: Vec<Word>, status: StepStatus) -> StepModel {
        StepModel {
            words,
            nested_steps: vec![],
            status,
            duration_in_nanos: 0,
            extended_description: None,
            is_section_title: false,
        }
    }

    fn section(title: &str) -> StepModel {
        StepModel { is_section_title: true, ..step(vec![Word::plain(title)], StepStatus::Passed) }
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

    fn scenario(name: &str, status: ExecutionStatus, cases: Vec<ScenarioCaseModel>) -> ScenarioModel {
        ScenarioModel {
            class_name: "org.example.CoffeeMachineTest".to_string(),
            test_method_name: name.replace(' ', "_"),
            description: name.to_string(),
            extended_description: None,
            tag_ids: vec![],
            explicit_parameters: vec![],
            derived_parameters: vec![],
            cases_as_table: false,
            scenario_cases: cases,
            duration_in_nanos: 0,
            execution_status: status,
        }
    }

    fn feature(scenarios: Vec<ScenarioModel>) -> ReportModel {
        ReportModel {
            class_name: "org.example.CoffeeMachineTest".to_string(),
            name: Some("Coffee machine".to_string()),
            description: None,
            tag_map: BTreeMap::new(),
            scenarios,
        }
    }

    fn write(model: &ReportModel) -> String {
        let writer: FeatureWriter = FeatureWriter::default();
        writer.write(model, &statistics_for(model)).unwrap()
    }

    #[test]
    fn test_single_case_scenario() {
        let mut serves = scenario(
            "serves coffee",
            ExecutionStatus::Success,
            vec![case(
                1,
                ExecutionStatus::Success,
                vec![
                    step(vec![Word::intro("given"), Word::plain("a coffee machine")], StepStatus::Passed),
                    step(vec![Word::intro("then"), Word::plain("coffee is served")], StepStatus::Passed),
                ],
            )],
        );
        serves.tag_ids = vec!["story".to_string()];
        let mut model = feature(vec![serves]);
        let story = Tag { tag_type: "Story".to_string(), value: Some("COFFEE-1".to_string()) };
        model.tag_map.insert("story".to_string(), story);

        assert_eq!(
            write(&model),
            [
                "=== Coffee machine",
                "",
                "1 Successful, 0 Failed, 0 Pending, 1 Total (0s 0ms)",
                "",
                "// tag::scenario-successful[]",
                "",
                "==== Serves coffee",
                "",
                "[SUCCESS] (0s 0ms)",
                "",
                "Tags: _COFFEE-1_",
                "",
                "* [.jg-introWord]*Given* a coffee machine",
                "* [.jg-introWord]*Then* coffee is served",
                "",
                "// end::scenario-successful[]",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_failed_case_gets_footer_and_badge() {
        let mut failing = case(
            1,
            ExecutionStatus::Failed,
            vec![step(vec![Word::intro("when"), Word::plain("coffee is ordered")], StepStatus::Failed)],
        );
        failing.error_message = Some("No coffee left".to_string());
        let model = feature(vec![scenario("runs dry", ExecutionStatus::Failed, vec![failing])]);

        let document = write(&model);

        assert!(document.contains("* [.jg-introWord]*When* coffee is ordered [.right]#[FAILED] (0s 0ms)#"));
        assert!(document.contains(".No coffee left\n[.jg-exception%collapsible]\n====\nNo stacktrace provided\n===="));
        assert!(document.ends_with("// end::scenario-failed[]"));
    }

    #[test]
    fn test_multiple_cases_get_case_headers() {
        let mut first = case(1, ExecutionStatus::Success, vec![step(vec![Word::intro("given")], StepStatus::Passed)]);
        first.explicit_arguments = vec!["1".to_string()];
        let mut second = case(2, ExecutionStatus::Success, vec![step(vec![Word::intro("given")], StepStatus::Passed)]);
        second.explicit_arguments = vec!["2".to_string()];

        let mut parameterized = scenario("counts coffees", ExecutionStatus::Success, vec![first, second]);
        parameterized.explicit_parameters = vec!["coffees".to_string()];

        let document = write(&feature(vec![parameterized]));

        assert!(document.contains("===== Case 1\n\n====\ncoffees = 1\n===="));
        assert!(document.contains("===== Case 2\n\n====\ncoffees = 2\n===="));
    }

    #[test]
    fn test_cases_as_table() {
        let steps = vec![step(
            vec![
                Word::intro("given"),
                Word::argument("coffees", "1", "1").with_parameter_name("coffees"),
                Word::plain("coffees"),
            ],
            StepStatus::Passed,
        )];
        let mut first = case(1, ExecutionStatus::Success, steps.clone());
        first.derived_arguments = vec!["1".to_string()];
        let mut second = case(2, ExecutionStatus::Failed, steps);
        second.derived_arguments = vec!["2".to_string()];

        let mut table_scenario = scenario("counts coffees", ExecutionStatus::Failed, vec![first, second]);
        table_scenario.cases_as_table = true;
        table_scenario.derived_parameters = vec!["coffees".to_string()];

        let document = write(&feature(vec![table_scenario]));

        assert_eq!(document.matches("[.jg-argument]*<coffees>*").count(), 1);
        assert!(document.contains(".Cases\n[.jg-casesTable%header,cols=\"h,1,>1\"]"));
        assert!(document.contains("| 2 | 2 | FAILED"));
        assert!(!document.contains("===== Case"));
    }

    #[test]
    fn test_sections_split_step_lists() {
        let steps = vec![
            section("Preparation"),
            step(vec![Word::intro("given"), Word::plain("water")], StepStatus::Passed),
            section("Brewing"),
            step(vec![Word::intro("when"), Word::plain("brewing")], StepStatus::Passed),
            step(vec![Word::intro("then"), Word::plain("coffee")], StepStatus::Passed),
        ];
        let brews = scenario("brews", ExecutionStatus::Success, vec![case(1, ExecutionStatus::Success, steps)]);
        let model = feature(vec![brews]);

        let document = write(&model);

        assert!(document.contains(".Preparation\n* [.jg-introWord]*Given* water\n\n.Brewing\n"));
        assert!(document.contains("* [.jg-introWord]*When* brewing\n* [.jg-introWord]*Then* coffee"));
    }

    #[test]
    fn test_nested_steps_are_indented() {
        let mut outer = step(vec![Word::intro("given"), Word::plain("a barista")], StepStatus::Passed);
        outer.nested_steps = vec![step(vec![Word::intro("and"), Word::plain("an apron")], StepStatus::Passed)];
        let nests = scenario("nests", ExecutionStatus::Success, vec![case(1, ExecutionStatus::Success, vec![outer])]);
        let model = feature(vec![nests]);

        assert!(write(&model).contains("* [.jg-introWord]*Given* a barista\n** [.jg-introWord]*And* an apron"));
    }

    #[test]
    fn test_trailing_section_title_is_kept() {
        let steps = vec![
            step(vec![Word::intro("given"), Word::plain("water")], StepStatus::Passed),
            section("Cleanup"),
        ];
        let cleans = scenario("cleans up", ExecutionStatus::Success, vec![case(1, ExecutionStatus::Success, steps)]);

        let document = write(&feature(vec![cleans]));

        assert!(
            document.contains("* [.jg-introWord]*Given* water\n\n.Cleanup\n--\n--\n\n// end::scenario-successful[]")
        );
    }

    #[test]
    fn test_consecutive_section_titles_are_kept() {
        let steps = vec![
            section("Unused"),
            section("Brewing"),
            step(vec![Word::intro("when"), Word::plain("brewing")], StepStatus::Passed),
        ];
        let brews = scenario("brews", ExecutionStatus::Success, vec![case(1, ExecutionStatus::Success, steps)]);

        let document = write(&feature(vec![brews]));

        assert!(document.contains(".Unused\n--\n--\n\n.Brewing\n* [.jg-introWord]*When* brewing"));
    }

    #[test]
    fn test_nested_section_title_is_an_italic_item() {
        let mut outer = step(vec![Word::intro("given"), Word::plain("a barista")], StepStatus::Passed);
        outer.nested_steps = vec![
            section("Refill"),
            step(vec![Word::intro("and"), Word::plain("fresh beans")], StepStatus::Failed),
        ];
        let refills =
            scenario("refills", ExecutionStatus::Failed, vec![case(1, ExecutionStatus::Failed, vec![outer])]);

        let document = write(&feature(vec![refills]));

        assert!(document.contains(
            "* [.jg-introWord]*Given* a barista\n** _Refill_\n** [.jg-introWord]*And* fresh beans [.right]#[FAILED]"
        ));
        assert!(!document.contains(".Refill"));
    }

    #[test]
    fn test_exclude_empty_scenarios() {
        let model = feature(vec![
            scenario(
                "has no steps",
                ExecutionStatus::ScenarioPending,
                vec![case(1, ExecutionStatus::ScenarioPending, vec![])],
            ),
            scenario(
                "has steps",
                ExecutionStatus::Success,
                vec![case(1, ExecutionStatus::Success, vec![step(vec![Word::intro("given")], StepStatus::Passed)])],
            ),
        ]);

        let writer = FeatureWriter::new(AsciiDocBlockConverter::new()).exclude_empty_scenarios(true);
        let document = writer.write(&model, &statistics_for(&model)).unwrap();

        assert!(!document.contains("Has no steps"));
        assert!(document.contains("==== Has steps"));
        assert!(write(&model).contains("==== Has no steps"));
    }

    #[test]
    fn test_misaligned_case_table_is_an_error() {
        let mut table_scenario = scenario(
            "broken table",
            ExecutionStatus::Success,
            vec![case(1, ExecutionStatus::Success, vec![]), case(2, ExecutionStatus::Success, vec![])],
        );
        table_scenario.cases_as_table = true;
        table_scenario.derived_parameters = vec!["missing".to_string()];
        let model = feature(vec![table_scenario]);

        let writer: FeatureWriter = FeatureWriter::default();
        assert!(writer.write(&model, &statistics_for(&model)).is_err());
    }
}
