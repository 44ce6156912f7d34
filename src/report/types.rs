//! Report type definitions for the rendering model.
//!
//! This module defines the inputs of converter operations that do not map
//! one-to-one onto a single model entity.

use crate::types::{ReportStatistics, StepStatus, Word};

/// Everything needed to render one step line.
///
/// Steps are rendered as list items; `depth` is the nesting level of the
/// step (0 for top-level steps, 1 for their nested steps and so on).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepLine<'a> {
    pub depth: usize,
    pub words: &'a [Word],
    pub status: StepStatus,
    pub duration_in_nanos: u64,
    pub description: Option<&'a str>,
    /// Append a status badge to the step line
    pub is_failed: bool,
    /// Title of the section this step opens, if any
    pub section_title: Option<&'a str>,
    /// Reserved for section-level status output; does not change the step line
    pub case_unsuccessful: bool,
}

impl<'a> StepLine<'a> {
    /// A passed top-level step with no extras
    pub fn new(words: &'a [Word]) -> Self {
        StepLine {
            depth: 0,
            words,
            status: StepStatus::Passed,
            duration_in_nanos: 0,
            description: None,
            is_failed: false,
            section_title: None,
            case_unsuccessful: false,
        }
    }
}

/// Statistics of one feature, keyed by its display name.
///
/// The statistics table keeps the order of a slice of these.
pub type FeatureStatistics = (String, ReportStatistics);

/// A feature document as seen from the overview pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePage {
    pub name: String,
    /// File name inside the features directory
    pub file_name: String,
    pub has_failed: bool,
    pub has_pending: bool,
}
