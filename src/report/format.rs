//! Shared formatting helpers for the AsciiDoc converter.
//!
//! Durations and status labels appear in almost every block, so they are
//! kept here in one place.

use crate::types::ExecutionStatus;

const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MILLI: u64 = 1_000_000;

/// Format a duration in nanoseconds as `"<seconds>s <millis>ms"`.
///
/// Both components are truncated, never rounded: 3_000_899 ns is `"0s 3ms"`.
pub fn format_duration(duration_in_nanos: u64) -> String {
    let seconds = duration_in_nanos / NANOS_PER_SECOND;
    let millis = (duration_in_nanos % NANOS_PER_SECOND) / NANOS_PER_MILLI;
    format!("{}s {}ms", seconds, millis)
}

/// Lowercase token used in `tag::`/`end::` markers (e.g. `"successful"`).
pub fn status_tag(status: ExecutionStatus) -> &'static str {
    match status {
        ExecutionStatus::Success => "successful",
        ExecutionStatus::Failed => "failed",
        ExecutionStatus::ScenarioPending | ExecutionStatus::SomeStepsPending => "pending",
    }
}

/// Uppercase label used in visible status badges (e.g. `"SUCCESS"`).
pub fn status_label(status: ExecutionStatus) -> &'static str {
    match status {
        ExecutionStatus::Success => "SUCCESS",
        ExecutionStatus::Failed => "FAILED",
        ExecutionStatus::ScenarioPending | ExecutionStatus::SomeStepsPending => "PENDING",
    }
}

/// Uppercase the first character, leave the rest unchanged.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
