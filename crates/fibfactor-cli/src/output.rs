//! Report text formatting.

use std::time::Duration;

use fibfactor_orchestration::report::{Report, Step, StepOutcome};
use fibfactor_orchestration::self_test::SelfTestReport;

/// Render one step as printed on the console, including the trailing
/// blank line.
#[must_use]
pub fn format_step(step: &Step) -> String {
    let result = match &step.outcome {
        StepOutcome::Value(value) => format!("Result: {value}"),
        StepOutcome::Failed(message) => format!("Failed gracefully: {message}"),
    };
    format!("Step {}: {}\n{result}\n", step.number, step.title)
}

/// Render the report as pretty-printed JSON.
pub fn format_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// One-line summary of a self-test run.
#[must_use]
pub fn format_self_test_summary(report: &SelfTestReport) -> String {
    let total = report.outcomes.len();
    let noun = if total == 1 { "test" } else { "tests" };
    if report.all_passed() {
        format!("Ran {total} {noun} in {}: OK", format_elapsed(report.duration))
    } else {
        format!(
            "Ran {total} {noun} in {}: FAILED (failures={})",
            format_elapsed(report.duration),
            report.failed()
        )
    }
}

/// Elapsed time as a test-runner total: seconds to the millisecond.
#[must_use]
pub fn format_elapsed(d: Duration) -> String {
    format!("{}.{:03}s", d.as_secs(), d.subsec_millis())
}
