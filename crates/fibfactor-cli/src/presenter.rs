//! CLI report presenters.

use fibfactor_orchestration::interfaces::ReportPresenter;
use fibfactor_orchestration::report::{Report, Step};
use fibfactor_orchestration::self_test::SelfTestReport;

use crate::output::{format_json, format_self_test_summary, format_step};
use crate::ui::{print_error, print_failure, print_status, print_success};

/// Prints each step as it is computed.
pub struct TextPresenter {
    quiet: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ReportPresenter for TextPresenter {
    fn present_step(&self, step: &Step) {
        println!("{}", format_step(step));
    }

    fn present_report(&self, _report: &Report) {}

    fn present_self_tests(&self, report: &SelfTestReport) {
        if self.quiet {
            return;
        }
        for outcome in &report.outcomes {
            if outcome.passed {
                print_success(outcome.name);
            } else {
                print_failure(&format!("{}: {}", outcome.name, outcome.detail));
            }
        }
        print_status(&format_self_test_summary(report));
    }
}

/// Prints the whole report as one JSON document on stdout. Self-test
/// results go to stderr so stdout stays parseable.
pub struct JsonPresenter {
    quiet: bool,
}

impl JsonPresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ReportPresenter for JsonPresenter {
    fn present_step(&self, _step: &Step) {}

    fn present_report(&self, report: &Report) {
        match format_json(report) {
            Ok(json) => println!("{json}"),
            Err(e) => print_error(&format!("failed to serialize report: {e}")),
        }
    }

    fn present_self_tests(&self, report: &SelfTestReport) {
        if self.quiet {
            return;
        }
        for outcome in report.outcomes.iter().filter(|o| !o.passed) {
            eprintln!("[FAIL] {}: {}", outcome.name, outcome.detail);
        }
        eprintln!("{}", format_self_test_summary(report));
    }
}
