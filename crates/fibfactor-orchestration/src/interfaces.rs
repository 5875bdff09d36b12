//! Orchestration interfaces.

use crate::report::{Report, Step};
use crate::self_test::SelfTestReport;

/// Trait for presenting a narration run to the user.
pub trait ReportPresenter {
    /// Present one step as soon as it is computed.
    fn present_step(&self, step: &Step);

    /// Present the finished report.
    fn present_report(&self, report: &Report);

    /// Present the outcome of the startup self-tests.
    fn present_self_tests(&self, report: &SelfTestReport);
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ReportPresenter for NullPresenter {
    fn present_step(&self, _step: &Step) {}
    fn present_report(&self, _report: &Report) {}
    fn present_self_tests(&self, _report: &SelfTestReport) {}
}
