//! # fibfactor-orchestration
//!
//! Narration driver, report types and the startup self-test harness.

pub mod interfaces;
pub mod narration;
pub mod report;

pub use interfaces::{NullPresenter, ReportPresenter};
pub use narration::{compute_and_explain, DriverOptions};
pub use report::{FactorOutcome, Report, Step, StepOutcome};
pub use self_test::{run_self_tests, SelfTestConfig, SelfTestReport};
