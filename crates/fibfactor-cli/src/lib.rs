//! # fibfactor-cli
//!
//! Console and JSON presentation of narration runs, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{JsonPresenter, TextPresenter};
