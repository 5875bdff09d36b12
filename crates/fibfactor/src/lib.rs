//! FibFactor library — application logic for the `fibfactor` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod prompt;
