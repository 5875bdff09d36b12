//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use num_bigint::BigInt;

use fibfactor_cli::presenter::{JsonPresenter, TextPresenter};
use fibfactor_cli::ui::print_error;
use fibfactor_core::exit_codes;
use fibfactor_orchestration::interfaces::ReportPresenter;
use fibfactor_orchestration::narration::compute_and_explain;
use fibfactor_orchestration::self_test::run_self_tests;

use crate::config::{AppConfig, OutputFormat};
use crate::errors::{exit_code_for, exit_code_for_any};
use crate::prompt::read_operands;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibfactor_cli::completion::write_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    let (a, b) = match operands(config) {
        Ok(pair) => pair,
        Err(e) => {
            let code = exit_code_for_any(&e);
            if code == exit_codes::ERROR_GENERIC {
                return Err(e);
            }
            print_error(&e.to_string());
            return Ok(code);
        }
    };

    let presenter: Box<dyn ReportPresenter> = match config.format {
        OutputFormat::Text => Box::new(TextPresenter::new(config.quiet)),
        OutputFormat::Json => Box::new(JsonPresenter::new(config.quiet)),
    };

    status(config, "Running self-tests...");
    let self_tests = run_self_tests(&config.self_test_config());
    presenter.present_self_tests(&self_tests);

    if !self_tests.all_passed() {
        tracing::warn!(failed = self_tests.failed(), "self-tests failed");
        emit(config.format, "\nTests failed. Fix issues before proceeding.");
        return Ok(exit_codes::ERROR_SELF_TEST);
    }
    status(config, "\nAll tests passed! Proceeding to computations:\n");

    match compute_and_explain(&a, &b, &config.driver_options(), presenter.as_ref()) {
        Ok(report) => {
            tracing::info!(
                fib_index = report.fib_index,
                factored = report.factors.factors().is_some(),
                "narration complete"
            );
            Ok(exit_codes::SUCCESS)
        }
        Err(e) => {
            print_error(&e.to_string());
            Ok(exit_code_for(&e))
        }
    }
}

/// Operands from the command line, or prompted for when either is missing.
fn operands(config: &AppConfig) -> Result<(BigInt, BigInt)> {
    if let (Some(a), Some(b)) = (&config.a, &config.b) {
        return Ok((a.clone(), b.clone()));
    }
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    read_operands(&mut input, &mut output)
}

/// Progress line: stdout for text output, stderr for JSON, nothing when quiet.
fn status(config: &AppConfig, text: &str) {
    if !config.quiet {
        emit(config.format, text);
    }
}

/// Human-readable line, kept off stdout when stdout carries JSON.
fn emit(format: OutputFormat, text: &str) {
    // A closed stream has nowhere left to report to.
    let _ = emit_to(format, text, &mut io::stdout(), &mut io::stderr());
}

fn emit_to(
    format: OutputFormat,
    text: &str,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(stdout, "{text}"),
        OutputFormat::Json => writeln!(stderr, "{text}"),
    }
}
