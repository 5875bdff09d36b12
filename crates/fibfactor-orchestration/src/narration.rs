//! Narration driver: arithmetic, Fibonacci lookup and factorization,
//! reported one step at a time.

use std::time::Duration;

use num_bigint::BigInt;
use num_integer::Integer;

use fibfactor_core::{
    fibonacci_index, generator_for, prime_factors, CoreError, Method, DEFAULT_MODULUS,
    DEFAULT_TIME_BUDGET,
};

use crate::interfaces::ReportPresenter;
use crate::report::{format_factor_list, FactorOutcome, Report, Step, StepOutcome};

/// Options for one narration run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverOptions {
    /// The combined value is reduced modulo this to get the Fibonacci index.
    pub modulus: u64,
    /// Fibonacci method.
    pub method: Method,
    /// Wall-clock budget for the factorization step.
    pub time_budget: Duration,
    /// Use this index instead of the reduced one.
    pub index_override: Option<u64>,
}

impl Default for DriverOptions {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
            method: Method::default(),
            time_budget: DEFAULT_TIME_BUDGET,
            index_override: None,
        }
    }
}

/// Run the five-step narration over `a` and `b`.
///
/// Factorization failures are reported as [`FactorOutcome::Failed`] and
/// never returned as errors. The only error is an invalid `modulus`.
pub fn compute_and_explain(
    a: &BigInt,
    b: &BigInt,
    opts: &DriverOptions,
    presenter: &dyn ReportPresenter,
) -> Result<Report, CoreError> {
    if opts.modulus == 0 {
        return Err(CoreError::InvalidArgument(
            "modulus must be greater than zero".into(),
        ));
    }
    tracing::info!(%a, %b, modulus = opts.modulus, method = %opts.method, "starting narration");

    let sum = a + b;
    presenter.present_step(&value_step(1, format!("Adding numbers {a} + {b}"), &sum));

    let product = a * b;
    presenter.present_step(&value_step(
        2,
        format!("Multiplying numbers {a} * {b}"),
        &product,
    ));

    let combined = &sum * &product;
    presenter.present_step(&value_step(
        3,
        "Multiplying added result by multiplied result".into(),
        &combined,
    ));

    let (fib_index, title) = match opts.index_override {
        Some(index) => (index, format!("Computing Fibonacci number at index {index}")),
        None => {
            let reduced = combined.mod_floor(&BigInt::from(opts.modulus));
            let index = fibonacci_index(&reduced)?;
            (
                index,
                format!("Computing Fibonacci number at reduced index {index}"),
            )
        }
    };
    tracing::debug!(fib_index, "resolved Fibonacci index");
    let fib_value = generator_for(opts.method).generate(fib_index);
    presenter.present_step(&value_step(4, title, &fib_value));

    let title = format!("Finding prime factors of Fibonacci number {fib_value}");
    let (factors, outcome) = match prime_factors(&fib_value, opts.time_budget) {
        Ok(factors) => {
            let rendered = format_factor_list(&factors);
            (
                FactorOutcome::Factored { factors },
                StepOutcome::Value(rendered),
            )
        }
        Err(e) => {
            tracing::info!(error = %e, "factorization failed, continuing without factors");
            let message = e.to_string();
            (
                FactorOutcome::Failed {
                    message: message.clone(),
                },
                StepOutcome::Failed(message),
            )
        }
    };
    presenter.present_step(&Step {
        number: 5,
        title,
        outcome,
    });

    let report = Report {
        a: a.clone(),
        b: b.clone(),
        sum,
        product,
        combined,
        fib_index,
        method: opts.method,
        fib_value,
        factors,
    };
    presenter.present_report(&report);
    Ok(report)
}

fn value_step(number: u8, title: String, value: &impl ToString) -> Step {
    Step {
        number,
        title,
        outcome: StepOutcome::Value(value.to_string()),
    }
}
