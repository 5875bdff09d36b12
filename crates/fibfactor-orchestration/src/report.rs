//! Report and step types produced by the narration driver.

use std::fmt::Display;

use num_bigint::{BigInt, BigUint};
use serde::{Serialize, Serializer};

use fibfactor_core::Method;

/// One narrated step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Position in the narration, starting at 1.
    pub number: u8,
    /// What the step does, e.g. "Adding numbers 3 + 4".
    pub title: String,
    /// The step's result.
    pub outcome: StepOutcome,
}

/// Result line of a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step produced a value, already rendered.
    Value(String),
    /// The step failed and the narration carried on without it.
    Failed(String),
}

/// Outcome of the factorization step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FactorOutcome {
    /// Factorization finished within its budget.
    Factored {
        #[serde(serialize_with = "decimal_seq")]
        factors: Vec<BigUint>,
    },
    /// Factorization was abandoned.
    Failed { message: String },
}

impl FactorOutcome {
    /// The factors, if factorization completed.
    #[must_use]
    pub fn factors(&self) -> Option<&[BigUint]> {
        match self {
            Self::Factored { factors } => Some(factors),
            Self::Failed { .. } => None,
        }
    }
}

/// Every intermediate value of one narration run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(serialize_with = "decimal")]
    pub a: BigInt,
    #[serde(serialize_with = "decimal")]
    pub b: BigInt,
    #[serde(serialize_with = "decimal")]
    pub sum: BigInt,
    #[serde(serialize_with = "decimal")]
    pub product: BigInt,
    #[serde(serialize_with = "decimal")]
    pub combined: BigInt,
    pub fib_index: u64,
    pub method: Method,
    #[serde(serialize_with = "decimal")]
    pub fib_value: BigUint,
    pub factors: FactorOutcome,
}

/// Render factors the way the console report shows them: `[2, 2, 3]`.
#[must_use]
pub fn format_factor_list(factors: &[BigUint]) -> String {
    let items: Vec<String> = factors.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn decimal<T: Display, S: Serializer>(value: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

#[allow(clippy::ptr_arg)]
fn decimal_seq<S: Serializer>(values: &Vec<BigUint>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(ToString::to_string))
}
