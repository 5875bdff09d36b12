//! Application configuration from CLI flags and environment.

use std::time::Duration;

use clap::{Parser, ValueEnum};
use num_bigint::BigInt;

use fibfactor_core::{Method, DEFAULT_MODULUS};
use fibfactor_orchestration::{DriverOptions, SelfTestConfig};

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Step-by-step narration.
    Text,
    /// One JSON document.
    Json,
}

/// FibFactor — add and multiply two integers, take a Fibonacci number
/// at the reduced index and factor it within a time budget.
#[derive(Parser, Debug)]
#[command(name = "fibfactor", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// First number. Prompted for when either number is missing.
    pub a: Option<BigInt>,

    /// Second number.
    pub b: Option<BigInt>,

    /// Modulus reducing the combined value to a Fibonacci index.
    #[arg(long, default_value_t = DEFAULT_MODULUS, env = "FIBFACTOR_MODULUS")]
    pub modulus: u64,

    /// Use this Fibonacci index instead of the reduced one.
    #[arg(long)]
    pub index: Option<u64>,

    /// Fibonacci method: iterative or memoized.
    #[arg(long, default_value = "iterative")]
    pub method: Method,

    /// Factorization time budget (e.g., "2s", "500ms", "1m").
    #[arg(long, default_value = "2s", env = "FIBFACTOR_BUDGET", value_parser = parse_duration)]
    pub budget: Duration,

    /// Time budget for the self-test that expects a timeout.
    #[arg(long, default_value = "1s", value_parser = parse_duration)]
    pub self_test_budget: Duration,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Quiet mode (no self-test narration).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Options for the narration driver.
    #[must_use]
    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            modulus: self.modulus,
            method: self.method,
            time_budget: self.budget,
            index_override: self.index,
        }
    }

    /// Options for the startup self-tests.
    #[must_use]
    pub fn self_test_config(&self) -> SelfTestConfig {
        SelfTestConfig {
            timeout_budget: self.self_test_budget,
        }
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms" or bare seconds.
pub fn parse_duration(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let invalid = || format!("invalid duration: {s:?}");
    let number = |digits: &str| digits.trim().parse::<u64>().map_err(|_| invalid());
    let scaled = |digits: &str, unit: u64| {
        number(digits)?
            .checked_mul(unit)
            .map(Duration::from_secs)
            .ok_or_else(invalid)
    };
    if let Some(ms) = s.strip_suffix("ms") {
        Ok(Duration::from_millis(number(ms)?))
    } else if let Some(secs) = s.strip_suffix('s') {
        Ok(Duration::from_secs(number(secs)?))
    } else if let Some(mins) = s.strip_suffix('m') {
        scaled(mins, 60)
    } else if let Some(hours) = s.strip_suffix('h') {
        scaled(hours, 3600)
    } else {
        Ok(Duration::from_secs(number(s)?))
    }
}
