//! Interactive operand prompts.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use num_bigint::BigInt;

use fibfactor_core::CoreError;

/// Parse a decimal integer typed by the user.
pub fn parse_integer(text: &str) -> Result<BigInt, CoreError> {
    let trimmed = text.trim();
    trimmed
        .parse::<BigInt>()
        .map_err(|_| CoreError::InvalidArgument(format!("not an integer: {trimmed:?}")))
}

/// Print `label` and read one integer from `input`.
pub fn prompt_integer(input: &mut impl BufRead, output: &mut impl Write, label: &str) -> Result<BigInt> {
    write!(output, "{label}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Err(CoreError::InvalidArgument("unexpected end of input".into()).into());
    }
    Ok(parse_integer(&line)?)
}

/// Prompt for both operands.
pub fn read_operands(input: &mut impl BufRead, output: &mut impl Write) -> Result<(BigInt, BigInt)> {
    let a = prompt_integer(input, output, "Enter first number: ")?;
    let b = prompt_integer(input, output, "Enter second number: ")?;
    Ok((a, b))
}
