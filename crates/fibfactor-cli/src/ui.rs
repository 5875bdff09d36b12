//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a plain status line.
pub fn print_status(text: &str) {
    println!("{text}");
}

/// Print a passed check.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print a failed check.
pub fn print_failure(text: &str) {
    if is_color_disabled() {
        println!("[FAIL] {text}");
    } else {
        println!("{} {text}", style("[FAIL]").red().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_functions_do_not_panic() {
        print_status("Running self-tests...");
        print_success("fibonacci_10");
        print_failure("prime_factors_55: expected [5, 11], got []");
        print_error("Something went wrong");
    }

    #[test]
    fn print_functions_with_unicode() {
        print_success("F(10) \u{2192} 55");
        print_failure("");
    }
}
