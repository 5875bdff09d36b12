//! FibFactor — narrated arithmetic, Fibonacci lookup and prime factorization.

use anyhow::Result;
use fibfactor_core::exit_codes;
use fibfactor_lib::{app, config};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    let code = app::run(&config)?;
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}
