//! Error handling and exit codes.

use fibfactor_core::constants::exit_codes;
use fibfactor_core::CoreError;

/// Map a library error to the process exit code.
pub fn exit_code_for(err: &CoreError) -> i32 {
    match err {
        CoreError::TimeoutExceeded { .. } => exit_codes::ERROR_TIMEOUT,
        CoreError::InvalidArgument(_) => exit_codes::ERROR_INVALID_ARGUMENT,
    }
}

/// Exit code for an application error, looking through `anyhow` context
/// for a library error.
pub fn exit_code_for_any(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CoreError>()
        .map_or(exit_codes::ERROR_GENERIC, exit_code_for)
}
