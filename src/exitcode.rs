//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Execution failure (single sentinel, no per-error codes)
pub const FAILURE: i32 = 1;
