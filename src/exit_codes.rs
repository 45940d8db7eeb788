//! Exit code constants for the emailgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad input, nothing generated)
//! - 2: Generation failure (format requires a missing name component)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: unusable input, interactive read failure, or no result.
pub const USER_ERROR: i32 = 1;

/// Generation failure: the format demands a name component that does not exist.
pub const GENERATION_FAILURE: i32 = 2;
