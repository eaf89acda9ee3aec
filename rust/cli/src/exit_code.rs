//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// Any argument, input, or configuration failure.
pub const ERROR: i32 = 1;
