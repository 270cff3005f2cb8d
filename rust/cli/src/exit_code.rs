//! Process exit codes.

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, bad configuration, I/O, engine rejection or
/// failed statistics validation.
pub const ERROR: i32 = 2;

/// The run stopped before finishing (exit code of a Ctrl+C'd process).
pub const INTERRUPTED: i32 = 130;
