//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract: callers that spawn `predict`
//! read the prediction from stdout only when the exit code is 0.
//!
//! # Exit Codes
//!
//! | Code | Description                                                    |
//! |------|----------------------------------------------------------------|
//! | 0    | Success, prediction printed to stdout                          |
//! | 1    | Any failure: usage, unknown product, invalid date, missing or  |
//! |      | malformed artifact, bad settings, inference error              |
//!
//! Failures never write to stdout.

/// Success - prediction printed.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - every failure path.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - wrong argument count, unparsable year, bad option.
/// Shares the general failure code; callers only distinguish success from failure.
pub const EXIT_USAGE: u8 = EXIT_ERROR;
