// ============================================================================
// Numeric Module
// Truncated p-adic integers and their digit storage
// ============================================================================
//
// This module provides:
// - PadicInteger: base-p digit vector with arithmetic modulo p^precision
// - DigitWidth: minimal unsigned width chosen from the prime
// - PadicError: Error types for p-adic operations
//
// Design principles:
// - Value semantics: operations never mutate their operands
// - All fallible operations return Result (no panics)
// - Final carries and borrows are discarded, never reported

mod digits;
mod errors;
mod padic;

pub(crate) use padic::is_prime;

pub use digits::{DigitWidth, Digits};
pub use errors::{PadicError, PadicResult};
pub use padic::PadicInteger;
