// ============================================================================
// p-adic Integer Library
// Truncated p-adic integers with digit-wise ring arithmetic
// ============================================================================

//! # p-adic Integers
//!
//! Elements of the p-adic integers truncated to a fixed number of base-p
//! digits, with arithmetic carried out modulo `p^precision`.
//!
//! ## Features
//!
//! - **Little-endian digit vectors** stored at the narrowest unsigned width
//!   that holds `p - 1`
//! - **Addition and subtraction** that drop the final carry or borrow
//! - **Full-width multiplication** keeping `a.precision + b.precision` digits
//! - **Value semantics**: every operation returns a fresh integer
//!
//! ## Example
//!
//! ```rust
//! use padic_integer::prelude::*;
//!
//! let config = PadicConfig::quinary(10);
//! let a = config.integer(123)?;
//! let b = config.integer(456)?;
//!
//! println!("a + b = {}", (&a + &b)?);
//! println!("a - b = {}", (&a - &b)?);
//! println!("a * b = {}", (&a * &b)?);
//!
//! assert_eq!((&b - &a)?.digits(), vec![3, 1, 3, 2, 0, 0, 0, 0, 0, 0]);
//! # Ok::<(), PadicError>(())
//! ```

pub mod config;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::PadicConfig;
    pub use crate::numeric::{DigitWidth, PadicError, PadicInteger, PadicResult};
}
