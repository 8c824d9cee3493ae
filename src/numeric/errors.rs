// ============================================================================
// Numeric Errors
// Error types for truncated p-adic arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while building or combining p-adic integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadicError {
    /// Binary operation on operands with different primes
    OperandMismatch { left: u32, right: u32 },
    /// Base cannot carry p-adic digits (below 2, or composite on validation)
    InvalidBase { prime: u32 },
    /// Stored digit outside `[0, prime - 1]`
    InvalidDigit {
        position: usize,
        digit: u32,
        prime: u32,
    },
    /// Fewer stored digits than the declared precision
    IncompleteDigits { len: usize, precision: usize },
}

impl fmt::Display for PadicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PadicError::OperandMismatch { left, right } => write!(
                f,
                "operand mismatch: cannot combine {}-adic and {}-adic integers",
                left, right
            ),
            PadicError::InvalidBase { prime } => {
                write!(f, "invalid base: {} is not a prime", prime)
            },
            PadicError::InvalidDigit {
                position,
                digit,
                prime,
            } => write!(
                f,
                "invalid digit: {} at position {} is out of range for prime {}",
                digit, position, prime
            ),
            PadicError::IncompleteDigits { len, precision } => write!(
                f,
                "incomplete digits: {} stored for precision {}",
                len, precision
            ),
        }
    }
}

impl std::error::Error for PadicError {}

/// Result type alias for p-adic operations
pub type PadicResult<T> = Result<T, PadicError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PadicError::OperandMismatch { left: 5, right: 7 }.to_string(),
            "operand mismatch: cannot combine 5-adic and 7-adic integers"
        );
        assert_eq!(
            PadicError::InvalidBase { prime: 1 }.to_string(),
            "invalid base: 1 is not a prime"
        );
        assert_eq!(
            PadicError::InvalidDigit {
                position: 2,
                digit: 9,
                prime: 5
            }
            .to_string(),
            "invalid digit: 9 at position 2 is out of range for prime 5"
        );
    }

    #[test]
    fn test_error_equality() {
        let a = PadicError::OperandMismatch { left: 5, right: 7 };
        assert_eq!(a, a);
        assert_ne!(a, PadicError::OperandMismatch { left: 7, right: 5 });
        assert_ne!(a, PadicError::InvalidBase { prime: 5 });
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(PadicError::IncompleteDigits {
            len: 3,
            precision: 10,
        });
        assert_eq!(err.to_string(), "incomplete digits: 3 stored for precision 10");
    }
}
