// ============================================================================
// p-adic Configuration
// Prime and precision pair used to build compatible p-adic integers
// ============================================================================

use crate::numeric::{is_prime, PadicError, PadicInteger, PadicResult};

/// Ring parameters shared by a family of p-adic integers.
///
/// Values built from the same configuration always combine without an
/// `OperandMismatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PadicConfig {
    /// The prime base
    pub prime: u32,

    /// Number of tracked digits
    pub precision: usize,
}

impl PadicConfig {
    /// Create a new configuration with required parameters
    pub fn new(prime: u32, precision: usize) -> Self {
        Self { prime, precision }
    }

    /// Builder method: Set the prime base
    pub fn with_prime(mut self, prime: u32) -> Self {
        self.prime = prime;
        self
    }

    /// Builder method: Set the number of tracked digits
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Validate the configuration.
    ///
    /// Stricter than the constructors, which accept any base of at least 2.
    pub fn validate(&self) -> PadicResult<()> {
        if !is_prime(self.prime) {
            return Err(PadicError::InvalidBase { prime: self.prime });
        }
        Ok(())
    }

    /// Modulus `prime^precision` all additive results are reduced by.
    pub fn modulus(&self) -> num_bigint::BigUint {
        num_traits::pow(num_bigint::BigUint::from(self.prime), self.precision)
    }

    // ========================================================================
    // Factory Methods
    // ========================================================================

    /// Expand an integer under this configuration.
    pub fn integer(&self, value: impl Into<i128>) -> PadicResult<PadicInteger> {
        PadicInteger::from_integer(value, self.prime, self.precision)
    }

    /// Build from explicit little-endian digits under this configuration.
    pub fn digits<I>(&self, digits: I) -> PadicResult<PadicInteger>
    where
        I: IntoIterator<Item = u32>,
    {
        PadicInteger::from_digits(digits, self.prime, self.precision)
    }

    pub fn zero(&self) -> PadicResult<PadicInteger> {
        PadicInteger::zero(self.prime, self.precision)
    }

    pub fn one(&self) -> PadicResult<PadicInteger> {
        PadicInteger::one(self.prime, self.precision)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl PadicConfig {
    /// 2-adic integers
    pub fn dyadic(precision: usize) -> Self {
        Self::new(2, precision)
    }

    /// 3-adic integers
    pub fn triadic(precision: usize) -> Self {
        Self::new(3, precision)
    }

    /// 5-adic integers
    pub fn quinary(precision: usize) -> Self {
        Self::new(5, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn test_config_creation() {
        let config = PadicConfig::new(5, 10);
        assert_eq!(config.prime, 5);
        assert_eq!(config.precision, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PadicConfig::dyadic(8).with_precision(16).with_prime(7);
        assert_eq!(config, PadicConfig::new(7, 16));
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            PadicConfig::new(1, 4).validate(),
            Err(PadicError::InvalidBase { prime: 1 })
        );
        assert_eq!(
            PadicConfig::new(9, 4).validate(),
            Err(PadicError::InvalidBase { prime: 9 })
        );
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(PadicConfig::dyadic(4).prime, 2);
        assert_eq!(PadicConfig::triadic(4).prime, 3);
        assert_eq!(PadicConfig::quinary(4).prime, 5);
        assert_eq!(PadicConfig::quinary(3).modulus(), BigUint::from(125u32));
        assert_eq!(
            PadicConfig::dyadic(100).modulus(),
            BigUint::from(1u8) << 100usize
        );
    }

    #[test]
    fn test_factory_methods() {
        let config = PadicConfig::triadic(4);

        let x = config.integer(10).unwrap();
        assert_eq!(x.digits(), vec![1, 0, 1, 0]);
        assert_eq!(x.prime(), 3);
        assert_eq!(x.precision(), 4);

        let y = config.digits([2, 2]).unwrap();
        assert_eq!(y.len(), 2);

        assert!(config.zero().unwrap().is_zero());
        assert_eq!(config.one().unwrap().digits(), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_factory_values_combine() {
        let config = PadicConfig::dyadic(8);
        let a = config.integer(200).unwrap();
        let b = config.integer(100).unwrap();
        // 300 mod 256
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.to_biguint(), BigUint::from(44u32));
    }
}
