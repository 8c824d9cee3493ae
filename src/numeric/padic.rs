// ============================================================================
// Truncated p-adic Integer
// Fixed-precision digit vectors with arithmetic modulo p^precision
// ============================================================================

use super::digits::{DigitBuffer, DigitWidth, Digits};
use super::errors::{PadicError, PadicResult};
use num_bigint::{BigInt, BigUint};
use num_traits::{pow, Zero};
use smallvec::SmallVec;
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A p-adic integer truncated to a fixed number of base-`prime` digits.
///
/// Digits are stored little-endian (index 0 is least significant) at the
/// narrowest width that holds them. Values are immutable: every arithmetic
/// operation returns a fresh instance.
///
/// Addition and subtraction keep `max(a.precision, b.precision)` digits and
/// silently drop the final carry or borrow, which makes them arithmetic
/// modulo `prime^precision`. Multiplication keeps the full
/// `a.precision + b.precision` digit product.
///
/// # Example
/// ```
/// use padic_integer::numeric::PadicInteger;
///
/// let a = PadicInteger::from_integer(123, 5, 10)?;
/// let b = PadicInteger::from_integer(456, 5, 10)?;
///
/// let sum = a.checked_add(&b)?;
/// assert_eq!(sum.to_string(), "(...0.0.0.0.0.0.4.3.0.4)");
///
/// let product = (&a * &b)?;
/// assert_eq!(product.precision(), 20);
/// # Ok::<(), padic_integer::numeric::PadicError>(())
/// ```
#[derive(Clone)]
pub struct PadicInteger {
    prime: u32,
    precision: usize,
    digits: DigitBuffer,
}

// Scratch space for digits before they are narrowed into a `DigitBuffer`.
type Scratch = SmallVec<[u32; 32]>;

impl PadicInteger {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Expand an integer into `precision` base-`prime` digits.
    ///
    /// Negative values use Euclidean division, so the digits are those of
    /// `value mod prime^precision` (the truncated p-adic complement).
    ///
    /// # Errors
    /// Returns `InvalidBase` if `prime < 2`.
    pub fn from_integer(value: impl Into<i128>, prime: u32, precision: usize) -> PadicResult<Self> {
        check_base(prime)?;

        let base = i128::from(prime);
        let mut n = value.into();
        let mut digits = Scratch::with_capacity(precision);
        for _ in 0..precision {
            // rem_euclid is in [0, prime), so the cast is lossless.
            digits.push(n.rem_euclid(base) as u32);
            n = n.div_euclid(base);
        }

        Ok(Self::from_scratch(prime, precision, &digits))
    }

    /// Expand an arbitrarily large non-negative integer.
    ///
    /// # Errors
    /// Returns `InvalidBase` if `prime < 2`.
    pub fn from_biguint(value: &BigUint, prime: u32, precision: usize) -> PadicResult<Self> {
        check_base(prime)?;

        let base = BigUint::from(prime);
        let mut n = value.clone();
        let mut digits = Scratch::with_capacity(precision);
        for _ in 0..precision {
            if n.is_zero() {
                digits.push(0);
                continue;
            }
            let digit = (&n % &base).to_u32_digits().first().copied().unwrap_or(0);
            digits.push(digit);
            n /= &base;
        }

        Ok(Self::from_scratch(prime, precision, &digits))
    }

    /// Expand an arbitrarily large signed integer, reducing negative values
    /// modulo `prime^precision` first.
    ///
    /// # Errors
    /// Returns `InvalidBase` if `prime < 2`.
    pub fn from_bigint(value: &BigInt, prime: u32, precision: usize) -> PadicResult<Self> {
        check_base(prime)?;

        let modulus = pow(BigInt::from(prime), precision);
        let reduced = ((value % &modulus) + &modulus) % &modulus;
        Self::from_biguint(reduced.magnitude(), prime, precision)
    }

    /// Build from explicit little-endian digits.
    ///
    /// At most the first `precision` digits are kept. Shorter sequences are
    /// not padded and digit ranges are not checked; see [`validate`].
    ///
    /// [`validate`]: PadicInteger::validate
    ///
    /// # Errors
    /// Returns `InvalidBase` if `prime < 2`.
    pub fn from_digits<I>(digits: I, prime: u32, precision: usize) -> PadicResult<Self>
    where
        I: IntoIterator<Item = u32>,
    {
        check_base(prime)?;

        let digits: Scratch = digits.into_iter().take(precision).collect();
        Ok(Self::from_scratch(prime, precision, &digits))
    }

    /// All-zero value.
    pub fn zero(prime: u32, precision: usize) -> PadicResult<Self> {
        Self::from_integer(0, prime, precision)
    }

    /// The value one.
    pub fn one(prime: u32, precision: usize) -> PadicResult<Self> {
        Self::from_integer(1, prime, precision)
    }

    #[inline]
    fn from_scratch(prime: u32, precision: usize, digits: &[u32]) -> Self {
        Self {
            prime,
            precision,
            digits: DigitBuffer::from_values(DigitWidth::for_prime(prime), digits),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn prime(&self) -> u32 {
        self.prime
    }

    /// Number of tracked digits.
    #[inline]
    pub fn precision(&self) -> usize {
        self.precision
    }

    /// Storage width of the digits.
    #[inline]
    pub fn digit_width(&self) -> DigitWidth {
        self.digits.width()
    }

    /// Number of stored digits. Can be below `precision` for values built
    /// from a short digit sequence.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Digit at `index`, reading positions past the stored digits as 0.
    #[inline]
    pub fn digit(&self, index: usize) -> u32 {
        self.digits.get(index).unwrap_or(0)
    }

    /// Stored digits, least significant first.
    #[inline]
    pub fn iter(&self) -> Digits<'_> {
        self.digits.iter()
    }

    /// Stored digits as a vector, least significant first.
    pub fn digits(&self) -> Vec<u32> {
        self.digits.iter().collect()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d == 0)
    }

    /// The non-negative integer `Σ digit[i] · prime^i` over the stored digits.
    pub fn to_biguint(&self) -> BigUint {
        let base = BigUint::from(self.prime);
        self.digits
            .iter()
            .rev()
            .fold(BigUint::zero(), |acc, d| acc * &base + BigUint::from(d))
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check the invariants the constructors leave unchecked: primality of
    /// the base, digit range, and a full set of `precision` digits.
    ///
    /// # Errors
    /// Returns the first of `InvalidBase`, `InvalidDigit` or
    /// `IncompleteDigits` that applies.
    pub fn validate(&self) -> PadicResult<()> {
        if !is_prime(self.prime) {
            return Err(PadicError::InvalidBase { prime: self.prime });
        }

        if let Some((position, digit)) = self.iter().enumerate().find(|&(_, d)| d >= self.prime) {
            return Err(PadicError::InvalidDigit {
                position,
                digit,
                prime: self.prime,
            });
        }

        if self.len() < self.precision {
            return Err(PadicError::IncompleteDigits {
                len: self.len(),
                precision: self.precision,
            });
        }

        Ok(())
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Digit-wise addition with carry, modulo `prime^max(precision)`.
    ///
    /// # Errors
    /// Returns `OperandMismatch` if the primes differ.
    pub fn checked_add(&self, other: &Self) -> PadicResult<Self> {
        self.ensure_same_prime(other)?;

        let precision = self.precision.max(other.precision);
        tracing::trace!(
            prime = self.prime,
            lhs = self.precision,
            rhs = other.precision,
            "p-adic add"
        );

        let base = u64::from(self.prime);
        let mut digits = Scratch::with_capacity(precision);
        let mut carry = 0u64;
        for i in 0..precision {
            let sum = u64::from(self.digit(i)) + u64::from(other.digit(i)) + carry;
            digits.push((sum % base) as u32);
            carry = sum / base;
        }

        Ok(Self::from_scratch(self.prime, precision, &digits))
    }

    /// Digit-wise subtraction with borrow, modulo `prime^max(precision)`.
    ///
    /// A negative difference yields its truncated p-adic complement.
    ///
    /// # Errors
    /// Returns `OperandMismatch` if the primes differ.
    pub fn checked_sub(&self, other: &Self) -> PadicResult<Self> {
        self.ensure_same_prime(other)?;

        let precision = self.precision.max(other.precision);
        tracing::trace!(
            prime = self.prime,
            lhs = self.precision,
            rhs = other.precision,
            "p-adic sub"
        );

        // Signed so that out-of-range digits cannot underflow.
        let base = i64::from(self.prime);
        let mut digits = Scratch::with_capacity(precision);
        let mut borrow = 0i64;
        for i in 0..precision {
            let diff = i64::from(self.digit(i)) - i64::from(other.digit(i)) - borrow + base;
            digits.push(diff.rem_euclid(base) as u32);
            borrow = i64::from(diff < base);
        }

        Ok(Self::from_scratch(self.prime, precision, &digits))
    }

    /// Schoolbook multiplication keeping all `a.precision + b.precision`
    /// digits of the product.
    ///
    /// The product is exact whenever every input digit lies in
    /// `[0, prime - 1]`. With out-of-range digits a row's final carry can
    /// exceed 32 bits; it is then stored as `u32::MAX` and the product loses
    /// value. Call [`validate`] first when inputs are untrusted.
    ///
    /// [`validate`]: PadicInteger::validate
    ///
    /// # Errors
    /// Returns `OperandMismatch` if the primes differ.
    pub fn checked_mul(&self, other: &Self) -> PadicResult<Self> {
        self.ensure_same_prime(other)?;

        let precision = self.precision + other.precision;
        tracing::trace!(
            prime = self.prime,
            lhs = self.precision,
            rhs = other.precision,
            "p-adic mul"
        );

        let base = u128::from(self.prime);
        let mut acc: SmallVec<[u128; 32]> = SmallVec::from_elem(0, precision);
        for i in 0..self.precision {
            let a = u128::from(self.digit(i));
            let mut carry = 0u128;
            for j in 0..other.precision {
                let t = acc[i + j] + a * u128::from(other.digit(j)) + carry;
                acc[i + j] = t % base;
                carry = t / base;
            }
            // Never touched by the inner loop above; later rows add onto it.
            acc[i + other.precision] = carry;
        }

        let digits: Scratch = acc.iter().map(|&d| narrow(d)).collect();
        Ok(Self::from_scratch(self.prime, precision, &digits))
    }

    #[inline]
    fn ensure_same_prime(&self, other: &Self) -> PadicResult<()> {
        if self.prime == other.prime {
            Ok(())
        } else {
            tracing::debug!(
                left = self.prime,
                right = other.prime,
                "rejecting p-adic operands with different primes"
            );
            Err(PadicError::OperandMismatch {
                left: self.prime,
                right: other.prime,
            })
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn check_base(prime: u32) -> PadicResult<()> {
    if prime < 2 {
        Err(PadicError::InvalidBase { prime })
    } else {
        Ok(())
    }
}

// Product digits stay below the prime when the inputs are in range; only
// out-of-range input digits can leave a carry wider than 32 bits.
#[inline]
fn narrow(value: u128) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Trial-division primality test.
pub(crate) fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let n = u64::from(n);
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Add for &PadicInteger {
    type Output = PadicResult<PadicInteger>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.checked_add(rhs)
    }
}

impl Sub for &PadicInteger {
    type Output = PadicResult<PadicInteger>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.checked_sub(rhs)
    }
}

impl Mul for &PadicInteger {
    type Output = PadicResult<PadicInteger>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.checked_mul(rhs)
    }
}

impl<'a> IntoIterator for &'a PadicInteger {
    type Item = u32;
    type IntoIter = Digits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for PadicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PadicInteger({:?}, prime={}, precision={})",
            self.digits, self.prime, self.precision
        )
    }
}

impl fmt::Display for PadicInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(...")?;
        for (i, digit) in self.digits.iter().rev().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", digit)?;
        }
        f.write_str(")")
    }
}

// ============================================================================
// Tests
// ============================================================================
