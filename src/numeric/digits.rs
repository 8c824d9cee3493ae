// ============================================================================
// Digit Storage
// Minimal-width little-endian digit buffers for p-adic integers
// ============================================================================

use smallvec::SmallVec;
use std::fmt;
use std::iter::FusedIterator;

/// Unsigned storage width used for the digits of a p-adic integer.
///
/// Purely a memory-layout choice: arithmetic always widens digits to
/// `u32` or larger before combining them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DigitWidth {
    /// 8-bit digits (prime < 256)
    U8,
    /// 16-bit digits (prime < 65536)
    U16,
    /// 32-bit digits
    U32,
}

impl DigitWidth {
    /// Smallest width that holds every digit in `[0, prime - 1]`.
    #[inline]
    pub const fn for_prime(prime: u32) -> Self {
        if prime < 256 {
            DigitWidth::U8
        } else if prime < 65536 {
            DigitWidth::U16
        } else {
            DigitWidth::U32
        }
    }

    /// Smallest width that holds `digit` itself.
    #[inline]
    pub const fn for_digit(digit: u32) -> Self {
        if digit <= u8::MAX as u32 {
            DigitWidth::U8
        } else if digit <= u16::MAX as u32 {
            DigitWidth::U16
        } else {
            DigitWidth::U32
        }
    }

    /// Number of bits per stored digit.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            DigitWidth::U8 => 8,
            DigitWidth::U16 => 16,
            DigitWidth::U32 => 32,
        }
    }
}

impl fmt::Display for DigitWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

// ============================================================================
// Digit Buffer
// ============================================================================

// Inline capacity covers 32 bytes of digits for every width.
type Inline8 = SmallVec<[u8; 32]>;
type Inline16 = SmallVec<[u16; 16]>;
type Inline32 = SmallVec<[u32; 8]>;

/// Immutable little-endian digit sequence stored at a fixed width.
#[derive(Clone)]
pub(crate) enum DigitBuffer {
    U8(Inline8),
    U16(Inline16),
    U32(Inline32),
}

impl DigitBuffer {
    /// Store `digits` verbatim.
    ///
    /// The width is `floor` unless some digit does not fit, in which case the
    /// buffer widens so no digit is ever truncated.
    pub fn from_values(floor: DigitWidth, digits: &[u32]) -> Self {
        let width = digits
            .iter()
            .map(|&d| DigitWidth::for_digit(d))
            .fold(floor, DigitWidth::max);

        // Narrowing casts are lossless: `width` fits the widest digit.
        match width {
            DigitWidth::U8 => DigitBuffer::U8(digits.iter().map(|&d| d as u8).collect()),
            DigitWidth::U16 => DigitBuffer::U16(digits.iter().map(|&d| d as u16).collect()),
            DigitWidth::U32 => DigitBuffer::U32(digits.iter().copied().collect()),
        }
    }

    #[inline]
    pub fn width(&self) -> DigitWidth {
        match self {
            DigitBuffer::U8(_) => DigitWidth::U8,
            DigitBuffer::U16(_) => DigitWidth::U16,
            DigitBuffer::U32(_) => DigitWidth::U32,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self {
            DigitBuffer::U8(d) => d.len(),
            DigitBuffer::U16(d) => d.len(),
            DigitBuffer::U32(d) => d.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        match self {
            DigitBuffer::U8(d) => d.get(index).map(|&x| u32::from(x)),
            DigitBuffer::U16(d) => d.get(index).map(|&x| u32::from(x)),
            DigitBuffer::U32(d) => d.get(index).copied(),
        }
    }

    #[inline]
    pub fn iter(&self) -> Digits<'_> {
        Digits {
            buffer: self,
            front: 0,
            back: self.len(),
        }
    }
}

impl fmt::Debug for DigitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Iterator over stored digits, least significant first.
#[derive(Clone)]
pub struct Digits<'a> {
    buffer: &'a DigitBuffer,
    front: usize,
    back: usize,
}

impl Iterator for Digits<'_> {
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<u32> {
        if self.front >= self.back {
            return None;
        }
        let digit = self.buffer.get(self.front)?;
        self.front += 1;
        Some(digit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Digits<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<u32> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.buffer.get(self.back)
    }
}

impl ExactSizeIterator for Digits<'_> {}

impl FusedIterator for Digits<'_> {}
