use std::fmt::{Debug, Display};
use std::ops::{BitAnd, BitOr, BitXor, Shl, Shr};

/// An unsigned machine word the twister can run on.
///
/// Every arithmetic method wraps modulo 2^BITS.
pub trait Word:
    Copy
    + Eq
    + Debug
    + Display
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const MAX: Self;
    /// Only the most significant bit set.
    const MSB: Self;

    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    /// Truncates to the word width.
    fn from_usize(x: usize) -> Self;
    fn is_odd(self) -> bool;
}

macro_rules! impl_word {
    ($t:ty) => {
        impl Word for $t {
            const BITS: u32 = <$t>::max_value().count_ones();
            const ZERO: $t = 0;
            const MAX: $t = <$t>::max_value();
            const MSB: $t = 1 << (<$t>::max_value().count_ones() - 1);

            #[inline]
            fn wrapping_add(self, rhs: $t) -> $t {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: $t) -> $t {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: $t) -> $t {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn from_usize(x: usize) -> $t {
                x as $t
            }

            #[inline]
            fn is_odd(self) -> bool {
                self & 1 == 1
            }
        }
    };
}

impl_word!(u32);
impl_word!(u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(<u32 as Word>::BITS, 32);
        assert_eq!(<u64 as Word>::BITS, 64);
        assert_eq!(<u32 as Word>::MSB, 0x8000_0000);
        assert_eq!(<u64 as Word>::MSB, 0x8000_0000_0000_0000);
    }

    #[test]
    fn test_arithmetic_wraps() {
        assert_eq!(Word::wrapping_add(u32::max_value(), 2u32), 1);
        assert_eq!(Word::wrapping_sub(0u64, 1u64), u64::max_value());
        assert_eq!(Word::wrapping_mul(0x8000_0000u32, 2u32), 0);
        assert_eq!(<u32 as Word>::from_usize(usize::max_value()), u32::max_value());
    }
}
