//! Splitting 256-bit field elements into 128-bit limbs.
//!
//! A felt cannot hold a full 256-bit field element, so every element is passed
//! as two 128-bit limbs. A [`LimbPair`] renders `high` before `low`:
//!
//! ```text
//! value = high * 2^128 + low
//! ```

use std::fmt;

use alloy_primitives::U256;

/// Width of a single limb in bits.
pub const LIMB_BITS: usize = 128;

/// A 256-bit value decomposed into its upper and lower 128 bits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LimbPair {
    pub high: u128,
    pub low: u128,
}

impl LimbPair {
    /// Splits `value` into `value >> 128` and `value & (2^128 - 1)`.
    pub fn split(value: U256) -> Self {
        // ruint stores limbs least significant first.
        let [w0, w1, w2, w3] = *value.as_limbs();
        Self {
            high: words_to_u128(w3, w2),
            low: words_to_u128(w1, w0),
        }
    }

    /// Reassembles the value this pair was split from.
    pub fn join(self) -> U256 {
        (U256::from(self.high) << LIMB_BITS) | U256::from(self.low)
    }
}

impl From<U256> for LimbPair {
    fn from(value: U256) -> Self {
        Self::split(value)
    }
}

impl fmt::Display for LimbPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.high, self.low)
    }
}

#[inline]
const fn words_to_u128(hi: u64, lo: u64) -> u128 {
    ((hi as u128) << 64) | lo as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn decimal(text: &str) -> U256 {
        U256::from_str_radix(text, 10).unwrap()
    }

    #[test_case("0", "0 0" ; "zero")]
    #[test_case("123", "0 123" ; "fits in low limb")]
    #[test_case("340282366920938463463374607431768211455", "0 340282366920938463463374607431768211455" ; "low limb saturated")]
    #[test_case("340282366920938463463374607431768211456", "1 0" ; "two to the 128")]
    #[test_case(
        "21888242871839275222246405745257275088548364400416034343698204186575808495616",
        "64323764613183177041862057485226039389 53438638232309528389504892708671455232" ;
        "bn254 scalar field modulus minus one"
    )]
    fn renders_high_then_low(value: &str, expected: &str) {
        assert_eq!(LimbPair::split(decimal(value)).to_string(), expected);
    }

    #[test]
    fn max_value_saturates_both_limbs() {
        let pair = LimbPair::split(U256::MAX);
        assert_eq!(pair.high, u128::MAX);
        assert_eq!(pair.low, u128::MAX);
    }

    proptest! {
        #[test]
        fn split_matches_shift_and_mask(words in any::<[u64; 4]>()) {
            let value = U256::from_limbs(words);
            let pair = LimbPair::split(value);

            prop_assert_eq!(U256::from(pair.high), value >> LIMB_BITS);
            prop_assert_eq!(U256::from(pair.low), value & U256::from(u128::MAX));
            prop_assert_eq!(pair.join(), value);
        }

        #[test]
        fn rendered_pair_parses_back(words in any::<[u64; 4]>()) {
            let value = U256::from_limbs(words);
            let rendered = LimbPair::split(value).to_string();

            let mut numerals = rendered.split(' ');
            let high: u128 = numerals.next().unwrap().parse().unwrap();
            let low: u128 = numerals.next().unwrap().parse().unwrap();
            prop_assert!(numerals.next().is_none());
            prop_assert_eq!(LimbPair { high, low }.join(), value);
        }
    }
}
