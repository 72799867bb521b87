//! [`Money`]-related definitions.

use derive_more::{Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

/// Integer amount of money in the single currency of a hotel.
///
/// May be negative: subtracting a discount doesn't clamp the result.
/// Arithmetic is checked, so an amount never silently wraps around.
#[derive(
    Clone, Copy, Debug, Default, Display, Eq, From, Hash, Into, Ord, PartialEq,
    PartialOrd,
)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Money(i64);

impl Money {
    /// Zero amount of [`Money`].
    pub const ZERO: Self = Self(0);

    /// Creates a new [`Money`] of the provided `amount`.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount of this [`Money`].
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }

    /// Indicates whether this [`Money`] amount is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Adds the `rhs` amount, returning [`None`] on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Subtracts the `rhs` amount, returning [`None`] on overflow.
    #[must_use]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    /// Multiplies this amount by the provided quantity, returning [`None`] on
    /// overflow.
    #[must_use]
    pub fn checked_mul(self, qty: u32) -> Option<Self> {
        self.0.checked_mul(i64::from(qty)).map(Self)
    }

    /// Sums the provided amounts, returning [`None`] on overflow.
    #[must_use]
    pub fn checked_sum(amounts: impl IntoIterator<Item = Self>) -> Option<Self> {
        amounts.into_iter().try_fold(Self::ZERO, Self::checked_add)
    }
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::Money;

    impl Serialize for Money {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_i64(self.0)
        }
    }

    impl<'de> Deserialize<'de> for Money {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            i64::deserialize(deserializer).map(Self)
        }
    }
}

#[cfg(test)]
mod spec {
    use super::Money;

    #[test]
    fn to_string() {
        assert_eq!(Money::new(1200).to_string(), "1200");
        assert_eq!(Money::new(-100).to_string(), "-100");
        assert_eq!(Money::ZERO.to_string(), "0");
    }

    #[test]
    fn arithmetic() {
        let nights = [Money::new(1000), Money::new(1200)];

        let total = Money::checked_sum(nights).unwrap();
        assert_eq!(total, Money::new(2200));
        assert_eq!(total.checked_mul(2), Some(Money::new(4400)));
        assert_eq!(
            Money::new(100).checked_sub(Money::new(150)),
            Some(Money::new(-50)),
        );
        assert!(Money::new(-50).is_negative());
        assert_eq!(Money::checked_sum([]), Some(Money::ZERO));
    }

    #[test]
    fn detects_overflow() {
        let max = Money::new(i64::MAX);

        assert_eq!(max.checked_add(Money::new(1)), None);
        assert_eq!(Money::new(i64::MIN).checked_sub(Money::new(1)), None);
        assert_eq!(max.checked_mul(2), None);
        assert_eq!(max.checked_mul(1), Some(max));
        assert_eq!(Money::checked_sum([max, max]), None);
    }
}
