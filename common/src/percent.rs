//! [`Percent`]-related definitions.

use derive_more::{Display, From, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};

use crate::Money;

/// Integer percentage.
///
/// Not bounded: values below `0` or above `100` are representable and have to
/// be checked by the owner where they matter.
#[derive(Clone, Copy, Debug, Display, Eq, From, Hash, Into, PartialEq)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct Percent(i64);

impl Percent {
    /// Creates a new [`Percent`] of the provided value.
    #[must_use]
    pub const fn new(val: i64) -> Self {
        Self(val)
    }

    /// Indicates whether this [`Percent`] is below zero.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Calculates this [`Percent`] of the provided [`Money`] amount.
    ///
    /// The result is truncated toward zero, so `10%` of `999` is `99`.
    /// [`None`] is returned if the intermediate product overflows.
    #[must_use]
    pub fn of(self, money: Money) -> Option<Money> {
        self.0.checked_mul(money.amount()).map(|v| Money::new(v / 100))
    }
}

#[cfg(test)]
mod spec {
    use crate::Money;

    use super::Percent;

    #[test]
    fn of() {
        let of = |p, m| Percent::new(p).of(Money::new(m)).unwrap();

        assert_eq!(of(10, 1000), Money::new(100));
        assert_eq!(of(10, 999), Money::new(99));
        assert_eq!(of(15, 1), Money::ZERO);
        assert_eq!(of(150, 200), Money::new(300));
        assert_eq!(of(10, -999), Money::new(-99));
        assert_eq!(of(0, 1000), Money::ZERO);
    }

    #[test]
    fn of_overflow() {
        assert_eq!(Percent::new(10).of(Money::new(i64::MAX)), None);
        assert!(Percent::new(-1).is_negative());
    }
}
