//! Day-of-week promo rules.

use std::fmt;

use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use time::Weekday;

/// Set of [`Weekday`]s.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct Weekdays(u8);

impl Weekdays {
    /// [`Weekdays`] containing no days at all.
    pub const NONE: Self = Self(0);

    /// Creates new [`Weekdays`] out of seven flags, starting from Sunday.
    #[must_use]
    pub fn from_flags(flags: [bool; 7]) -> Self {
        flags
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .fold(Self::NONE, |acc, (i, _)| Self(acc.0 | 1 << i))
    }

    /// Indicates whether the provided [`Weekday`] is in these [`Weekdays`].
    #[must_use]
    pub fn contains(self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Returns the bit of the provided [`Weekday`].
    fn bit(day: Weekday) -> u8 {
        1 << day.number_days_from_sunday()
    }
}

impl FromIterator<Weekday> for Weekdays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self(iter.into_iter().fold(0, |acc, d| acc | Self::bit(d)))
    }
}

impl fmt::Debug for Weekdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut day = Weekday::Sunday;
        let mut set = f.debug_set();
        for _ in 0..7 {
            if self.contains(day) {
                _ = set.entry(&day);
            }
            day = day.next();
        }
        set.finish()
    }
}

/// Rule restricting which nights of a stay a promo discounts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StayDays {
    /// ID of this [`StayDays`] rule.
    pub id: StayDaysId,

    /// [`Weekdays`] of the nights being discounted.
    pub weekdays: Weekdays,
}

/// ID of a [`StayDays`] rule.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct StayDaysId(i32);

/// Rule restricting on which days of the week a promo may be booked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookingDays {
    /// ID of this [`BookingDays`] rule.
    pub id: BookingDaysId,

    /// [`Weekdays`] a booking may be made on.
    pub weekdays: Weekdays,
}

/// ID of a [`BookingDays`] rule.
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct BookingDaysId(i32);

#[cfg(test)]
mod spec {
    use time::Weekday;

    use super::Weekdays;

    #[test]
    fn flags_start_from_sunday() {
        let days =
            Weekdays::from_flags([true, false, false, false, false, false, true]);

        assert!(days.contains(Weekday::Sunday));
        assert!(days.contains(Weekday::Saturday));
        assert!(!days.contains(Weekday::Monday));
        assert!(!days.contains(Weekday::Friday));
        assert_eq!(days, [Weekday::Saturday, Weekday::Sunday].into_iter().collect());
    }

    #[test]
    fn every_and_no_day() {
        let every = Weekdays::from_flags([true; 7]);

        let mut day = Weekday::Monday;
        for _ in 0..7 {
            assert!(every.contains(day));
            assert!(!Weekdays::NONE.contains(day));
            day = day.next();
        }
        assert_eq!(Weekdays::from_flags([false; 7]), Weekdays::NONE);
    }
}
