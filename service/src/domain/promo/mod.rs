//! [`Promo`] definitions.

pub mod days;

use std::fmt;

use common::{unit, DateTimeOf, Money, Percent};
use derive_more::{Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use self::days::{
    BookingDays, BookingDaysId, StayDays, StayDaysId, Weekdays,
};

/// Promotion discounting the nightly prices of a stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Promo {
    /// ID of this [`Promo`].
    pub id: Id,

    /// Minimum number of nights a stay must have.
    pub minimum_nights: i32,

    /// Minimum number of rooms a booking must have.
    pub minimum_rooms: i32,

    /// ID of the [`StayDays`] rule selecting the discounted nights, if any.
    pub stay_days_id: Option<StayDaysId>,

    /// ID of the [`BookingDays`] rule restricting the booking day, if any.
    pub booking_days_id: Option<BookingDaysId>,

    /// [`BookingHours`] a booking must be made within.
    pub booking_hours: BookingHours,

    /// [`Discount`] applied to every eligible night.
    pub discount: Discount,
}

impl Promo {
    /// Indicates whether this [`Promo`] is well-formed and may be applied at
    /// all.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.minimum_nights >= 0
            && self.minimum_rooms >= 0
            && self.booking_hours.is_valid()
            && self.discount.is_valid()
    }

    /// Checks whether a booking of `rooms` rooms for `nights` nights made at
    /// the provided moment passes every gate of this [`Promo`].
    ///
    /// Absent `booking_days` rule doesn't restrict the booking day.
    ///
    /// # Errors
    ///
    /// Returns the first [`Gate`] the booking fails.
    pub fn eligibility(
        &self,
        booking_days: Option<&BookingDays>,
        at: OffsetDateTime,
        nights: usize,
        rooms: u32,
    ) -> Result<(), Gate> {
        if booking_days.is_some_and(|d| !d.weekdays.contains(at.weekday())) {
            return Err(Gate::BookingDay);
        }
        if !self.booking_hours.allows(at.hour()) {
            return Err(Gate::BookingHour);
        }
        let enough_nights = i64::try_from(nights)
            .is_ok_and(|n| n >= i64::from(self.minimum_nights));
        if !enough_nights || i64::from(rooms) < i64::from(self.minimum_rooms) {
            return Err(Gate::Thresholds);
        }
        Ok(())
    }
}

/// ID of a [`Promo`].
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
pub struct Id(i32);

/// [`DateTime`] when a [`Promo`] is being booked.
///
/// [`DateTime`]: common::DateTime
pub type BookingDateTime = DateTimeOf<(Promo, unit::Booking)>;

/// Window of hours `[first, last)` of a day a [`Promo`] may be booked within.
///
/// `first` of `0` means no restriction, and `first` greater than `last` wraps
/// around midnight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BookingHours {
    /// First hour of the window, inclusive.
    pub first: i32,

    /// Last hour of the window, exclusive.
    pub last: i32,
}

impl BookingHours {
    /// [`BookingHours`] not restricting anything.
    pub const ANY: Self = Self { first: 0, last: 0 };

    /// Indicates whether both bounds are valid hours and the window is not
    /// empty.
    #[must_use]
    pub fn is_valid(self) -> bool {
        let hours = 0..=23;
        hours.contains(&self.first)
            && hours.contains(&self.last)
            && !(self.first == self.last && self.first != 0)
    }

    /// Indicates whether the provided `hour` of a day falls into these
    /// [`BookingHours`].
    #[must_use]
    pub fn allows(self, hour: u8) -> bool {
        let hour = i32::from(hour);
        match (self.first, self.last) {
            (0, _) => true,
            (first, last) if first > last => hour >= first || hour < last,
            (first, last) => first <= hour && hour < last,
        }
    }
}

/// Discount of a [`Promo`] applied to a single night.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Discount {
    /// Percentage of the nightly price.
    Percentage(Percent),

    /// Fixed amount subtracted from the nightly price.
    Fixed(Money),
}

impl Discount {
    /// Indicates whether this [`Discount`] has a non-negative magnitude.
    #[must_use]
    pub fn is_valid(self) -> bool {
        match self {
            Self::Percentage(p) => !p.is_negative(),
            Self::Fixed(m) => !m.is_negative(),
        }
    }

    /// Returns the amount this [`Discount`] saves on the provided nightly
    /// `price`.
    ///
    /// [`None`] is returned if the percentage of the `price` overflows.
    #[must_use]
    pub fn of(self, price: Money) -> Option<Money> {
        match self {
            Self::Percentage(p) => p.of(price),
            Self::Fixed(m) => Some(m),
        }
    }
}

/// Eligibility gate of a [`Promo`] a booking may fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gate {
    /// Booking is made on a day the [`BookingDays`] rule excludes.
    BookingDay,

    /// Booking is made outside the [`BookingHours`].
    BookingHour,

    /// Stay is too short or too few rooms are booked.
    Thresholds,
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BookingDay => "booking day",
            Self::BookingHour => "booking hour",
            Self::Thresholds => "minimum nights or rooms",
        })
    }
}
