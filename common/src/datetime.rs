//! Date and time utilities.

use std::{cmp::Ordering, marker::PhantomData};

use derive_more::Debug;
use time::UtcOffset;

/// Untyped date and time.
pub type DateTime = DateTimeOf;

/// UTC date and time.
#[derive(Debug)]
pub struct DateTimeOf<Of: ?Sized = ()> {
    /// Inner representation of the date and time.
    inner: time::OffsetDateTime,

    /// Type parameter describing the kind of date and time.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> DateTimeOf<Of> {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn now() -> Self {
        let inner = time::OffsetDateTime::now_utc();
        Self {
            _of: PhantomData,
            inner: inner
                .replace_microsecond(inner.microsecond())
                .expect("infallible"),
        }
    }

    /// Returns this [`DateTime`] as observed at the provided [`UtcOffset`].
    #[must_use]
    pub fn at_offset(&self, offset: UtcOffset) -> time::OffsetDateTime {
        self.inner.to_offset(offset)
    }
}

impl<Of: ?Sized> Copy for DateTimeOf<Of> {}
impl<Of: ?Sized> Clone for DateTimeOf<Of> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Of: ?Sized> Eq for DateTimeOf<Of> {}
impl<Of: ?Sized> PartialEq for DateTimeOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<Of: ?Sized> Ord for DateTimeOf<Of> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.inner.cmp(&other.inner)
    }
}
impl<Of: ?Sized> PartialOrd for DateTimeOf<Of> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<Of: ?Sized> TryFrom<time::OffsetDateTime> for DateTimeOf<Of> {
    type Error = time::error::ComponentRange;

    fn try_from(dt: time::OffsetDateTime) -> Result<Self, Self::Error> {
        dt.to_offset(UtcOffset::UTC)
            .replace_microsecond(dt.microsecond())
            .map(|inner| Self {
                inner,
                _of: PhantomData,
            })
    }
}

impl<Of: ?Sized> From<DateTimeOf<Of>> for time::OffsetDateTime {
    fn from(dt: DateTimeOf<Of>) -> Self {
        dt.inner
    }
}

#[cfg(test)]
mod spec {
    use time::{macros::datetime, UtcOffset, Weekday};

    use super::DateTime;

    #[test]
    fn normalizes_to_utc() {
        let dt = DateTime::try_from(datetime!(2024-06-02 01:30 +03:00)).unwrap();

        assert_eq!(
            time::OffsetDateTime::from(dt).offset(),
            UtcOffset::UTC,
        );
        assert_eq!(
            dt,
            DateTime::try_from(datetime!(2024-06-01 22:30 UTC)).unwrap(),
        );
    }

    #[test]
    fn at_offset() {
        let dt = DateTime::try_from(datetime!(2024-06-01 22:30 UTC)).unwrap();
        let local = dt.at_offset(UtcOffset::from_hms(7, 0, 0).unwrap());

        assert_eq!(local.hour(), 5);
        assert_eq!(local.weekday(), Weekday::Sunday);
    }

    #[test]
    fn now_is_ordered() {
        let earlier = DateTime::now();
        let later = DateTime::now();

        assert!(earlier <= later);
    }
}
