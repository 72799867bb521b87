//! Stay [`Window`] definitions.

use std::fmt;

use common::Date;

/// Half-open `[checkin, checkout)` range of nights a room is occupied.
///
/// The checkout night itself is not part of the [`Window`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Window {
    /// First night of the stay.
    checkin: Date,

    /// Day the guest leaves.
    checkout: Date,
}

impl Window {
    /// Creates a new [`Window`] if the `checkin` is strictly before the
    /// `checkout`.
    #[must_use]
    pub fn new(checkin: Date, checkout: Date) -> Option<Self> {
        (checkin < checkout).then_some(Self { checkin, checkout })
    }

    /// Returns the checkin [`Date`] of this [`Window`].
    #[must_use]
    pub fn checkin(&self) -> Date {
        self.checkin
    }

    /// Returns the checkout [`Date`] of this [`Window`].
    #[must_use]
    pub fn checkout(&self) -> Date {
        self.checkout
    }

    /// Returns the number of nights in this [`Window`].
    #[must_use]
    pub fn nights(&self) -> u32 {
        u32::try_from(self.checkin.days_until(self.checkout))
            .unwrap_or(u32::MAX)
    }

    /// Indicates whether the provided night falls into this [`Window`].
    #[must_use]
    pub fn contains(&self, night: Date) -> bool {
        self.checkin <= night && night < self.checkout
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.checkin, self.checkout)
    }
}

#[cfg(test)]
mod spec {
    use common::Date;

    use super::Window;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn requires_checkin_before_checkout() {
        assert!(Window::new(date("2024-06-01"), date("2024-06-03")).is_some());
        assert!(Window::new(date("2024-06-01"), date("2024-06-01")).is_none());
        assert!(Window::new(date("2024-06-03"), date("2024-06-01")).is_none());
    }

    #[test]
    fn excludes_checkout_night() {
        let stay = Window::new(date("2024-06-01"), date("2024-06-03")).unwrap();

        assert_eq!(stay.nights(), 2);
        assert!(stay.contains(date("2024-06-01")));
        assert!(stay.contains(date("2024-06-02")));
        assert!(!stay.contains(date("2024-06-03")));
        assert!(!stay.contains(date("2024-05-31")));
    }

    #[test]
    fn spans_month_boundary() {
        let stay = Window::new(date("2024-02-28"), date("2024-03-01")).unwrap();

        assert_eq!(stay.nights(), 2);
        assert_eq!(stay.to_string(), "[2024-02-28, 2024-03-01)");
    }
}
