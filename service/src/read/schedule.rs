//! [`Schedule`] definitions.

use common::{Date, Money};

use crate::domain::{
    promo::{Discount, StayDays},
    Price,
};

/// Price of a single night of a stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Night {
    /// Night being priced.
    pub date: Date,

    /// Price of the night.
    pub price: Money,
}

/// Nightly price schedule of a stay, ordered by [`Date`].
///
/// A quote owns a single [`Schedule`] shared by all of its rooms.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Schedule(Vec<Night>);

impl Schedule {
    /// Builds a new [`Schedule`] out of the provided [`Price`]s.
    #[must_use]
    pub fn from_prices(prices: impl IntoIterator<Item = Price>) -> Self {
        prices
            .into_iter()
            .map(|p| Night {
                date: p.date,
                price: p.amount,
            })
            .collect()
    }

    /// Returns the [`Night`]s of this [`Schedule`].
    #[must_use]
    pub fn nights(&self) -> &[Night] {
        &self.0
    }

    /// Returns the number of priced nights.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Indicates whether no night is priced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sums the prices of all the nights.
    ///
    /// [`None`] is returned if the sum overflows.
    #[must_use]
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.0.iter().map(|n| n.price))
    }

    /// Applies the provided [`Discount`] to the nights matching the
    /// [`StayDays`] rule (or to all nights, if there is none).
    ///
    /// Resulting prices are not clamped and may go negative. [`None`] is
    /// returned if any amount overflows.
    #[must_use]
    pub fn discount(
        &self,
        discount: Discount,
        stay_days: Option<&StayDays>,
    ) -> Option<Discounted> {
        let slots = self
            .0
            .iter()
            .map(|night| {
                let eligible = stay_days
                    .map_or(true, |r| r.weekdays.contains(night.date.weekday()));
                let saving = if eligible {
                    discount.of(night.price)?
                } else {
                    Money::ZERO
                };
                let night = Night {
                    date: night.date,
                    price: night.price.checked_sub(saving)?,
                };
                Some((night, saving))
            })
            .collect::<Option<Vec<_>>>()?;

        let (savings, total) = slots.iter().try_fold(
            (Money::ZERO, Money::ZERO),
            |(s, t), (n, saving)| {
                Some((s.checked_add(*saving)?, t.checked_add(n.price)?))
            },
        )?;

        Some(Discounted {
            schedule: Self(slots.into_iter().map(|(n, _)| n).collect()),
            savings,
            total,
        })
    }
}

impl FromIterator<Night> for Schedule {
    fn from_iter<I: IntoIterator<Item = Night>>(iter: I) -> Self {
        let mut nights = iter.into_iter().collect::<Vec<_>>();
        nights.sort_unstable_by_key(|n| n.date);
        Self(nights)
    }
}

/// [`Schedule`] with a [`Discount`] applied.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Discounted {
    /// Rewritten [`Schedule`].
    pub schedule: Schedule,

    /// Amount saved over all the nights.
    pub savings: Money,

    /// New total of the [`Schedule`].
    pub total: Money,
}

#[cfg(test)]
mod spec {
    use common::{Date, Money, Percent};
    use time::Weekday;

    use crate::domain::{
        promo::{Discount, StayDays, Weekdays},
        Price,
    };

    use super::Schedule;

    fn schedule(nights: &[(&str, i64)]) -> Schedule {
        Schedule::from_prices(nights.iter().map(|(d, p)| Price {
            hotel_id: 1.into(),
            room_type_id: 1.into(),
            date: d.parse::<Date>().unwrap(),
            amount: Money::new(*p),
        }))
    }

    fn saturdays() -> StayDays {
        StayDays {
            id: 1.into(),
            weekdays: [Weekday::Saturday].into_iter().collect::<Weekdays>(),
        }
    }

    #[test]
    fn sorts_and_totals() {
        let s = schedule(&[("2024-06-02", 1200), ("2024-06-01", 1000)]);

        assert_eq!(s.len(), 2);
        assert_eq!(s.nights()[0].date.to_string(), "2024-06-01");
        assert_eq!(s.total(), Some(Money::new(2200)));
        assert_eq!(Schedule::default().total(), Some(Money::ZERO));
    }

    #[test]
    fn applies_percentage() {
        let d = schedule(&[("2024-06-03", 1000)])
            .discount(Discount::Percentage(Percent::new(10)), None)
            .unwrap();

        assert_eq!(d.savings, Money::new(100));
        assert_eq!(d.total, Money::new(900));
        assert_eq!(d.schedule.nights()[0].price, Money::new(900));
    }

    #[test]
    fn keeps_full_price_of_ineligible_nights() {
        // 2024-06-01 is a Saturday.
        let d = schedule(&[("2024-06-01", 1000), ("2024-06-02", 1200)])
            .discount(Discount::Fixed(Money::new(300)), Some(&saturdays()))
            .unwrap();

        assert_eq!(d.savings, Money::new(300));
        assert_eq!(d.total, Money::new(1900));
        assert_eq!(d.schedule.nights()[0].price, Money::new(700));
        assert_eq!(d.schedule.nights()[1].price, Money::new(1200));
    }

    #[test]
    fn saves_nothing_without_matching_nights() {
        let d = schedule(&[("2024-06-03", 1000), ("2024-06-04", 1000)])
            .discount(Discount::Fixed(Money::new(300)), Some(&saturdays()))
            .unwrap();

        assert_eq!(d.savings, Money::ZERO);
        assert_eq!(d.total, Money::new(2000));
    }

    #[test]
    fn does_not_clamp_negative_prices() {
        let d = schedule(&[("2024-06-03", 100)])
            .discount(Discount::Fixed(Money::new(250)), None)
            .unwrap();

        assert_eq!(d.savings, Money::new(250));
        assert_eq!(d.total, Money::new(-150));
        assert!(d.schedule.nights()[0].price.is_negative());
    }

    #[test]
    fn detects_overflow() {
        let huge = schedule(&[("2024-06-01", i64::MAX), ("2024-06-02", i64::MAX)]);

        assert_eq!(huge.total(), None);
        assert_eq!(
            huge.discount(Discount::Fixed(Money::new(100)), None),
            None,
        );
        assert_eq!(
            schedule(&[("2024-06-01", i64::MAX)])
                .discount(Discount::Percentage(Percent::new(10)), None),
            None,
        );
        assert_eq!(
            schedule(&[("2024-06-01", 0)])
                .discount(Discount::Fixed(Money::new(i64::MAX)), None)
                .unwrap()
                .total,
            Money::new(-i64::MAX),
        );
    }
}
