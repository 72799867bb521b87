//! In-memory [`Database`] for tests.

use std::collections::HashSet;

use common::{
    operations::{By, Select},
    Date,
};
use tracerr::Traced;

use crate::{
    domain::{
        promo::{self, BookingDays, BookingDaysId, StayDays, StayDaysId},
        room, stay, Price, Promo, Room,
    },
    infra::{database, Database},
    read,
};

/// In-memory [`Database`] holding every entity in plain [`Vec`]s.
#[derive(Clone, Debug, Default)]
pub(crate) struct Mock {
    /// Known [`room::Type`]s.
    pub(crate) room_types: Vec<room::Type>,

    /// Known [`Room`]s.
    pub(crate) rooms: Vec<Room>,

    /// Nights each [`Room`] is occupied on.
    pub(crate) occupancy: Vec<(room::Id, Date)>,

    /// Known [`Price`]s.
    pub(crate) prices: Vec<Price>,

    /// Known [`Promo`]s.
    pub(crate) promos: Vec<Promo>,

    /// Known [`StayDays`] rules.
    pub(crate) stay_days: Vec<StayDays>,

    /// Known [`BookingDays`] rules.
    pub(crate) booking_days: Vec<BookingDays>,

    /// Whether occupancy lookups fail.
    pub(crate) fail_occupancy: bool,

    /// Whether [`Price`] lookups fail.
    pub(crate) fail_prices: bool,

    /// Whether [`Promo`] rule lookups fail.
    pub(crate) fail_promo_rules: bool,
}

impl Mock {
    /// Fails with a [`database::Error::Simulated`] if `fail` is set.
    fn check(fail: bool) -> Result<(), Traced<database::Error>> {
        if fail {
            return Err(tracerr::new!(database::Error::Simulated));
        }
        Ok(())
    }
}

impl Database<Select<By<Option<room::Type>, room::TypeId>>> for Mock {
    type Ok = Option<room::Type>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<room::Type>, room::TypeId>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.room_types.iter().find(|t| t.id == id).cloned())
    }
}

impl Database<Select<By<read::room::Occupied, stay::Window>>> for Mock {
    type Ok = read::room::Occupied;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::room::Occupied, stay::Window>>,
    ) -> Result<Self::Ok, Self::Err> {
        Self::check(self.fail_occupancy)?;
        let stay = by.into_inner();
        Ok(self
            .occupancy
            .iter()
            .filter(|(_, night)| stay.contains(*night))
            .map(|(id, _)| *id)
            .collect::<HashSet<_>>()
            .into())
    }
}

impl Database<Select<By<Vec<Room>, read::room::Available>>> for Mock {
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, read::room::Available>>,
    ) -> Result<Self::Ok, Self::Err> {
        let sel = by.into_inner();
        Ok(self
            .rooms
            .iter()
            .filter(|r| {
                r.hotel_id == sel.hotel_id
                    && r.type_id == sel.type_id
                    && !sel.excluded.contains(&r.id)
            })
            .cloned()
            .collect())
    }
}

impl Database<Select<By<Vec<Price>, read::price::Selector>>> for Mock {
    type Ok = Vec<Price>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Price>, read::price::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        Self::check(self.fail_prices)?;
        let sel = by.into_inner();
        Ok(self
            .prices
            .iter()
            .filter(|p| {
                p.hotel_id == sel.hotel_id
                    && p.room_type_id == sel.room_type_id
                    && sel.stay.contains(p.date)
            })
            .copied()
            .collect())
    }
}

impl Database<Select<By<Option<Promo>, promo::Id>>> for Mock {
    type Ok = Option<Promo>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Promo>, promo::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();
        Ok(self.promos.iter().find(|p| p.id == id).copied())
    }
}

impl Database<Select<By<Option<StayDays>, StayDaysId>>> for Mock {
    type Ok = Option<StayDays>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<StayDays>, StayDaysId>>,
    ) -> Result<Self::Ok, Self::Err> {
        Self::check(self.fail_promo_rules)?;
        let id = by.into_inner();
        Ok(self.stay_days.iter().find(|d| d.id == id).copied())
    }
}

impl Database<Select<By<Option<BookingDays>, BookingDaysId>>> for Mock {
    type Ok = Option<BookingDays>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<BookingDays>, BookingDaysId>>,
    ) -> Result<Self::Ok, Self::Err> {
        Self::check(self.fail_promo_rules)?;
        let id = by.into_inner();
        Ok(self.booking_days.iter().find(|d| d.id == id).copied())
    }
}

impl Mock {
    /// Creates a new [`Mock`] describing a small hotel.
    ///
    /// Hotel `1` has four rooms of type `1`, the 4th one occupied on
    /// `2024-06-02`, and one room of type `2`. Nights from `2024-06-01`
    /// (Saturday) to `2024-06-03` cost `1000`, `1200` and `1100`.
    ///
    /// Promos:
    /// - `1`: 10% off every night;
    /// - `2`: 300 off Saturday nights;
    /// - `3`: 100 off nights of a missing stay rule;
    /// - `4`: malformed booking hours;
    /// - `5`: bookable on weekdays only;
    /// - `6`: requires at least 5 nights;
    /// - `7`: bookable from 22:00 to 06:00 only.
    pub(crate) fn scenario() -> Self {
        use common::{Money, Percent};

        use crate::domain::promo::{BookingHours, Discount, Weekdays};

        let date = |s: &str| s.parse::<Date>().unwrap();
        let room = |id: i32, type_id: i32| Room {
            id: id.into(),
            hotel_id: 1.into(),
            type_id: type_id.into(),
            number: (100 + id).into(),
            status: room::Status::InService,
        };
        let price = |d: &str, amount: i64| Price {
            hotel_id: 1.into(),
            room_type_id: 1.into(),
            date: date(d),
            amount: Money::new(amount),
        };
        let promo = |id: i32, discount: Discount| Promo {
            id: id.into(),
            minimum_nights: 1,
            minimum_rooms: 1,
            stay_days_id: None,
            booking_days_id: None,
            booking_hours: BookingHours::ANY,
            discount,
        };
        let ten_percent = Discount::Percentage(Percent::new(10));

        Self {
            room_types: vec![room::Type {
                id: 1.into(),
                name: room::TypeName::new("Deluxe").unwrap(),
            }],
            rooms: vec![room(1, 1), room(2, 1), room(3, 1), room(4, 1), room(5, 2)],
            occupancy: vec![(4.into(), date("2024-06-02"))],
            prices: vec![
                price("2024-06-01", 1000),
                price("2024-06-02", 1200),
                price("2024-06-03", 1100),
            ],
            promos: vec![
                promo(1, ten_percent),
                Promo {
                    stay_days_id: Some(1.into()),
                    ..promo(2, Discount::Fixed(Money::new(300)))
                },
                Promo {
                    stay_days_id: Some(99.into()),
                    ..promo(3, Discount::Fixed(Money::new(100)))
                },
                Promo {
                    booking_hours: BookingHours { first: 5, last: 5 },
                    ..promo(4, ten_percent)
                },
                Promo {
                    booking_days_id: Some(1.into()),
                    ..promo(5, ten_percent)
                },
                Promo {
                    minimum_nights: 5,
                    ..promo(6, ten_percent)
                },
                Promo {
                    booking_hours: BookingHours { first: 22, last: 6 },
                    ..promo(7, ten_percent)
                },
            ],
            stay_days: vec![StayDays {
                id: 1.into(),
                weekdays: [time::Weekday::Saturday].into_iter().collect(),
            }],
            booking_days: vec![BookingDays {
                id: 1.into(),
                weekdays: Weekdays::from_flags(
                    [false, true, true, true, true, true, false],
                ),
            }],
            ..Self::default()
        }
    }
}
