//! [`Promo`]-related [`Database`] implementations.

use common::{
    operations::{By, Select},
    Percent,
};
use tokio_postgres::Row;
use tracerr::Traced;

use crate::{
    domain::{
        promo::{
            self, BookingDays, BookingDaysId, BookingHours, Discount,
            StayDays, StayDaysId, Weekdays,
        },
        Promo,
    },
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
};

/// Columns of the day-of-week flags, starting from Sunday.
const WEEKDAY_COLUMNS: [&str; 7] = [
    "is_sun_promo",
    "is_mon_promo",
    "is_tue_promo",
    "is_wed_promo",
    "is_thu_promo",
    "is_fri_promo",
    "is_sat_promo",
];

/// Reads [`Weekdays`] out of the day-of-week flag columns of the `row`.
fn weekdays(row: &Row) -> Weekdays {
    Weekdays::from_flags(WEEKDAY_COLUMNS.map(|c| row.get::<_, bool>(c)))
}

impl Database<Select<By<Option<Promo>, promo::Id>>> for Postgres {
    type Ok = Option<Promo>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Promo>, promo::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        const SQL: &str = "\
            SELECT id, minimum_nights, minimum_rooms, \
                   stay_day_promo_id, booking_day_promo_id, \
                   booking_hour_first, booking_hour_last, \
                   is_percentage, percentage, currency \
            FROM promos \
            WHERE id = $1::INT4 \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| Promo {
                id: row.get("id"),
                minimum_nights: row.get("minimum_nights"),
                minimum_rooms: row.get("minimum_rooms"),
                stay_days_id: row.get("stay_day_promo_id"),
                booking_days_id: row.get("booking_day_promo_id"),
                booking_hours: BookingHours {
                    first: row.get("booking_hour_first"),
                    last: row.get("booking_hour_last"),
                },
                discount: if row.get("is_percentage") {
                    Discount::Percentage(Percent::new(row.get("percentage")))
                } else {
                    Discount::Fixed(row.get("currency"))
                },
            }))
    }
}

impl Database<Select<By<Option<StayDays>, StayDaysId>>> for Postgres {
    type Ok = Option<StayDays>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<StayDays>, StayDaysId>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        const SQL: &str = "\
            SELECT id, is_sun_promo, is_mon_promo, is_tue_promo, \
                   is_wed_promo, is_thu_promo, is_fri_promo, is_sat_promo \
            FROM stay_day_promos \
            WHERE id = $1::INT4 \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| StayDays {
                id: row.get("id"),
                weekdays: weekdays(&row),
            }))
    }
}

impl Database<Select<By<Option<BookingDays>, BookingDaysId>>> for Postgres {
    type Ok = Option<BookingDays>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<BookingDays>, BookingDaysId>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        const SQL: &str = "\
            SELECT id, is_sun_promo, is_mon_promo, is_tue_promo, \
                   is_wed_promo, is_thu_promo, is_fri_promo, is_sat_promo \
            FROM booking_day_promos \
            WHERE id = $1::INT4 \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| BookingDays {
                id: row.get("id"),
                weekdays: weekdays(&row),
            }))
    }
}
