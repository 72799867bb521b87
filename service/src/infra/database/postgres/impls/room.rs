//! [`Room`]- and [`Price`]-related [`Database`] implementations.

use std::collections::HashSet;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    domain::{room, stay, Price, Room},
    infra::{
        database::{self, postgres::Connection, Postgres},
        Database,
    },
    read,
};

impl Database<Select<By<Option<room::Type>, room::TypeId>>> for Postgres {
    type Ok = Option<room::Type>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<room::Type>, room::TypeId>>,
    ) -> Result<Self::Ok, Self::Err> {
        let id = by.into_inner();

        const SQL: &str = "\
            SELECT id, name \
            FROM room_types \
            WHERE id = $1::INT4 \
            LIMIT 1";
        Ok(self
            .query_opt(SQL, &[&id])
            .await
            .map_err(tracerr::wrap!())?
            .map(|row| room::Type {
                id: row.get("id"),
                name: row.get("name"),
            }))
    }
}

impl Database<Select<By<read::room::Occupied, stay::Window>>> for Postgres {
    type Ok = read::room::Occupied;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<read::room::Occupied, stay::Window>>,
    ) -> Result<Self::Ok, Self::Err> {
        let stay = by.into_inner();

        const SQL: &str = "\
            SELECT DISTINCT room_id \
            FROM stay_rooms \
            WHERE date >= $1::DATE \
              AND date < $2::DATE";
        Ok(self
            .query(SQL, &[&stay.checkin(), &stay.checkout()])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| row.get::<_, room::Id>("room_id"))
            .collect::<HashSet<_>>()
            .into())
    }
}

impl Database<Select<By<Vec<Room>, read::room::Available>>> for Postgres {
    type Ok = Vec<Room>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Room>, read::room::Available>>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::room::Available {
            hotel_id,
            type_id,
            excluded,
        } = by.into_inner();
        let excluded = excluded.into_iter().collect::<Vec<_>>();

        const SQL: &str = "\
            SELECT id, hotel_id, room_type_id, number, status \
            FROM rooms \
            WHERE hotel_id = $1::INT4 \
              AND room_type_id = $2::INT4 \
              AND NOT (id = ANY($3::INT4[])) \
            ORDER BY id";
        Ok(self
            .query(SQL, &[&hotel_id, &type_id, &excluded])
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Room {
                id: row.get("id"),
                hotel_id: row.get("hotel_id"),
                type_id: row.get("room_type_id"),
                number: row.get("number"),
                status: row.get("status"),
            })
            .collect())
    }
}

impl Database<Select<By<Vec<Price>, read::price::Selector>>> for Postgres {
    type Ok = Vec<Price>;
    type Err = Traced<database::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Vec<Price>, read::price::Selector>>,
    ) -> Result<Self::Ok, Self::Err> {
        let read::price::Selector {
            hotel_id,
            room_type_id,
            stay,
        } = by.into_inner();

        const SQL: &str = "\
            SELECT hotel_id, room_type_id, date, price \
            FROM prices \
            WHERE hotel_id = $1::INT4 \
              AND room_type_id = $2::INT4 \
              AND date >= $3::DATE \
              AND date < $4::DATE \
            ORDER BY date";
        Ok(self
            .query(
                SQL,
                &[&hotel_id, &room_type_id, &stay.checkin(), &stay.checkout()],
            )
            .await
            .map_err(tracerr::wrap!())?
            .into_iter()
            .map(|row| Price {
                hotel_id: row.get("hotel_id"),
                room_type_id: row.get("room_type_id"),
                date: row.get("date"),
                amount: row.get("price"),
            })
            .collect())
    }
}
