//! [`AvailableRooms`] [`Query`] definition.

use common::operations::{By, Select};
#[cfg(doc)]
use common::Money;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{room, stay, Price, Room},
    infra::{database, Database},
    query::room_type,
    read::{self, Schedule},
    Query, Service,
};

/// [`Query`] quoting the free rooms of a [`room::Type`] for a stay.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AvailableRooms {
    /// [`stay::Window`] to quote.
    pub stay: stay::Window,

    /// Number of rooms requested.
    pub room_qty: u32,

    /// ID of the requested [`room::Type`].
    pub room_type_id: room::TypeId,
}

impl<Db> Query<AvailableRooms> for Service<Db>
where
    Db: Database<
            Select<By<Option<room::Type>, room::TypeId>>,
            Ok = Option<room::Type>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<read::room::Occupied, stay::Window>>,
            Ok = read::room::Occupied,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Room>, read::room::Available>>,
            Ok = Vec<Room>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Vec<Price>, read::price::Selector>>,
            Ok = Vec<Price>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = read::AvailableRooms;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        AvailableRooms {
            stay,
            room_qty,
            room_type_id,
        }: AvailableRooms,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        _ = self
            .execute(room_type::ById::by(room_type_id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| E::RoomTypeNotExists(room_type_id))
            .map_err(tracerr::wrap!())?;

        // Occupancy lookup fails open: a broken lookup must not block quoting.
        let occupied = match self
            .database()
            .execute(Select(By::<read::room::Occupied, _>::new(stay)))
            .await
        {
            Ok(occupied) => occupied,
            Err(e) => {
                log::warn!(
                    "failed to fetch rooms occupied during {stay}, \
                     considering all rooms free: {e}",
                );
                read::room::Occupied::default()
            }
        };

        let hotel_id = self.config().hotel_id;
        let rooms = self
            .database()
            .execute(Select(By::<Vec<Room>, _>::new(read::room::Available {
                hotel_id,
                type_id: room_type_id,
                excluded: occupied.into(),
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let prices = self
            .database()
            .execute(Select(By::<Vec<Price>, _>::new(read::price::Selector {
                hotel_id,
                room_type_id,
                stay,
            })))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?;

        let available = u32::try_from(rooms.len()).unwrap_or(u32::MAX);
        if available < room_qty {
            return Err(tracerr::new!(E::InsufficientRooms {
                requested: room_qty,
                available,
            }));
        }

        let schedule = Schedule::from_prices(prices);
        let priced = u32::try_from(schedule.len()).unwrap_or(u32::MAX);
        if priced < stay.nights() {
            log::warn!(
                "only {priced} of {} nights during {stay} are priced for \
                 `room::Type(id: {room_type_id})`",
                stay.nights(),
            );
        }
        let total_price = schedule
            .total()
            .and_then(|t| t.checked_mul(room_qty))
            .ok_or(E::PriceOverflow)
            .map_err(tracerr::wrap!())?;

        Ok(read::AvailableRooms {
            room_type_id,
            stay,
            room_qty,
            rooms: rooms.into_iter().map(Into::into).collect(),
            schedule,
            total_price,
        })
    }
}

/// Error of [`AvailableRooms`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`room::Type`] with the provided ID does not exist.
    #[display("`room::Type(id: {_0})` does not exist")]
    #[from(ignore)]
    RoomTypeNotExists(#[error(not(source))] room::TypeId),

    /// Fewer rooms are free than requested.
    #[display(
        "Total available rooms exceeded your requirement: \
         requested {requested}, available {available}"
    )]
    #[from(ignore)]
    InsufficientRooms {
        /// Number of rooms requested.
        requested: u32,

        /// Number of rooms free.
        available: u32,
    },

    /// Total price of the stay doesn't fit into [`Money`].
    #[display("total price of the stay is out of range")]
    #[from(ignore)]
    PriceOverflow,
}

#[cfg(test)]
mod spec {
    use common::{Date, Money};

    use crate::{
        domain::{room, stay},
        infra::database::mock::Mock,
        Config, Query as _, Service,
    };

    use super::{AvailableRooms, ExecutionError};

    fn stay(checkin: &str, checkout: &str) -> stay::Window {
        stay::Window::new(
            checkin.parse::<Date>().unwrap(),
            checkout.parse::<Date>().unwrap(),
        )
        .unwrap()
    }

    fn query(room_qty: u32) -> AvailableRooms {
        AvailableRooms {
            stay: stay("2024-06-01", "2024-06-03"),
            room_qty,
            room_type_id: 1.into(),
        }
    }

    #[tokio::test]
    async fn quotes_free_rooms() {
        let svc = Service::new(Config::default(), Mock::scenario());

        let out = svc.execute(query(2)).await.unwrap();

        assert_eq!(out.total_price, Money::new(4400));
        assert_eq!(out.room_qty, 2);
        assert_eq!(
            out.rooms.iter().map(|r| r.id).collect::<Vec<_>>(),
            [1, 2, 3].map(room::Id::from),
        );
        assert_eq!(out.schedule.len(), 2);
        assert_eq!(out.schedule.total(), Some(Money::new(2200)));
        assert!(out
            .schedule
            .nights()
            .iter()
            .all(|n| n.date.to_string().len() == 10));
    }

    #[tokio::test]
    async fn fails_on_insufficient_rooms() {
        let svc = Service::new(Config::default(), Mock::scenario());

        let err = svc.execute(query(4)).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::InsufficientRooms {
                requested: 4,
                available: 3,
            },
        ));
    }

    #[tokio::test]
    async fn fails_open_on_occupancy_failure() {
        let svc = Service::new(
            Config::default(),
            Mock {
                fail_occupancy: true,
                ..Mock::scenario()
            },
        );

        let out = svc.execute(query(4)).await.unwrap();

        assert_eq!(out.rooms.len(), 4);
        assert_eq!(out.total_price, Money::new(8800));
    }

    #[tokio::test]
    async fn propagates_price_failure() {
        let svc = Service::new(
            Config::default(),
            Mock {
                fail_prices: true,
                ..Mock::scenario()
            },
        );

        let err = svc.execute(query(1)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::Db(_)));
    }

    #[tokio::test]
    async fn fails_on_unknown_room_type() {
        let svc = Service::new(Config::default(), Mock::scenario());

        let err = svc
            .execute(AvailableRooms {
                room_type_id: 42.into(),
                ..query(1)
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::RoomTypeNotExists(id) if *id == 42.into(),
        ));
    }

    #[tokio::test]
    async fn totals_zero_without_prices() {
        let svc = Service::new(Config::default(), Mock::scenario());

        let out = svc
            .execute(AvailableRooms {
                stay: stay("2024-07-01", "2024-07-03"),
                ..query(3)
            })
            .await
            .unwrap();

        assert_eq!(out.rooms.len(), 4);
        assert!(out.schedule.is_empty());
        assert_eq!(out.total_price, Money::ZERO);
    }

    #[tokio::test]
    async fn fails_on_total_overflow() {
        let mut db = Mock::scenario();
        for p in &mut db.prices {
            p.amount = Money::new(i64::MAX / 2);
        }
        let svc = Service::new(Config::default(), db);

        let err = svc.execute(query(2)).await.unwrap_err();

        assert!(matches!(err.as_ref(), ExecutionError::PriceOverflow));
    }
}
