//! Room quote representations.

use common::{Date, Money};
use serde::{Deserialize, Serialize};
use service::{
    domain::{room, stay},
    read::{self, schedule::Night},
};

use crate::{api::RequestError, Error};

/// Quote of the free rooms for a stay.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AvailableRooms {
    /// Number of rooms requested.
    pub room_qty: u32,

    /// ID of the requested room type.
    pub room_type_id: room::TypeId,

    /// First night of the stay.
    pub checkin_date: Date,

    /// Day the stay ends.
    pub checkout_date: Date,

    /// Total price of the stay.
    pub total_price: Money,

    /// Free rooms along with their nightly prices.
    pub available_rooms: Vec<AvailableRoom>,
}

impl From<read::AvailableRooms> for AvailableRooms {
    fn from(value: read::AvailableRooms) -> Self {
        let read::AvailableRooms {
            room_type_id,
            stay,
            room_qty,
            rooms,
            schedule,
            total_price,
        } = value;

        let price = schedule
            .nights()
            .iter()
            .copied()
            .map(NightPrice::from)
            .collect::<Vec<_>>();

        Self {
            room_qty,
            room_type_id,
            checkin_date: stay.checkin(),
            checkout_date: stay.checkout(),
            total_price,
            available_rooms: rooms
                .into_iter()
                .map(|r| AvailableRoom {
                    room_id: r.id,
                    room_number: r.number,
                    price: price.clone(),
                })
                .collect(),
        }
    }
}

impl AvailableRooms {
    /// Converts this quote back into a [`read::AvailableRooms`], once its stay
    /// is validated.
    ///
    /// Every room shares the same schedule, so only the prices of the first
    /// room are taken.
    ///
    /// # Errors
    ///
    /// If any room has a negative nightly price.
    pub fn into_read(
        self,
        stay: stay::Window,
    ) -> Result<read::AvailableRooms, Error> {
        let Self {
            room_qty,
            room_type_id,
            checkin_date: _,
            checkout_date: _,
            total_price,
            available_rooms,
        } = self;

        if available_rooms
            .iter()
            .flat_map(|r| &r.price)
            .any(|n| n.price.is_negative())
        {
            return Err(RequestError::NegativePrice.into());
        }

        let schedule = available_rooms
            .first()
            .map(|r| r.price.iter().copied().map(Night::from).collect())
            .unwrap_or_default();
        let rooms = available_rooms
            .into_iter()
            .map(|r| read::room::Offered {
                id: r.room_id,
                number: r.room_number,
            })
            .collect();

        Ok(read::AvailableRooms {
            room_type_id,
            stay,
            room_qty,
            rooms,
            schedule,
            total_price,
        })
    }
}

/// Free room with its nightly prices.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AvailableRoom {
    /// ID of the room.
    pub room_id: room::Id,

    /// Number of the room.
    pub room_number: room::Number,

    /// Nightly prices of the stay.
    pub price: Vec<NightPrice>,
}

/// Price of a single night.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct NightPrice {
    /// Night being priced.
    pub date: Date,

    /// Price of the night.
    pub price: Money,
}

impl From<Night> for NightPrice {
    fn from(Night { date, price }: Night) -> Self {
        Self { date, price }
    }
}

impl From<NightPrice> for Night {
    fn from(NightPrice { date, price }: NightPrice) -> Self {
        Self { date, price }
    }
}
