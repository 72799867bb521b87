//! [`AvailableRooms`] definitions.

use common::Money;

use crate::{
    domain::{room, stay},
    read::{room::Offered, Schedule},
};

/// Quote of the free rooms of some [`room::Type`] for a stay.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AvailableRooms {
    /// ID of the requested [`room::Type`].
    pub room_type_id: room::TypeId,

    /// Requested [`stay::Window`].
    pub stay: stay::Window,

    /// Requested number of rooms.
    pub room_qty: u32,

    /// Free rooms.
    pub rooms: Vec<Offered>,

    /// Nightly [`Schedule`] shared by every room.
    pub schedule: Schedule,

    /// Total price of the stay.
    pub total_price: Money,
}
