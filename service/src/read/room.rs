//! [`Room`] read definitions.

use std::collections::HashSet;

use derive_more::{Deref, From, Into};

use crate::domain::{hotel, room, Room};
#[cfg(doc)]
use crate::domain::stay;
#[cfg(doc)]
use crate::read::AvailableRooms;

/// Selector of the [`Room`]s free for booking.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Available {
    /// ID of the hotel the [`Room`]s belong to.
    pub hotel_id: hotel::Id,

    /// ID of the [`room::Type`] of the [`Room`]s.
    pub type_id: room::TypeId,

    /// IDs of the [`Room`]s to leave out.
    pub excluded: HashSet<room::Id>,
}

/// IDs of the [`Room`]s occupied on any night of a [`stay::Window`].
#[derive(Clone, Debug, Default, Deref, Eq, From, Into, PartialEq)]
pub struct Occupied(HashSet<room::Id>);

/// [`Room`] offered by an [`AvailableRooms`] quote.
///
/// Carries no [`room::Status`], as a quote echoed back by a client doesn't
/// provide one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Offered {
    /// ID of the [`Room`].
    pub id: room::Id,

    /// Number of the [`Room`].
    pub number: room::Number,
}

impl From<Room> for Offered {
    fn from(room: Room) -> Self {
        Self {
            id: room.id,
            number: room.number,
        }
    }
}
