//! [`Price`] definitions.

use common::{Date, Money};

use crate::domain::{hotel, room};

/// Price of a single night in a room of some [`room::Type`] at a hotel.
///
/// There is exactly one [`Price`] per [`Date`] for every hotel and
/// [`room::Type`] combination.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Price {
    /// ID of the hotel this [`Price`] is set by.
    pub hotel_id: hotel::Id,

    /// ID of the [`room::Type`] this [`Price`] applies to.
    pub room_type_id: room::TypeId,

    /// Night this [`Price`] applies to.
    pub date: Date,

    /// Amount to pay for the night.
    pub amount: Money,
}
