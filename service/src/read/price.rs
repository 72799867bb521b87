//! [`Price`] read definitions.

use crate::domain::{hotel, room, stay};
#[cfg(doc)]
use crate::domain::Price;

/// Selector of the [`Price`]s covering every night of a [`stay::Window`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Selector {
    /// ID of the hotel setting the [`Price`]s.
    pub hotel_id: hotel::Id,

    /// ID of the [`room::Type`] the [`Price`]s apply to.
    pub room_type_id: room::TypeId,

    /// [`stay::Window`] the [`Price`]s should cover.
    pub stay: stay::Window,
}
