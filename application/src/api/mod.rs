//! HTTP API definitions.

pub mod available_rooms;
pub mod promo_rooms;
pub mod room;

use common::Date;
use service::domain::stay;

use crate::{define_error, Error};

pub use self::{
    available_rooms::available_rooms, promo_rooms::promo_rooms,
    room::AvailableRooms,
};

define_error! {
    enum RequestError {
        #[code = "INVALID_ROOM_QTY"]
        #[status = BAD_REQUEST]
        #[message = "`room_qty` must be a positive number"]
        ZeroRoomQty,

        #[code = "INVALID_STAY"]
        #[status = BAD_REQUEST]
        #[message = "`checkin_date` must be before `checkout_date`"]
        EmptyStay,

        #[code = "INVALID_PRICE"]
        #[status = BAD_REQUEST]
        #[message = "Nightly `price` must not be negative"]
        NegativePrice,
    }
}

/// Validates the requested `room_qty` and stay dates.
///
/// # Errors
///
/// If `room_qty` is zero or `checkin` is not before `checkout`.
pub fn validate(
    room_qty: u32,
    checkin: Date,
    checkout: Date,
) -> Result<stay::Window, Error> {
    if room_qty == 0 {
        return Err(RequestError::ZeroRoomQty.into());
    }
    stay::Window::new(checkin, checkout)
        .ok_or_else(|| RequestError::EmptyStay.into())
}
