//! Read entities definitions.

pub mod available_rooms;
pub mod price;
pub mod promo_rooms;
pub mod room;
pub mod schedule;

pub use self::{
    available_rooms::AvailableRooms, promo_rooms::PromoRooms,
    schedule::Schedule,
};
