//! Domain definitions.

pub mod hotel;
pub mod price;
pub mod promo;
pub mod room;
pub mod stay;

pub use self::{price::Price, promo::Promo, room::Room};
