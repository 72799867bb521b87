//! [`PromoRooms`] definitions.

use common::Money;

use crate::{domain::promo, read::AvailableRooms};
#[cfg(doc)]
use crate::domain::Promo;

/// [`AvailableRooms`] quote with a [`Promo`] applied.
///
/// The discounted schedule and its total replace the ones of the quote.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PromoRooms {
    /// ID of the applied [`Promo`].
    pub promo_id: promo::Id,

    /// Amount saved by the [`Promo`].
    pub promo_price: Money,

    /// Discounted quote.
    pub rooms: AvailableRooms,
}
