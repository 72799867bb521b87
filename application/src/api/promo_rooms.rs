//! `POST /promo-rooms` endpoint.

use axum::{extract::rejection::JsonRejection, Extension, Json};
use common::Money;
use serde::{Deserialize, Serialize};
use service::{
    domain::promo::{self, BookingDateTime},
    query, read, Query as _,
};

use crate::{api, AsError as _, Error, Service};

/// Body of the `POST /promo-rooms` request.
#[derive(Clone, Debug, Deserialize)]
pub struct Request {
    /// ID of the promo to apply.
    pub promo_id: promo::Id,

    /// Quote previously returned by `GET /available-rooms`.
    #[serde(flatten)]
    pub rooms: api::AvailableRooms,
}

/// Quote with a promo applied.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PromoRooms {
    /// ID of the applied promo.
    pub promo_id: promo::Id,

    /// Amount saved by the promo.
    pub promo_price: Money,

    /// Discounted quote.
    #[serde(flatten)]
    pub rooms: api::AvailableRooms,
}

impl From<read::PromoRooms> for PromoRooms {
    fn from(value: read::PromoRooms) -> Self {
        let read::PromoRooms {
            promo_id,
            promo_price,
            rooms,
        } = value;

        Self {
            promo_id,
            promo_price,
            rooms: rooms.into(),
        }
    }
}

/// Applies a promo to a quote, booked right now.
///
/// # Errors
///
/// Possible error codes:
/// - `BAD_REQUEST`, `INVALID_ROOM_QTY`, `INVALID_STAY`, `INVALID_PRICE` -
///   malformed request;
/// - `PROMO_NOT_EXISTS` - the promo does not exist;
/// - `PROMO_UNAVAILABLE` - the promo is malformed or no rooms are provided;
/// - `PROMO_NOT_APPLICABLE` - the booking fails one of the promo rules;
/// - `PRICE_OUT_OF_RANGE` - the discounted prices overflow.
#[tracing::instrument(
    skip_all,
    fields(promo_id = tracing::field::Empty),
)]
pub async fn promo_rooms(
    Extension(service): Extension<Service>,
    body: Result<Json<Request>, JsonRejection>,
) -> Result<Json<PromoRooms>, Error> {
    let Json(Request { promo_id, rooms }) =
        body.map_err(|e| e.into_error())?;
    _ = tracing::Span::current()
        .record("promo_id", tracing::field::display(promo_id));

    let stay =
        api::validate(rooms.room_qty, rooms.checkin_date, rooms.checkout_date)?;
    let rooms = rooms.into_read(stay)?;

    service
        .execute(query::PromoRooms {
            promo_id,
            rooms,
            booked_at: BookingDateTime::now(),
        })
        .await
        .map_err(|e| e.into_error())
        .map(|out| Json(out.into()))
}
