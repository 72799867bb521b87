//! `GET /available-rooms` endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query},
    Extension, Json,
};
use common::Date;
use serde::Deserialize;
use service::{domain::room, query, Query as _};
use tracing as log;

use crate::{api, AsError as _, Error, Service};

/// Query parameters of the `GET /available-rooms` endpoint.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Params {
    /// First night of the stay.
    pub checkin_date: Date,

    /// Day the stay ends.
    pub checkout_date: Date,

    /// Number of rooms requested.
    pub room_qty: u32,

    /// ID of the requested room type.
    pub room_type_id: room::TypeId,
}

/// Quotes the free rooms of a room type for a stay.
///
/// # Errors
///
/// Possible error codes:
/// - `BAD_REQUEST`, `INVALID_ROOM_QTY`, `INVALID_STAY` - malformed request;
/// - `ROOM_TYPE_NOT_EXISTS` - the requested room type does not exist;
/// - `INSUFFICIENT_ROOMS` - fewer rooms are free than requested;
/// - `PRICE_OUT_OF_RANGE` - the total price overflows.
#[tracing::instrument(
    skip_all,
    fields(
        checkin_date = tracing::field::Empty,
        checkout_date = tracing::field::Empty,
        room_qty = tracing::field::Empty,
        room_type_id = tracing::field::Empty,
    ),
)]
pub async fn available_rooms(
    Extension(service): Extension<Service>,
    params: Result<Query<Params>, QueryRejection>,
) -> Result<Json<api::AvailableRooms>, Error> {
    let Query(Params {
        checkin_date,
        checkout_date,
        room_qty,
        room_type_id,
    }) = params.map_err(|e| e.into_error())?;

    let span = tracing::Span::current();
    _ = span
        .record("checkin_date", tracing::field::display(checkin_date))
        .record("checkout_date", tracing::field::display(checkout_date))
        .record("room_qty", room_qty)
        .record("room_type_id", tracing::field::display(room_type_id));

    let stay = api::validate(room_qty, checkin_date, checkout_date)?;

    let quote = service
        .execute(query::AvailableRooms {
            stay,
            room_qty,
            room_type_id,
        })
        .await
        .map_err(|e| e.into_error())?;
    log::debug!(
        "quoted {} free rooms for {}",
        quote.rooms.len(),
        quote.total_price,
    );

    Ok(Json(quote.into()))
}
