//! [`PromoRooms`] [`Query`] definition.

use common::operations::{By, Select};
#[cfg(doc)]
use common::Money;
use derive_more::{Display, Error, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        promo::{
            self, BookingDateTime, BookingDays, BookingDaysId, Gate, StayDays,
            StayDaysId,
        },
        Promo,
    },
    infra::{database, Database},
    query,
    read::{self, schedule::Discounted},
    Query, Service,
};

/// [`Query`] applying a [`Promo`] to an [`read::AvailableRooms`] quote.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PromoRooms {
    /// ID of the [`Promo`] to apply.
    pub promo_id: promo::Id,

    /// Quote to apply the [`Promo`] to.
    pub rooms: read::AvailableRooms,

    /// [`BookingDateTime`] the booking is being made at.
    pub booked_at: BookingDateTime,
}

impl<Db> Query<PromoRooms> for Service<Db>
where
    Db: Database<
            Select<By<Option<Promo>, promo::Id>>,
            Ok = Option<Promo>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<StayDays>, StayDaysId>>,
            Ok = Option<StayDays>,
            Err = Traced<database::Error>,
        > + Database<
            Select<By<Option<BookingDays>, BookingDaysId>>,
            Ok = Option<BookingDays>,
            Err = Traced<database::Error>,
        >,
{
    type Ok = read::PromoRooms;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        PromoRooms {
            promo_id,
            rooms,
            booked_at,
        }: PromoRooms,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let promo = self
            .execute(query::promo::ById::by(promo_id))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or_else(|| E::PromoNotExists(promo_id))
            .map_err(tracerr::wrap!())?;

        let stay_days = match promo.stay_days_id {
            Some(id) => self
                .database()
                .execute(Select(By::<Option<StayDays>, _>::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            None => None,
        };
        let booking_days = match promo.booking_days_id {
            Some(id) => self
                .database()
                .execute(Select(By::<Option<BookingDays>, _>::new(id)))
                .await
                .map_err(tracerr::map_from_and_wrap!(=> E))?,
            None => None,
        };

        if !promo.is_available()
            || rooms.rooms.is_empty()
            || rooms.room_qty == 0
        {
            return Err(tracerr::new!(E::PromoUnavailable(promo_id)));
        }

        let at = booked_at.at_offset(self.config().utc_offset);
        if let Err(gate) = promo.eligibility(
            booking_days.as_ref(),
            at,
            rooms.schedule.len(),
            rooms.room_qty,
        ) {
            log::debug!(
                "`Promo(id: {promo_id})` rejected at {at} by {gate} gate",
            );
            return Err(tracerr::new!(E::PromoNotApplicable {
                id: promo_id,
                gate,
            }));
        }

        let Discounted {
            schedule,
            savings,
            total,
        } = rooms
            .schedule
            .discount(promo.discount, stay_days.as_ref())
            .ok_or(E::PriceOverflow)
            .map_err(tracerr::wrap!())?;
        log::debug!(
            "`Promo(id: {promo_id})` saves {savings} over {} nights",
            schedule.len(),
        );

        Ok(read::PromoRooms {
            promo_id,
            promo_price: savings,
            rooms: read::AvailableRooms {
                schedule,
                total_price: total,
                ..rooms
            },
        })
    }
}

/// Error of [`PromoRooms`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Database`] error.
    #[display("`Database` operation failed: {_0}")]
    Db(database::Error),

    /// [`Promo`] with the provided ID does not exist.
    #[display("`Promo(id: {_0})` does not exist")]
    #[from(ignore)]
    PromoNotExists(#[error(not(source))] promo::Id),

    /// [`Promo`] is malformed or the booking has no rooms.
    #[display("`Promo(id: {_0})` is currently unavailable")]
    #[from(ignore)]
    PromoUnavailable(#[error(not(source))] promo::Id),

    /// Booking fails one of the [`Promo`] gates.
    #[display("`Promo(id: {id})` can't be used for the request: {gate}")]
    #[from(ignore)]
    PromoNotApplicable {
        /// ID of the [`Promo`].
        id: promo::Id,

        /// [`Gate`] the booking failed.
        #[error(not(source))]
        gate: Gate,
    },

    /// Discounted prices don't fit into [`Money`].
    #[display("discounted price of the stay is out of range")]
    #[from(ignore)]
    PriceOverflow,
}
