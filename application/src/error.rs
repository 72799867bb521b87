//! [`Error`]-related definitions.

use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Response},
    Json,
};
use derive_more::Error as StdError;
use itertools::Itertools as _;
use serde::Serialize;
use service::{infra::database, query};
use tracerr::{Trace, Traced};
use tracing as log;

/// Defines a new error type.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_error {
    (
        enum $name:ident {
            $(
                #[code = $code:literal]
                #[status = $status_code:ident]
                #[message = $message:literal]
                $variant:ident
            ),* $(,)?
        }
    ) => {
        /// Error type.
        #[derive(
            Clone,
            Copy,
            Debug,
            ::derive_more::Display,
            ::derive_more::Error
        )]
        #[repr(u16)]
        pub enum $name {
            $(
                #[display($message)]
                #[doc = $message]
                $variant,
            )*
        }

        impl From<$name> for $crate::Error {
            fn from(err: $name) -> Self {
                match err {
                    $(
                        $name::$variant => Self {
                            code: $code,
                            status_code: ::http::StatusCode::$status_code,
                            message: $message.to_string(),
                            backtrace: None,
                        },
                    )*
                }
            }
        }
    };
}

/// HTTP API [`Error`].
#[derive(Clone, Debug, StdError)]
pub struct Error {
    /// [`Error`] code.
    pub code: Code,

    /// [`http::StatusCode`] of this [`Error`].
    pub status_code: http::StatusCode,

    /// Backtrace of this [`Error`].
    #[error(not(backtrace))]
    pub backtrace: Option<Trace>,

    /// [`Error`] message.
    pub message: String,
}

impl Error {
    /// Create a new [`Error`] representing an internal server error.
    #[must_use]
    pub fn internal(msg: &impl ToString) -> Self {
        Self {
            code: "INTERNAL_SERVER_ERROR",
            status_code: http::StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            backtrace: None,
        }
    }

    /// Create a new [`Error`] representing a malformed request.
    #[must_use]
    pub fn bad_request(msg: &impl ToString) -> Self {
        Self {
            code: "BAD_REQUEST",
            status_code: http::StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            backtrace: None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            code,
            status_code: _,
            backtrace,
            message,
        } = self;

        write!(
            f,
            "[{code}]: {message}{}",
            backtrace
                .iter()
                .format_with("\n", |trace, f| f(&format_args!("{trace}"))),
        )
    }
}

/// JSON body of an [`Error`] response.
#[derive(Debug, Serialize)]
struct Body<'e> {
    /// Always `false`.
    success: bool,

    /// Numeric [`http::StatusCode`].
    status: u16,

    /// [`Error`] code.
    code: Code,

    /// [`Error`] message.
    message: &'e str,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        if self.status_code.is_server_error() {
            log::error!("{self}");
        }

        let body = Body {
            success: false,
            status: self.status_code.as_u16(),
            code: self.code,
            message: &self.message,
        };
        (self.status_code, Json(body)).into_response()
    }
}

/// [`Error`] code.
pub type Code = &'static str;

/// Helper trait for converting types into [`Error`]s.
pub trait AsError {
    /// Tries to convert the type into an [`Error`].
    ///
    /// [`None`] is returned if the type cannot be converted into an [`Error`].
    fn try_as_error(&self) -> Option<Error>;

    /// Converts the type into an [`Error`].
    fn as_error(&self) -> Error
    where
        Self: fmt::Display,
    {
        self.try_as_error()
            .unwrap_or_else(|| Error::internal(&self))
    }

    /// Converts the type into an [`Error`] by consuming it.
    fn into_error(self) -> Error
    where
        Self: fmt::Display + Sized,
    {
        self.as_error()
    }
}

impl<E: AsError> AsError for Traced<E> {
    fn try_as_error(&self) -> Option<Error> {
        let mut error = self.as_ref().try_as_error()?;
        error.backtrace = Some(self.trace().clone());
        Some(error)
    }
}

impl AsError for QueryRejection {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error::bad_request(&self.body_text()))
    }
}

impl AsError for JsonRejection {
    fn try_as_error(&self) -> Option<Error> {
        Some(Error::bad_request(&self.body_text()))
    }
}

impl AsError for database::Error {
    fn try_as_error(&self) -> Option<Error> {
        None
    }
}

impl AsError for query::available_rooms::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "ROOM_TYPE_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "Requested room type does not exist"]
                RoomTypeNotExists,

                #[code = "INSUFFICIENT_ROOMS"]
                #[status = NOT_FOUND]
                #[message = "Total available rooms exceeded your requirement."]
                InsufficientRooms,

                #[code = "PRICE_OUT_OF_RANGE"]
                #[status = UNPROCESSABLE_ENTITY]
                #[message = "Total price of the stay is out of range"]
                PriceOverflow,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::RoomTypeNotExists(_) => {
                Some(Error::RoomTypeNotExists.into())
            }
            Self::InsufficientRooms { .. } => {
                Some(Error::InsufficientRooms.into())
            }
            Self::PriceOverflow => Some(Error::PriceOverflow.into()),
        }
    }
}

impl AsError for query::promo_rooms::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        define_error! {
            enum Error {
                #[code = "PROMO_NOT_EXISTS"]
                #[status = NOT_FOUND]
                #[message = "Sorry, this promo does not exist"]
                PromoNotExists,

                #[code = "PROMO_UNAVAILABLE"]
                #[status = NOT_FOUND]
                #[message = "Sorry, this promo is currently unavailable"]
                PromoUnavailable,

                #[code = "PROMO_NOT_APPLICABLE"]
                #[status = UNPROCESSABLE_ENTITY]
                #[message = "Sorry, this promo can't be used for your request"]
                PromoNotApplicable,

                #[code = "PRICE_OUT_OF_RANGE"]
                #[status = UNPROCESSABLE_ENTITY]
                #[message = "Discounted price of the stay is out of range"]
                PriceOverflow,
            }
        }

        match self {
            Self::Db(e) => e.try_as_error(),
            Self::PromoNotExists(_) => Some(Error::PromoNotExists.into()),
            Self::PromoUnavailable(_) => Some(Error::PromoUnavailable.into()),
            Self::PromoNotApplicable { .. } => {
                Some(Error::PromoNotApplicable.into())
            }
            Self::PriceOverflow => Some(Error::PriceOverflow.into()),
        }
    }
}
