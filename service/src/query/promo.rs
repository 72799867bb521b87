//! [`Query`] collection related to a single [`Promo`].

use common::operations::By;

use crate::domain::{promo, Promo};
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`Promo`] by its [`promo::Id`].
pub type ById = DatabaseQuery<By<Option<Promo>, promo::Id>>;
