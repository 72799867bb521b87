//! [`Query`] collection related to a single [`room::Type`].

use common::operations::By;

use crate::domain::room;
#[cfg(doc)]
use crate::Query;

use super::DatabaseQuery;

/// Queries a [`room::Type`] by its [`room::TypeId`].
pub type ById = DatabaseQuery<By<Option<room::Type>, room::TypeId>>;
