//! [`Room`] definitions.

use common::define_kind;
use derive_more::{AsRef, Display, From, FromStr, Into};
#[cfg(feature = "postgres")]
use postgres_types::{FromSql, ToSql};
use serde::{Deserialize, Serialize};

use crate::domain::hotel;

/// Bookable hotel room.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    /// ID of this [`Room`].
    pub id: Id,

    /// ID of the hotel this [`Room`] belongs to.
    pub hotel_id: hotel::Id,

    /// ID of the [`Type`] of this [`Room`].
    pub type_id: TypeId,

    /// [`Number`] of this [`Room`] displayed to guests.
    pub number: Number,

    /// [`Status`] of this [`Room`].
    pub status: Status,
}

/// ID of a [`Room`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Id(i32);

/// Number of a [`Room`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct Number(i32);

define_kind! {
    #[doc = "Status of a [`Room`]."]
    enum Status {
        #[doc = "[`Room`] may be booked."]
        InService = 1,

        #[doc = "[`Room`] is under maintenance."]
        OutOfService = 2,
    }
}

/// Type of a [`Room`] (standard, deluxe, suite, etc).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Type {
    /// ID of this [`Type`].
    pub id: TypeId,

    /// [`TypeName`] of this [`Type`].
    pub name: TypeName,
}

/// ID of a [`Type`].
#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
#[cfg_attr(feature = "postgres", derive(ToSql, FromSql), postgres(transparent))]
pub struct TypeId(i32);

/// Name of a [`Type`].
#[derive(AsRef, Clone, Debug, Display, Eq, PartialEq)]
#[as_ref(str, String)]
#[cfg_attr(feature = "postgres", derive(FromSql, ToSql), postgres(transparent))]
pub struct TypeName(String);

impl TypeName {
    /// Maximum length of a [`TypeName`].
    const MAX_LEN: usize = 50;

    /// Creates a new [`TypeName`] if the provided `name` is valid.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        let name = name.as_ref().trim();
        (!name.is_empty() && name.chars().count() <= Self::MAX_LEN)
            .then(|| Self(name.to_owned()))
    }
}

#[cfg(test)]
mod spec {
    use super::{Status, TypeName};

    #[test]
    fn type_name_is_trimmed_and_bounded() {
        assert_eq!(
            TypeName::new("  Deluxe ").map(|n| n.to_string()),
            Some("Deluxe".into()),
        );
        assert!(TypeName::new("   ").is_none());
        assert!(TypeName::new("x".repeat(51)).is_none());
        assert!(TypeName::new("x".repeat(50)).is_some());
    }

    #[test]
    fn status_roundtrips_through_u8() {
        assert_eq!(Status::from_u8(Status::InService.u8()), Some(Status::InService));
        assert_eq!(Status::from_u8(7), None);
        assert_eq!(Status::OutOfService.to_string(), "OUT_OF_SERVICE");
    }
}
