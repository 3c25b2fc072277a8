use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CatalogError;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            Serialize,
            Deserialize,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                $name(Uuid::new_v4())
            }

            pub fn from_uuid(id: Uuid) -> Self {
                $name(id)
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                $name(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = CatalogError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                if raw.is_empty() {
                    return Err(CatalogError::InvalidInput(
                        concat!($label, " ID cannot be empty").to_string(),
                    ));
                }
                Uuid::parse_str(raw).map($name).map_err(|err| {
                    CatalogError::InvalidInput(format!(
                        concat!("invalid ", $label, " ID {:?}: {}"),
                        raw, err
                    ))
                })
            }
        }
    };
}

uuid_id!(
    /// Identifier of a TV series.
    SeriesID,
    "series"
);
uuid_id!(
    /// Identifier of a season; unique across all series.
    SeasonID,
    "season"
);
uuid_id!(
    /// Identifier of an episode; unique across all seasons.
    EpisodeID,
    "episode"
);
uuid_id!(
    /// Identifier of a user account.
    UserID,
    "user"
);
