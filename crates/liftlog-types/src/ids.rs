//! Strongly-typed record identifiers.
//!
//! Snapshot and demand ids wrap [`Uuid`] in distinct newtypes so the two
//! streams cannot be cross-wired at compile time. Ids are UUID v7, which
//! sorts by creation time and keeps the primary-key index append-friendly;
//! they are minted in the application before the row is inserted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declares one identifier newtype with its constructors and conversions.
macro_rules! declare_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Mint a fresh time-ordered (UUID v7) identifier.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Unwrap to the raw [`Uuid`], e.g. for a query bind.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

declare_id! {
    /// Identifier of a stored elevator state snapshot.
    StateId
}

declare_id! {
    /// Identifier of a stored floor-call demand.
    DemandId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_are_nonzero_and_unique() {
        let a = StateId::new();
        let b = StateId::new();
        assert_ne!(a.into_inner(), Uuid::nil());
        assert_ne!(a, b);
    }

    #[test]
    fn id_round_trips_through_uuid() {
        let raw = Uuid::now_v7();
        let id = DemandId::from(raw);
        assert_eq!(Uuid::from(id), raw);
        assert_eq!(id.to_string(), raw.to_string());
    }
}
