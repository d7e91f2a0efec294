//! Strongly-typed identifiers for Cherry Servers resources.
//!
//! Most resources are addressed by integer ids; IP addresses use UUIDs.
//! Wrapping them prevents passing a project id where a server id belongs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Macro to generate integer identifier types.
macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the raw id.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                s.trim()
                    .parse()
                    .map(Self)
                    .map_err(|_| Error::InvalidId(format!("{}: {s}", stringify!($name))))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

/// Macro to generate UUID identifier types.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $doc:expr) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Wrap a [`Uuid`].
            #[must_use]
            pub const fn new(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner [`Uuid`].
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parses an id from a string.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is not a valid UUID.
            pub fn parse_str(input: &str) -> Result<Self> {
                Uuid::parse_str(input)
                    .map(Self)
                    .map_err(|_| Error::InvalidId(format!("{}: {input}", stringify!($name))))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_str(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(ServerId, "Server id");
numeric_id!(ProjectId, "Project id");
numeric_id!(TeamId, "Team id");
numeric_id!(PlanId, "Plan id");
numeric_id!(StorageId, "Block storage volume id");
numeric_id!(SshKeyId, "SSH key id");
numeric_id!(BackupStorageId, "Backup storage id");
uuid_id!(IpAddressId, "IP address id");

#[cfg(test)]
mod tests {
    use super::*;

    const IP_ID: &str = "e3f75899-1db3-b794-137f-78c5ee9096af";

    #[test]
    fn numeric_id_round_trips_through_strings() {
        let id: ServerId = "383531".parse().unwrap();
        assert_eq!(id.get(), 383_531);
        assert_eq!(id.to_string(), "383531");
    }

    #[test]
    fn numeric_id_rejects_garbage() {
        let err = "abc".parse::<ProjectId>().unwrap_err();
        assert!(matches!(err, Error::InvalidId(ref m) if m.contains("ProjectId")));
    }

    #[test]
    fn numeric_id_serializes_as_bare_number() {
        let json = serde_json::to_value(TeamId::new(123)).unwrap();
        assert_eq!(json, serde_json::json!(123));
        let back: TeamId = serde_json::from_value(json).unwrap();
        assert_eq!(back, TeamId::from(123));
    }

    #[test]
    fn uuid_id_parses_api_ids() {
        let id = IpAddressId::parse_str(IP_ID).unwrap();
        assert_eq!(id.to_string(), IP_ID);
        assert!(IpAddressId::parse_str("not-a-uuid").is_err());
    }

    #[test]
    fn uuid_id_serializes_as_string() {
        let id: IpAddressId = IP_ID.parse().unwrap();
        assert_eq!(serde_json::to_value(id).unwrap(), serde_json::json!(IP_ID));
    }
}
