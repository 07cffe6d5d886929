//! Common types used across the farm records workspace

use thiserror::Error;
use uuid::Uuid;

/// Identifier carried by every farm entity
pub type EntityId = Uuid;

/// First 8 hex characters of an id, as shown in listings
pub fn short_id(id: &EntityId) -> String {
    id.simple().to_string()[..8].to_string()
}

/// Error returned when text does not name a variant of a farm enumeration
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind}: '{input}'")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub input: String,
}

/// Implements `Display` and `FromStr` for an enumeration that exposes
/// `ALL` and `as_str()`. Parsing is case-insensitive and accepts spaces or
/// dashes in place of underscores.
macro_rules! impl_enum_text {
    ($ty:ty, $kind:literal) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = $crate::types::ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|variant| variant.as_str() == wanted)
                    .ok_or_else(|| $crate::types::ParseEnumError {
                        kind: $kind,
                        input: s.to_string(),
                    })
            }
        }
    };
}

pub(crate) use impl_enum_text;

/// Comma-separated list of variant names, used in console prompts
pub fn variant_list<T: std::fmt::Display>(variants: &[T]) -> String {
    variants
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
