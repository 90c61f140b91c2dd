//! Home size categories.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::QuoteError;

/// Home size being moved, used to scale the transport price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveSize {
    /// Single room with a shared or en-suite bathroom.
    #[serde(rename = "bedsitter")]
    Bedsitter,
    /// One-bedroom home.
    #[serde(rename = "one bedroom")]
    OneBedroom,
    /// Studio apartment.
    #[serde(rename = "studio")]
    Studio,
    /// Two-bedroom home.
    #[serde(rename = "two bedroom")]
    TwoBedroom,
}

impl MoveSize {
    /// Returns the standard price multiplier for this size.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            Self::Bedsitter => 1.0,
            Self::OneBedroom => 1.5,
            Self::Studio => 1.2,
            Self::TwoBedroom => 2.0,
        }
    }

    /// Returns the size as the form value string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bedsitter => "bedsitter",
            Self::OneBedroom => "one bedroom",
            Self::Studio => "studio",
            Self::TwoBedroom => "two bedroom",
        }
    }

    /// Returns a human-readable label, e.g. "One Bedroom".
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bedsitter => "Bedsitter",
            Self::OneBedroom => "One Bedroom",
            Self::Studio => "Studio",
            Self::TwoBedroom => "Two Bedroom",
        }
    }

    /// Returns all sizes in form order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Bedsitter,
            Self::OneBedroom,
            Self::Studio,
            Self::TwoBedroom,
        ]
    }
}

impl std::fmt::Display for MoveSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a form value case-insensitively. `-` and `_` count as spaces, and
/// the numeric forms "1 bedroom" and "2 bedroom" are accepted.
impl FromStr for MoveSize {
    type Err = QuoteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "bedsitter" => Ok(Self::Bedsitter),
            "one bedroom" | "1 bedroom" => Ok(Self::OneBedroom),
            "studio" => Ok(Self::Studio),
            "two bedroom" | "2 bedroom" => Ok(Self::TwoBedroom),
            _ => Err(QuoteError::InvalidCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(MoveSize::Bedsitter.multiplier(), 1.0);
        assert_eq!(MoveSize::OneBedroom.multiplier(), 1.5);
        assert_eq!(MoveSize::Studio.multiplier(), 1.2);
        assert_eq!(MoveSize::TwoBedroom.multiplier(), 2.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("bedsitter".parse::<MoveSize>().unwrap(), MoveSize::Bedsitter);
        assert_eq!("One Bedroom".parse::<MoveSize>().unwrap(), MoveSize::OneBedroom);
        assert_eq!("one-bedroom".parse::<MoveSize>().unwrap(), MoveSize::OneBedroom);
        assert_eq!("TWO_BEDROOM".parse::<MoveSize>().unwrap(), MoveSize::TwoBedroom);
        assert_eq!(" studio ".parse::<MoveSize>().unwrap(), MoveSize::Studio);
        assert_eq!("1 bedroom".parse::<MoveSize>().unwrap(), MoveSize::OneBedroom);
        assert_eq!("2-Bedroom".parse::<MoveSize>().unwrap(), MoveSize::TwoBedroom);
    }

    #[test]
    fn test_parse_unknown_category() {
        let err = "mansion".parse::<MoveSize>().unwrap_err();
        assert!(matches!(err, QuoteError::InvalidCategory(ref s) if s == "mansion"));
        assert!("".parse::<MoveSize>().is_err());
    }

    #[test]
    fn test_serde_uses_form_values() {
        let json = serde_json::to_string(&MoveSize::TwoBedroom).unwrap();
        assert_eq!(json, r#""two bedroom""#);

        let size: MoveSize = serde_json::from_str(r#""one bedroom""#).unwrap();
        assert_eq!(size, MoveSize::OneBedroom);
        assert!(serde_json::from_str::<MoveSize>(r#""castle""#).is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for size in MoveSize::all() {
            assert_eq!(size.to_string().parse::<MoveSize>().unwrap(), *size);
        }
    }
}
