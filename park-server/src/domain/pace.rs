//! Trip pace preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// How densely the user wants to pack their days.
///
/// Pace scales the allocator's park weights: a relaxed trip spreads the
/// same parks over more days, a packed one squeezes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Balanced,
    Packed,
}

impl Pace {
    /// Weight multiplier applied by the day allocator.
    pub fn multiplier(self) -> f64 {
        match self {
            Pace::Relaxed => 1.2,
            Pace::Balanced => 1.0,
            Pace::Packed => 0.9,
        }
    }

    /// Lowercase identifier used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Pace::Relaxed => "relaxed",
            Pace::Balanced => "balanced",
            Pace::Packed => "packed",
        }
    }

    /// Human-readable label for the itinerary header.
    pub fn label(self) -> &'static str {
        match self {
            Pace::Relaxed => "Relaxed pace",
            Pace::Balanced => "Balanced pace",
            Pace::Packed => "Packed pace",
        }
    }

    /// Rough number of activities per day to suggest.
    pub fn activities_hint(self) -> &'static str {
        match self {
            Pace::Relaxed => "1-2 activities per day",
            Pace::Balanced => "2-3 activities per day",
            Pace::Packed => "3-4 activities per day",
        }
    }
}

impl FromStr for Pace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relaxed" => Ok(Pace::Relaxed),
            "balanced" | "" => Ok(Pace::Balanced),
            "packed" => Ok(Pace::Packed),
            other => Err(DomainError::UnknownPace(other.to_string())),
        }
    }
}

impl fmt::Display for Pace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipliers() {
        assert_eq!(Pace::Relaxed.multiplier(), 1.2);
        assert_eq!(Pace::Balanced.multiplier(), 1.0);
        assert_eq!(Pace::Packed.multiplier(), 0.9);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Relaxed".parse::<Pace>().unwrap(), Pace::Relaxed);
        assert_eq!(" PACKED ".parse::<Pace>().unwrap(), Pace::Packed);
        assert_eq!("".parse::<Pace>().unwrap(), Pace::Balanced);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!(matches!(
            "leisurely".parse::<Pace>(),
            Err(DomainError::UnknownPace(_))
        ));
    }

    #[test]
    fn default_is_balanced() {
        assert_eq!(Pace::default(), Pace::Balanced);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for pace in [Pace::Relaxed, Pace::Balanced, Pace::Packed] {
            assert_eq!(pace.to_string().parse::<Pace>().unwrap(), pace);
        }
    }
}
