//! Parks as they appear in a trip.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DomainError, find_park};

/// Coarse visit-complexity classification of a park.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    /// Tier of a park by name, defaulting to C for unlisted parks.
    pub fn for_park(name: &str) -> Tier {
        find_park(name).map(|p| p.tier).unwrap_or(Tier::C)
    }

    /// Base weight used by the day allocator.
    pub fn base_weight(self) -> f64 {
        match self {
            Tier::A => 2.5,
            Tier::B => 1.75,
            Tier::C => 1.0,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        };
        f.write_str(s)
    }
}

/// A park selected for a trip.
///
/// `name` is unique within a trip. `days` is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripPark {
    pub name: String,
    pub position: usize,
    pub tier: Tier,
    pub days: u32,
}

impl TripPark {
    /// Create a park entry with one allocated day.
    pub fn new(name: &str, position: usize) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyParkName);
        }
        Ok(Self {
            name: name.to_string(),
            position,
            tier: Tier::for_park(name),
            days: 1,
        })
    }

    /// NPS park code, if the park is in the catalog.
    pub fn code(&self) -> Option<&'static str> {
        find_park(&self.name).map(|p| p.code)
    }
}
