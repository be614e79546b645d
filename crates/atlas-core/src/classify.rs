//! Population size classifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::PopulationPreference;

/// Populations strictly above this are `Large`
pub const LARGE_THRESHOLD: u64 = 100_000_000;

/// Populations strictly above this (and not `Large`) are `Substantial`
pub const SUBSTANTIAL_THRESHOLD: u64 = 10_000_000;

/// Populations below this suit a `small` size preference
pub const SMALL_SIZE_LIMIT: u64 = 50_000_000;

/// Populations below this (and not small) suit a `medium` size preference
pub const MEDIUM_SIZE_LIMIT: u64 = 200_000_000;

/// Discrete population bucket. Ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulationCategory {
    Moderate,
    Substantial,
    Large,
}

impl PopulationCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopulationCategory::Moderate => "moderate",
            PopulationCategory::Substantial => "substantial",
            PopulationCategory::Large => "large",
        }
    }

    /// Label shown on the country detail panel
    pub fn label(&self) -> &'static str {
        match self {
            PopulationCategory::Moderate => "Moderately Populated",
            PopulationCategory::Substantial => "Substantially Populated",
            PopulationCategory::Large => "Highly Populated",
        }
    }
}

impl fmt::Display for PopulationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PopulationCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moderate" => Ok(PopulationCategory::Moderate),
            "substantial" => Ok(PopulationCategory::Substantial),
            "large" => Ok(PopulationCategory::Large),
            _ => Err(format!("Unknown population category: {}", s)),
        }
    }
}

/// Map a population to its size bucket
pub fn classify(population: u64) -> PopulationCategory {
    if population > LARGE_THRESHOLD {
        PopulationCategory::Large
    } else if population > SUBSTANTIAL_THRESHOLD {
        PopulationCategory::Substantial
    } else {
        PopulationCategory::Moderate
    }
}

/// Size preference a population satisfies.
///
/// Coarser than [`classify`]; used to match a country against the
/// session's `population_preference`.
pub fn size_preference(population: u64) -> PopulationPreference {
    if population < SMALL_SIZE_LIMIT {
        PopulationPreference::Small
    } else if population < MEDIUM_SIZE_LIMIT {
        PopulationPreference::Medium
    } else {
        PopulationPreference::Large
    }
}
