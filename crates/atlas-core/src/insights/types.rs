//! Core types for the Insight Engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Types of insights that can be generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// First visit vs. prior view count
    Familiarity,
    /// Population size fact from the catalog
    Population,
    /// Recall of the user's own rating
    RatingRecall,
    /// Country size matches the preferred population size
    PopulationFit,
    /// Pitch matching the preferred travel style
    TravelStyle,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Familiarity => "familiarity",
            InsightKind::Population => "population",
            InsightKind::RatingRecall => "rating_recall",
            InsightKind::PopulationFit => "population_fit",
            InsightKind::TravelStyle => "travel_style",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "familiarity" => Ok(InsightKind::Familiarity),
            "population" => Ok(InsightKind::Population),
            "rating_recall" => Ok(InsightKind::RatingRecall),
            "population_fit" => Ok(InsightKind::PopulationFit),
            "travel_style" => Ok(InsightKind::TravelStyle),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// One generated insight, tagged with the analyzer that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedInsight {
    pub kind: InsightKind,
    pub text: String,
}

impl GeneratedInsight {
    pub fn new(kind: InsightKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_kind_serialization() {
        assert_eq!(InsightKind::RatingRecall.as_str(), "rating_recall");
        assert_eq!(
            InsightKind::from_str("population").unwrap(),
            InsightKind::Population
        );
        assert_eq!(
            InsightKind::from_str("travel_style").unwrap(),
            InsightKind::TravelStyle
        );
        assert!(InsightKind::from_str("news").is_err());

        let json = serde_json::to_string(&GeneratedInsight::new(InsightKind::Familiarity, "hi"))
            .unwrap();
        assert_eq!(json, r#"{"kind":"familiarity","text":"hi"}"#);
    }
}
