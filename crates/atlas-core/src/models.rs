//! Data models for Atlas
//!
//! Interaction events, session preferences and the small enums that back
//! them. Enums follow the `as_str` / `Display` / `FromStr` pattern so they can
//! round-trip through CLI arguments and JSON alike.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lowest accepted rating / safety rating
pub const MIN_RATING: i64 = 1;
/// Highest accepted rating / safety rating
pub const MAX_RATING: i64 = 5;

/// Identifier of an interaction event, unique within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of tracked user action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Search,
    Click,
    Rate,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Search => "search",
            ActionKind::Click => "click",
            ActionKind::Rate => "rate",
        }
    }

    /// Capitalized form used in the activity feed
    pub fn title(&self) -> &'static str {
        match self {
            ActionKind::Search => "Search",
            ActionKind::Click => "Click",
            ActionKind::Rate => "Rate",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "search" => Ok(ActionKind::Search),
            "click" => Ok(ActionKind::Click),
            "rate" => Ok(ActionKind::Rate),
            _ => Err(Error::ContractViolation(format!(
                "unknown action kind: {}",
                s
            ))),
        }
    }
}

/// A single tracked user action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionEvent {
    pub id: EventId,
    pub country: String,
    pub action: ActionKind,
    pub timestamp: DateTime<Utc>,
    /// Optional numeric payload (the 1-5 rating for `rate`)
    pub payload: Option<i64>,
}

impl InteractionEvent {
    /// Rating carried by a `rate` event, if any
    pub fn rating(&self) -> Option<i64> {
        match self.action {
            ActionKind::Rate => self.payload,
            _ => None,
        }
    }

    /// Activity feed line in local time, e.g. `14:02:11 - Click France`
    pub fn activity_line(&self) -> String {
        self.activity_line_in(&chrono::Local)
    }

    /// Activity feed line rendered in the given timezone
    pub fn activity_line_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        format!(
            "{} - {} {}",
            self.timestamp.with_timezone(tz).format("%H:%M:%S"),
            self.action.title(),
            self.country
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    #[default]
    Cultural,
    Adventure,
    Business,
    Relaxation,
}

impl TravelStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            TravelStyle::Cultural => "cultural",
            TravelStyle::Adventure => "adventure",
            TravelStyle::Business => "business",
            TravelStyle::Relaxation => "relaxation",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TravelStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cultural" => Ok(TravelStyle::Cultural),
            "adventure" => Ok(TravelStyle::Adventure),
            "business" => Ok(TravelStyle::Business),
            "relaxation" => Ok(TravelStyle::Relaxation),
            _ => Err(format!("Unknown travel style: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetRange {
    Low,
    #[default]
    Medium,
    High,
}

impl BudgetRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::Low => "low",
            BudgetRange::Medium => "medium",
            BudgetRange::High => "high",
        }
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(BudgetRange::Low),
            "medium" => Ok(BudgetRange::Medium),
            "high" => Ok(BudgetRange::High),
            _ => Err(format!("Unknown budget range: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PopulationPreference {
    Small,
    #[default]
    Medium,
    Large,
}

impl PopulationPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            PopulationPreference::Small => "small",
            PopulationPreference::Medium => "medium",
            PopulationPreference::Large => "large",
        }
    }
}

impl fmt::Display for PopulationPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PopulationPreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "small" => Ok(PopulationPreference::Small),
            "medium" => Ok(PopulationPreference::Medium),
            "large" => Ok(PopulationPreference::Large),
            _ => Err(format!("Unknown population preference: {}", s)),
        }
    }
}

/// Per-session preferences. Last write wins per field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceRecord {
    pub travel_style: TravelStyle,
    pub budget_range: BudgetRange,
    pub favorite_regions: BTreeSet<String>,
    pub preferred_safety_rating: u8,
    pub population_preference: PopulationPreference,
    /// When any field was last written
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            travel_style: TravelStyle::default(),
            budget_range: BudgetRange::default(),
            favorite_regions: BTreeSet::new(),
            preferred_safety_rating: 3,
            population_preference: PopulationPreference::default(),
            updated_at: None,
        }
    }
}

impl PreferenceRecord {
    /// Whether the user has set any preference in this session
    pub fn is_customized(&self) -> bool {
        self.updated_at.is_some()
    }

    /// Merge supplied fields. Nothing is written if the update is invalid.
    pub fn apply(&mut self, update: PreferenceUpdate) -> Result<()> {
        update.validate()?;
        if update.is_empty() {
            return Ok(());
        }

        if let Some(style) = update.travel_style {
            self.travel_style = style;
        }
        if let Some(budget) = update.budget_range {
            self.budget_range = budget;
        }
        if let Some(regions) = update.favorite_regions {
            self.favorite_regions = regions;
        }
        if let Some(rating) = update.preferred_safety_rating {
            self.preferred_safety_rating = rating;
        }
        if let Some(pref) = update.population_preference {
            self.population_preference = pref;
        }
        self.updated_at = Some(Utc::now());
        Ok(())
    }
}

/// Partial preference update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreferenceUpdate {
    pub travel_style: Option<TravelStyle>,
    pub budget_range: Option<BudgetRange>,
    pub favorite_regions: Option<BTreeSet<String>>,
    pub preferred_safety_rating: Option<u8>,
    pub population_preference: Option<PopulationPreference>,
}

impl PreferenceUpdate {
    /// Parse an update from a JSON object such as `{"travel_style": "adventure"}`
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let update: Self = serde_json::from_value(value)
            .map_err(|e| Error::ContractViolation(format!("invalid preference update: {}", e)))?;
        update.validate()?;
        Ok(update)
    }

    /// Set one field from its string form
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key.trim() {
            "travel_style" => {
                self.travel_style = Some(value.parse().map_err(Error::ContractViolation)?)
            }
            "budget_range" => {
                self.budget_range = Some(value.parse().map_err(Error::ContractViolation)?)
            }
            "population_preference" => {
                self.population_preference =
                    Some(value.parse().map_err(Error::ContractViolation)?)
            }
            "preferred_safety_rating" => {
                let rating = value.parse::<u8>().map_err(|_| {
                    Error::ContractViolation(format!("invalid safety rating: {}", value))
                })?;
                self.preferred_safety_rating = Some(rating);
            }
            "favorite_regions" => {
                self.favorite_regions = Some(
                    value
                        .split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect(),
                )
            }
            other => {
                return Err(Error::ContractViolation(format!(
                    "unknown preference: {}",
                    other
                )))
            }
        }
        self.validate()
    }

    /// Parse and apply a `key=value` assignment
    pub fn parse_assignment(&mut self, assignment: &str) -> Result<()> {
        let (key, value) = assignment.split_once('=').ok_or_else(|| {
            Error::ContractViolation(format!("expected key=value, got: {}", assignment))
        })?;
        self.set(key, value)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(rating) = self.preferred_safety_rating {
            let rating = i64::from(rating);
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(Error::ContractViolation(format!(
                    "safety rating must be between {} and {}, got {}",
                    MIN_RATING, MAX_RATING, rating
                )));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Aggregate counters for one session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub total_interactions: usize,
    pub unique_countries: usize,
    /// Mean of all rating payloads, if any rating was given
    pub average_rating: Option<f64>,
    /// Most frequently interacted country (ties go to the earliest seen)
    pub most_viewed_country: Option<String>,
}

/// Format an integer with comma thousands separators (`11396` → `11,396`)
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_parse() {
        assert_eq!("click".parse::<ActionKind>().unwrap(), ActionKind::Click);
        assert_eq!(ActionKind::Rate.as_str(), "rate");
        let err = "hover".parse::<ActionKind>().unwrap_err();
        assert!(matches!(err, Error::ContractViolation(_)));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(50), "50");
        assert_eq!(format_thousands(825), "825");
        assert_eq!(format_thousands(1_549), "1,549");
        assert_eq!(format_thousands(11_396), "11,396");
        assert_eq!(format_thousands(1_425_671_352), "1,425,671,352");
    }

    #[test]
    fn test_preference_defaults() {
        let prefs = PreferenceRecord::default();
        assert_eq!(prefs.travel_style, TravelStyle::Cultural);
        assert_eq!(prefs.budget_range, BudgetRange::Medium);
        assert!(prefs.favorite_regions.is_empty());
        assert_eq!(prefs.preferred_safety_rating, 3);
        assert_eq!(prefs.population_preference, PopulationPreference::Medium);
        assert!(prefs.updated_at.is_none());
    }

    #[test]
    fn test_preference_update_from_json() {
        let update =
            PreferenceUpdate::from_json(serde_json::json!({"travel_style": "adventure"})).unwrap();
        assert_eq!(update.travel_style, Some(TravelStyle::Adventure));
        assert!(update.budget_range.is_none());
    }

    #[test]
    fn test_preference_update_rejects_bad_input() {
        let bad_enum = PreferenceUpdate::from_json(serde_json::json!({"travel_style": "party"}));
        assert!(matches!(bad_enum, Err(Error::ContractViolation(_))));

        let unknown_key = PreferenceUpdate::from_json(serde_json::json!({"visa": "any"}));
        assert!(matches!(unknown_key, Err(Error::ContractViolation(_))));

        let bad_rating =
            PreferenceUpdate::from_json(serde_json::json!({"preferred_safety_rating": 9}));
        assert!(matches!(bad_rating, Err(Error::ContractViolation(_))));
    }

    #[test]
    fn test_parse_assignment() {
        let mut update = PreferenceUpdate::default();
        update.parse_assignment("budget_range=high").unwrap();
        update
            .parse_assignment("favorite_regions=East Asia, South Asia")
            .unwrap();
        assert_eq!(update.budget_range, Some(BudgetRange::High));
        assert_eq!(update.favorite_regions.as_ref().unwrap().len(), 2);

        assert!(update.parse_assignment("budget_range").is_err());
        assert!(update.parse_assignment("budget_range=cheap").is_err());
        assert!(update.parse_assignment("preferred_safety_rating=0").is_err());
    }

    #[test]
    fn test_apply_invalid_update_writes_nothing() {
        let mut prefs = PreferenceRecord::default();
        let update = PreferenceUpdate {
            travel_style: Some(TravelStyle::Business),
            preferred_safety_rating: Some(6),
            ..Default::default()
        };
        assert!(prefs.apply(update).is_err());
        assert_eq!(prefs, PreferenceRecord::default());
    }

    #[test]
    fn test_activity_line() {
        let event = InteractionEvent {
            id: EventId(1),
            country: "France".to_string(),
            action: ActionKind::Click,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 14, 2, 11).unwrap(),
            payload: None,
        };
        assert_eq!(event.activity_line_in(&Utc), "14:02:11 - Click France");
        assert!(event.activity_line().ends_with(" - Click France"));
        assert_eq!(event.rating(), None);
    }
}
