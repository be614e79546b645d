//! Atlas Core Library
//!
//! Interaction & insight engine for the Atlas country explorer:
//! - Static country catalog (name → population)
//! - Population size classifier
//! - Session-scoped interaction store and preferences
//! - Insight engine producing short personalized insights
//! - Map data builder for the choropleth renderer
//! - Placeholder live data (illustrative, non-deterministic)

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod insights;
pub mod live;
pub mod map;
pub mod models;
pub mod session;

pub use catalog::{Catalog, CountryRecord};
pub use classify::{classify, size_preference, PopulationCategory};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use insights::{GeneratedInsight, Insight, InsightContext, InsightEngine, InsightKind};
pub use live::{LiveFeed, LiveSnapshot};
pub use map::MapRow;
pub use models::{
    format_thousands, ActionKind, BudgetRange, EventId, InteractionEvent, PopulationPreference,
    PreferenceRecord, PreferenceUpdate, SessionStats, TravelStyle,
};
pub use session::{Session, SessionId, SessionRegistry};
