//! Insight Engine - Personalized Country Insights
//!
//! Produces a short, ordered list of human-readable insights for a country by
//! combining static catalog facts with the session's interaction history.
//! The pipeline is deterministic: no randomness and no I/O.
//!
//! ## Built-in Insight Types (in generation order)
//!
//! - **Familiarity** - First visit, or how many times the country was viewed
//! - **Population** - Population size fact, phrased per size category
//! - **Rating Recall** - The user's first rating of the country
//! - **Population Fit** - Country size matches the preferred size
//! - **Travel Style** - Pitch for the preferred travel style
//!
//! The two preference analyzers stay silent until the session has set
//! preferences, and run last so the factual insights win the cap.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use atlas_core::{Catalog, InsightEngine, Session, ActionKind};
//!
//! let catalog = Catalog::builtin();
//! let mut session = Session::new();
//! session.record("Tuvalu", ActionKind::Click, None)?;
//! let insights = InsightEngine::new().generate(&catalog, &session, "Tuvalu");
//! ```

pub mod engine;
pub mod familiarity;
pub mod population;
pub mod population_fit;
pub mod rating;
pub mod travel_style;
pub mod types;

pub use engine::{Insight, InsightContext, InsightEngine};
pub use familiarity::FamiliarityInsight;
pub use population::PopulationInsight;
pub use population_fit::PopulationFitInsight;
pub use rating::RatingRecallInsight;
pub use travel_style::TravelStyleInsight;
pub use types::{GeneratedInsight, InsightKind};
