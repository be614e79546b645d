//! Insight Engine - orchestrates insight generation

use crate::catalog::Catalog;
use crate::config::{EngineConfig, DEFAULT_MAX_INSIGHTS};
use crate::error::Result;
use crate::models::InteractionEvent;
use crate::session::Session;

use super::types::{GeneratedInsight, InsightKind};
use super::{
    FamiliarityInsight, PopulationFitInsight, PopulationInsight, RatingRecallInsight,
    TravelStyleInsight,
};

/// Context provided to insight analyzers
pub struct InsightContext<'a> {
    /// Static country facts
    pub catalog: &'a Catalog,
    /// The requesting session
    pub session: &'a Session,
    /// Country the insights are for
    pub country: &'a str,
    prior: Vec<&'a InteractionEvent>,
}

impl<'a> InsightContext<'a> {
    pub fn new(catalog: &'a Catalog, session: &'a Session, country: &'a str) -> Self {
        Self {
            catalog,
            session,
            country,
            prior: session.prior_history_for(country),
        }
    }

    /// Interactions with the country before the triggering one, oldest first
    pub fn prior_history(&self) -> &[&'a InteractionEvent] {
        &self.prior
    }
}

/// Trait for insight analyzers
pub trait Insight: Send + Sync {
    /// Unique identifier for this insight type
    fn id(&self) -> InsightKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Produce this analyzer's insight, if it applies
    fn analyze(&self, ctx: &InsightContext<'_>) -> Result<Option<String>>;
}

/// The main insight engine. Analyzers run in registration order.
pub struct InsightEngine {
    insights: Vec<Box<dyn Insight>>,
    max_insights: usize,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create a new insight engine with built-in insight types
    pub fn new() -> Self {
        let mut engine = Self::empty(DEFAULT_MAX_INSIGHTS);

        // Order here is output order
        engine.register(Box::new(FamiliarityInsight::new()));
        engine.register(Box::new(PopulationInsight::new()));
        engine.register(Box::new(RatingRecallInsight::new()));
        engine.register(Box::new(PopulationFitInsight::new()));
        engine.register(Box::new(TravelStyleInsight::new()));

        engine
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        let mut engine = Self::new();
        engine.max_insights = config.max_insights.max(1);
        engine
    }

    /// Engine with no analyzers registered
    pub fn empty(max_insights: usize) -> Self {
        Self {
            insights: vec![],
            max_insights: max_insights.max(1),
        }
    }

    /// Register an insight analyzer after the existing ones
    pub fn register(&mut self, insight: Box<dyn Insight>) {
        self.insights.push(insight);
    }

    pub fn max_insights(&self) -> usize {
        self.max_insights
    }

    /// Insight texts for `country`, at most `max_insights`, in analyzer order
    pub fn generate(&self, catalog: &Catalog, session: &Session, country: &str) -> Vec<String> {
        self.generate_detailed(catalog, session, country)
            .into_iter()
            .map(|i| i.text)
            .collect()
    }

    /// Like [`generate`](Self::generate) but tagged with the producing analyzer
    pub fn generate_detailed(
        &self,
        catalog: &Catalog,
        session: &Session,
        country: &str,
    ) -> Vec<GeneratedInsight> {
        let ctx = InsightContext::new(catalog, session, country);
        let mut generated = Vec::with_capacity(self.max_insights);

        for insight in &self.insights {
            if generated.len() >= self.max_insights {
                break;
            }

            match insight.analyze(&ctx) {
                Ok(Some(text)) => generated.push(GeneratedInsight::new(insight.id(), text)),
                Ok(None) => {}
                Err(e) if e.is_not_found() => {
                    tracing::debug!(
                        insight = insight.id().as_str(),
                        analyzer = insight.name(),
                        country,
                        "Skipping insight: {}",
                        e
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        insight = insight.id().as_str(),
                        analyzer = insight.name(),
                        country,
                        error = %e,
                        "Insight analysis failed"
                    );
                }
            }
        }

        tracing::debug!(country, count = generated.len(), "Insight generation complete");
        generated
    }

    /// Get list of registered insight types
    pub fn insight_kinds(&self) -> Vec<InsightKind> {
        self.insights.iter().map(|i| i.id()).collect()
    }
}
