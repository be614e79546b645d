//! Population Fit Insight
//!
//! Points out when a country's size matches the population size the user
//! said they prefer. Only fires once the session has set preferences.

use crate::classify::size_preference;
use crate::error::Result;

use super::engine::{Insight, InsightContext};
use super::types::InsightKind;

pub struct PopulationFitInsight;

impl PopulationFitInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PopulationFitInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for PopulationFitInsight {
    fn id(&self) -> InsightKind {
        InsightKind::PopulationFit
    }

    fn name(&self) -> &'static str {
        "Population Fit"
    }

    fn analyze(&self, ctx: &InsightContext<'_>) -> Result<Option<String>> {
        let prefs = ctx.session.preferences();
        if !prefs.is_customized() {
            return Ok(None);
        }

        let size = size_preference(ctx.catalog.lookup(ctx.country)?);
        if size != prefs.population_preference {
            return Ok(None);
        }

        Ok(Some(format!(
            "Perfect size! {}'s {} population fits your preference for {}-sized countries.",
            ctx.country, size, prefs.population_preference
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{PopulationPreference, PreferenceUpdate};
    use crate::session::Session;

    fn session_preferring(size: PopulationPreference) -> Session {
        let mut session = Session::new();
        session
            .update_preferences(PreferenceUpdate {
                population_preference: Some(size),
                ..Default::default()
            })
            .unwrap();
        session
    }

    fn analyze(session: &Session, country: &str) -> Result<Option<String>> {
        let catalog = Catalog::builtin();
        let ctx = InsightContext::new(&catalog, session, country);
        PopulationFitInsight::new().analyze(&ctx)
    }

    #[test]
    fn test_matching_size() {
        let session = session_preferring(PopulationPreference::Small);
        assert_eq!(
            analyze(&session, "Tuvalu").unwrap().unwrap(),
            "Perfect size! Tuvalu's small population fits your preference for small-sized countries."
        );

        let session = session_preferring(PopulationPreference::Large);
        assert!(analyze(&session, "India").unwrap().is_some());
        assert!(analyze(&session, "Tuvalu").unwrap().is_none());
    }

    #[test]
    fn test_silent_without_preferences() {
        // Tuvalu is small, the default preference is medium, Japan is medium
        let session = Session::new();
        assert!(analyze(&session, "Japan").unwrap().is_none());
        assert!(analyze(&session, "Tuvalu").unwrap().is_none());
    }

    #[test]
    fn test_unknown_country_is_not_found() {
        let session = session_preferring(PopulationPreference::Small);
        assert!(analyze(&session, "Atlantis").unwrap_err().is_not_found());
    }
}
