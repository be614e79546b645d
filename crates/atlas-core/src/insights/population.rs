//! Population Insight
//!
//! States the country's population, phrased by size category. Countries
//! missing from the catalog are skipped.

use crate::classify::{classify, PopulationCategory};
use crate::error::Result;
use crate::models::format_thousands;

use super::engine::{Insight, InsightContext};
use super::types::InsightKind;

pub struct PopulationInsight;

impl PopulationInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PopulationInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for PopulationInsight {
    fn id(&self) -> InsightKind {
        InsightKind::Population
    }

    fn name(&self) -> &'static str {
        "Population"
    }

    fn analyze(&self, ctx: &InsightContext<'_>) -> Result<Option<String>> {
        let population = ctx.catalog.lookup(ctx.country)?;
        Ok(Some(population_fact(ctx.country, population)))
    }
}

/// Population sentence for a country, e.g. "Peru has a substantial population of ..."
pub fn population_fact(country: &str, population: u64) -> String {
    let people = format_thousands(population);
    match classify(population) {
        PopulationCategory::Large => format!(
            "{} is a highly populated country with {} people.",
            country, people
        ),
        PopulationCategory::Substantial => format!(
            "{} has a substantial population of {} people.",
            country, people
        ),
        PopulationCategory::Moderate => {
            format!("{} is a smaller country with {} people.", country, people)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::session::Session;

    #[test]
    fn test_population_templates() {
        assert_eq!(
            population_fact("India", 1_417_173_173),
            "India is a highly populated country with 1,417,173,173 people."
        );
        assert_eq!(
            population_fact("Peru", 33_715_471),
            "Peru has a substantial population of 33,715,471 people."
        );
        assert_eq!(
            population_fact("Tuvalu", 11_396),
            "Tuvalu is a smaller country with 11,396 people."
        );
    }

    #[test]
    fn test_missing_country_is_not_found() {
        let catalog = Catalog::builtin();
        let session = Session::new();
        let ctx = InsightContext::new(&catalog, &session, "Atlantis");

        let err = PopulationInsight::new().analyze(&ctx).unwrap_err();
        assert!(err.is_not_found());
    }
}
