//! Familiarity Insight
//!
//! Tells the user whether this is their first look at a country or how many
//! times they have viewed it before. Always produces an insight.

use crate::error::Result;

use super::engine::{Insight, InsightContext};
use super::types::InsightKind;

pub struct FamiliarityInsight;

impl FamiliarityInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FamiliarityInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for FamiliarityInsight {
    fn id(&self) -> InsightKind {
        InsightKind::Familiarity
    }

    fn name(&self) -> &'static str {
        "Familiarity"
    }

    fn analyze(&self, ctx: &InsightContext<'_>) -> Result<Option<String>> {
        let views = ctx.prior_history().len();
        let text = if views == 0 {
            format!("First time exploring {}! Click to learn more.", ctx.country)
        } else {
            format!("You've viewed {} {} time(s) before.", ctx.country, views)
        };
        Ok(Some(text))
    }
}
