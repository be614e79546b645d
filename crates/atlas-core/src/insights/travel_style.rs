//! Travel Style Insight
//!
//! A one-line pitch for the country in terms of the user's travel style.
//! Only fires once the session has set preferences.

use crate::error::Result;
use crate::models::TravelStyle;

use super::engine::{Insight, InsightContext};
use super::types::InsightKind;

pub struct TravelStyleInsight;

impl TravelStyleInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TravelStyleInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for TravelStyleInsight {
    fn id(&self) -> InsightKind {
        InsightKind::TravelStyle
    }

    fn name(&self) -> &'static str {
        "Travel Style"
    }

    fn analyze(&self, ctx: &InsightContext<'_>) -> Result<Option<String>> {
        let prefs = ctx.session.preferences();
        if !prefs.is_customized() {
            return Ok(None);
        }
        Ok(Some(style_pitch(prefs.travel_style, ctx.country)))
    }
}

fn style_pitch(style: TravelStyle, country: &str) -> String {
    match style {
        TravelStyle::Cultural => format!(
            "Rich heritage! {} offers deep cultural experiences that align with your interests.",
            country
        ),
        TravelStyle::Adventure => format!(
            "Thrill seeker's paradise! {} provides exciting outdoor adventures.",
            country
        ),
        TravelStyle::Business => format!(
            "Professional hub! {} is great for business travel and networking.",
            country
        ),
        TravelStyle::Relaxation => format!(
            "Peaceful escape! {} offers the perfect retreat for relaxation.",
            country
        ),
    }
}
