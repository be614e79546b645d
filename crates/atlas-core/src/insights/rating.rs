//! Rating Recall Insight
//!
//! Reminds the user of the first rating they gave a country.

use crate::error::Result;

use super::engine::{Insight, InsightContext};
use super::types::InsightKind;

pub struct RatingRecallInsight;

impl RatingRecallInsight {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RatingRecallInsight {
    fn default() -> Self {
        Self::new()
    }
}

impl Insight for RatingRecallInsight {
    fn id(&self) -> InsightKind {
        InsightKind::RatingRecall
    }

    fn name(&self) -> &'static str {
        "Rating Recall"
    }

    fn analyze(&self, ctx: &InsightContext<'_>) -> Result<Option<String>> {
        let first = ctx.prior_history().iter().find_map(|e| e.rating());

        Ok(first.map(|rating| {
            let remark = if rating >= 4 {
                "Seems like a favorite!"
            } else if rating >= 3 {
                "Worth another look!"
            } else {
                "Maybe give it another chance?"
            };
            format!("You rated {} {}/5 stars. {}", ctx.country, rating, remark)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::ActionKind;
    use crate::session::Session;

    fn analyze(session: &Session, country: &str) -> Option<String> {
        let catalog = Catalog::builtin();
        let ctx = InsightContext::new(&catalog, session, country);
        RatingRecallInsight::new().analyze(&ctx).unwrap()
    }

    #[test]
    fn test_no_rating() {
        let mut session = Session::new();
        session.record("Chile", ActionKind::Click, None).unwrap();
        session.record("Peru", ActionKind::Click, None).unwrap();
        assert!(analyze(&session, "Chile").is_none());
    }

    #[test]
    fn test_first_rating_is_recalled() {
        let mut session = Session::new();
        session.record("Chile", ActionKind::Rate, Some(5)).unwrap();
        session.record("Chile", ActionKind::Rate, Some(1)).unwrap();
        session.record("Peru", ActionKind::Click, None).unwrap();
        assert_eq!(
            analyze(&session, "Chile").unwrap(),
            "You rated Chile 5/5 stars. Seems like a favorite!"
        );
    }

    #[test]
    fn test_triggering_rating_is_not_recalled() {
        let mut session = Session::new();
        session.record("Chile", ActionKind::Rate, Some(3)).unwrap();
        assert!(analyze(&session, "Chile").is_none());

        session.record("Chile", ActionKind::Click, None).unwrap();
        assert_eq!(
            analyze(&session, "Chile").unwrap(),
            "You rated Chile 3/5 stars. Worth another look!"
        );
    }
}
