//! Placeholder live data
//!
//! ILLUSTRATIVE ONLY. Produces a mock growth rate and canned headlines for
//! the "real-time" panel. Output is random and not sourced from any feed, so
//! it is kept apart from the deterministic insight pipeline.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;

/// Mock growth rates are drawn from this half-open range (percent)
pub const GROWTH_RATE_RANGE: std::ops::Range<f64> = 0.5..2.5;

/// Headlines shown per snapshot
pub const HEADLINE_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveSnapshot {
    pub country: String,
    /// Catalog population, 0 for unknown countries
    pub population: u64,
    pub growth_rate_percent: f64,
    /// `population * growth_rate / 100`, truncated
    pub projected_increase: u64,
    pub headlines: Vec<String>,
}

/// Random placeholder generator over any RNG
pub struct LiveFeed<R: Rng> {
    rng: R,
}

impl<R: Rng> LiveFeed<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn snapshot(&mut self, catalog: &Catalog, country: &str) -> LiveSnapshot {
        let population = catalog.lookup(country).unwrap_or(0);
        let growth_rate_percent = self.rng.gen_range(GROWTH_RATE_RANGE);
        let projected_increase = (population as f64 * growth_rate_percent / 100.0) as u64;

        LiveSnapshot {
            country: country.to_string(),
            population,
            growth_rate_percent,
            projected_increase,
            headlines: headlines(country).into_iter().take(HEADLINE_COUNT).collect(),
        }
    }
}

fn headlines(country: &str) -> Vec<String> {
    vec![
        format!("Economic growth continues in {}", country),
        format!("New infrastructure projects announced in {}", country),
        format!("Tourism reaches new heights in {}", country),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snapshot_ranges() {
        let catalog = Catalog::builtin();
        let mut feed = LiveFeed::new(StdRng::seed_from_u64(7));

        for _ in 0..50 {
            let snap = feed.snapshot(&catalog, "France");
            assert!(GROWTH_RATE_RANGE.contains(&snap.growth_rate_percent));
            assert_eq!(snap.population, 64_756_584);
            assert!(snap.projected_increase >= 64_756_584 / 200);
            assert!(snap.projected_increase <= 64_756_584 * 25 / 1000);
            assert_eq!(
                snap.headlines,
                vec![
                    "Economic growth continues in France",
                    "New infrastructure projects announced in France"
                ]
            );
        }
    }

    #[test]
    fn test_seeded_feed_is_reproducible() {
        let catalog = Catalog::builtin();
        let a = LiveFeed::new(StdRng::seed_from_u64(42)).snapshot(&catalog, "Peru");
        let b = LiveFeed::new(StdRng::seed_from_u64(42)).snapshot(&catalog, "Peru");
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_country() {
        let catalog = Catalog::builtin();
        let snap = LiveFeed::new(StdRng::seed_from_u64(1)).snapshot(&catalog, "Atlantis");
        assert_eq!(snap.population, 0);
        assert_eq!(snap.projected_increase, 0);
    }
}
