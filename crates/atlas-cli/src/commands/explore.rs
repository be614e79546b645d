//! Session command implementations (insights, explore)
//!
//! The CLI plays the host role: it owns one session for the lifetime of the
//! command, validates country names against the catalog, records each action
//! and only then asks the engine for insights.

use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use atlas_core::{
    classify, format_thousands, ActionKind, Catalog, EngineConfig, InsightEngine, LiveFeed,
    LiveSnapshot, PopulationCategory, PreferenceRecord, PreferenceUpdate, Session, SessionStats,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

/// One scripted user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Search(String),
    Click(String),
    Rate(String, i64),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid step '{}': expected kind:argument", s))?;
        let arg = arg.trim();
        if arg.is_empty() {
            bail!("Invalid step '{}': missing argument", s);
        }

        match kind {
            "search" => Ok(Step::Search(arg.to_string())),
            "click" => Ok(Step::Click(arg.to_string())),
            "rate" => {
                let (country, rating) = arg
                    .rsplit_once('=')
                    .ok_or_else(|| anyhow!("Invalid step '{}': expected rate:COUNTRY=N", s))?;
                let rating = rating
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("Invalid rating in step '{}'", s))?;
                Ok(Step::Rate(country.trim().to_string(), rating))
            }
            other => bail!("Unknown step kind '{}' (expected search, click or rate)", other),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExploreOptions {
    pub steps: Vec<String>,
    pub prefs: Vec<String>,
    pub live: bool,
    pub seed: Option<u64>,
}

/// Detail panel for the selected country
#[derive(Debug, Serialize)]
pub struct CountryPanel {
    pub country: String,
    pub population: u64,
    pub category: PopulationCategory,
    pub insights: Vec<String>,
    /// Placeholder data, only when requested
    pub live: Option<LiveSnapshot>,
}

#[derive(Debug, Serialize)]
pub struct ExploreReport {
    pub selected: Option<CountryPanel>,
    pub preferences: PreferenceRecord,
    pub stats: SessionStats,
    pub recent_activity: Vec<String>,
}

fn known_country<'a>(catalog: &Catalog, name: &'a str) -> Result<&'a str> {
    if catalog.contains(name) {
        Ok(name)
    } else {
        bail!("Unknown country: {}", name)
    }
}

/// Apply one step to the session, returning the country it selected
pub fn apply_step(catalog: &Catalog, session: &mut Session, step: &Step) -> Result<String> {
    let (country, action, payload) = match step {
        Step::Search(term) => {
            let first = catalog
                .search(term)
                .into_iter()
                .next()
                .ok_or_else(|| anyhow!("No countries match '{}'", term))?;
            (first.name.as_str(), ActionKind::Search, None)
        }
        Step::Click(name) => (known_country(catalog, name)?, ActionKind::Click, None),
        Step::Rate(name, rating) => (
            known_country(catalog, name)?,
            ActionKind::Rate,
            Some(*rating),
        ),
    };

    session.record(country, action, payload)?;
    Ok(country.to_string())
}

fn panel_for(
    catalog: &Catalog,
    engine: &InsightEngine,
    session: &Session,
    country: &str,
) -> Result<CountryPanel> {
    let population = catalog.lookup(country)?;
    Ok(CountryPanel {
        country: country.to_string(),
        population,
        category: classify(population),
        insights: engine.generate(catalog, session, country),
        live: None,
    })
}

/// Run a scripted session and collect everything the host would render
pub fn run_explore(
    catalog: &Catalog,
    config: &EngineConfig,
    options: &ExploreOptions,
) -> Result<ExploreReport> {
    let steps = options
        .steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    let mut update = PreferenceUpdate::default();
    for assignment in &options.prefs {
        update
            .parse_assignment(assignment)
            .with_context(|| format!("Invalid preference '{}'", assignment))?;
    }

    let mut session = Session::with_config(config);
    session.update_preferences(update)?;

    let engine = InsightEngine::with_config(config);
    let mut selected = None;
    for step in &steps {
        selected = Some(apply_step(catalog, &mut session, step)?);
    }

    let mut panel = selected
        .map(|country| panel_for(catalog, &engine, &session, &country))
        .transpose()?;

    if options.live {
        if let Some(panel) = panel.as_mut() {
            let rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            panel.live = Some(LiveFeed::new(rng).snapshot(catalog, &panel.country));
        }
    }

    Ok(ExploreReport {
        selected: panel,
        preferences: session.preferences().clone(),
        stats: session.stats(),
        recent_activity: session
            .recent(config.recent_limit)
            .iter()
            .map(|e| e.activity_line())
            .collect(),
    })
}

fn print_panel(panel: &CountryPanel) {
    println!();
    println!("🏛️  {}", panel.country);
    println!("   ─────────────────────────────────────────────────────────────");
    println!("   Population: {}", format_thousands(panel.population));
    println!("   {}", panel.category.label());

    println!();
    println!("   🧠 Insights");
    for insight in &panel.insights {
        println!("   💡 {}", insight);
    }

    if let Some(live) = &panel.live {
        println!();
        println!("   📈 Live data (illustrative placeholder)");
        println!(
            "   Growth rate: {:.1}% (+{})",
            live.growth_rate_percent,
            format_thousands(live.projected_increase)
        );
        for headline in &live.headlines {
            println!("   📰 {}", headline);
        }
    }
}

pub fn cmd_insights(
    catalog: &Catalog,
    config: &EngineConfig,
    country: &str,
    json: bool,
) -> Result<()> {
    let session = Session::with_config(config);
    let engine = InsightEngine::with_config(config);
    let panel = panel_for(catalog, &engine, &session, known_country(catalog, country)?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&panel)?);
    } else {
        print_panel(&panel);
        println!();
    }
    Ok(())
}

pub fn cmd_explore(
    catalog: &Catalog,
    config: &EngineConfig,
    options: &ExploreOptions,
    json: bool,
) -> Result<()> {
    let report = run_explore(catalog, config, options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match &report.selected {
        Some(panel) => print_panel(panel),
        None => {
            println!();
            println!("👆 Select a country (click:COUNTRY or search:TERM) to see details!");
        }
    }

    let prefs = &report.preferences;
    println!();
    println!("⚙️  Preferences");
    println!(
        "   Travel style: {}  Budget: {}  Population: {}  Safety: {}/5",
        prefs.travel_style,
        prefs.budget_range,
        prefs.population_preference,
        prefs.preferred_safety_rating
    );

    println!();
    println!("📊 Stats");
    println!("   Countries Explored: {}", report.stats.unique_countries);
    println!("   Total Interactions: {}", report.stats.total_interactions);
    if let Some(avg) = report.stats.average_rating {
        println!("   Average Rating:     {:.1}", avg);
    }
    if let Some(country) = &report.stats.most_viewed_country {
        println!("   Most Viewed:        {}", country);
    }

    println!();
    println!("🕒 Recent Activity");
    if report.recent_activity.is_empty() {
        println!("   Start exploring countries to see your activity!");
    } else {
        for line in &report.recent_activity {
            println!("   {}", line);
        }
    }
    println!();
    Ok(())
}
