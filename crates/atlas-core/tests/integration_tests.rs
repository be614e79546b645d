//! Integration tests for atlas-core
//!
//! These tests exercise the full record → generate → render workflow the way
//! a host application drives it.

use atlas_core::{
    classify, map, ActionKind, Catalog, EngineConfig, Error, InsightEngine, PopulationCategory,
    PreferenceRecord, PreferenceUpdate, Session, SessionRegistry, TravelStyle,
};

// =============================================================================
// Catalog & Classifier
// =============================================================================

#[test]
fn test_every_catalog_country_classifies() {
    let catalog = Catalog::builtin();
    for record in catalog.all() {
        let category = classify(record.population);
        assert!(matches!(
            category,
            PopulationCategory::Large | PopulationCategory::Substantial | PopulationCategory::Moderate
        ));
    }
}

#[test]
fn test_tuvalu_scenario() {
    let catalog = Catalog::from_entries([("Tuvalu", 11_396u64)]).unwrap();
    assert_eq!(classify(11_396), PopulationCategory::Moderate);

    let session = Session::new();
    let insights = InsightEngine::new().generate(&catalog, &session, "Tuvalu");
    assert_eq!(
        insights,
        vec![
            "First time exploring Tuvalu! Click to learn more.",
            "Tuvalu is a smaller country with 11,396 people.",
        ]
    );
}

// =============================================================================
// Session Workflow
// =============================================================================

#[test]
fn test_record_then_generate_workflow() {
    let catalog = Catalog::builtin();
    let engine = InsightEngine::new();
    let mut session = Session::new();

    session.record("Brazil", ActionKind::Search, None).unwrap();
    let first = engine.generate(&catalog, &session, "Brazil");
    assert_eq!(first[0], "First time exploring Brazil! Click to learn more.");
    assert_eq!(
        first[1],
        "Brazil is a highly populated country with 216,422,446 people."
    );

    session.record("Brazil", ActionKind::Click, None).unwrap();
    let second = engine.generate(&catalog, &session, "Brazil");
    assert_eq!(second[0], "You've viewed Brazil 1 time(s) before.");
    assert!(second.len() <= 3);
}

#[test]
fn test_generate_never_exceeds_three() {
    let catalog = Catalog::builtin();
    let engine = InsightEngine::new();
    let mut session = Session::new();

    for record in catalog.all().iter().take(20) {
        session.record(&record.name, ActionKind::Click, None).unwrap();
        session
            .record(&record.name, ActionKind::Rate, Some(4))
            .unwrap();
        session.record(&record.name, ActionKind::Click, None).unwrap();
        assert!(engine.generate(&catalog, &session, &record.name).len() <= 3);
    }
}

#[test]
fn test_stats_and_activity_feed() {
    let mut session = Session::new();
    for country in ["France", "France", "Japan"] {
        session.record(country, ActionKind::Click, None).unwrap();
    }

    let stats = session.stats();
    assert_eq!(stats.total_interactions, 3);
    assert_eq!(stats.unique_countries, 2);

    let feed: Vec<_> = session.recent(5).iter().map(|e| e.activity_line()).collect();
    assert_eq!(feed.len(), 3);
    assert!(feed[0].ends_with(" - Click Japan"));
    assert!(feed[2].ends_with(" - Click France"));
}

#[test]
fn test_preference_update_keeps_other_defaults() {
    let mut session = Session::new();
    let update =
        PreferenceUpdate::from_json(serde_json::json!({"travel_style": "adventure"})).unwrap();
    session.update_preferences(update).unwrap();

    let prefs = session.preferences();
    let defaults = PreferenceRecord::default();
    assert_eq!(prefs.travel_style, TravelStyle::Adventure);
    assert_eq!(prefs.budget_range, defaults.budget_range);
    assert_eq!(prefs.favorite_regions, defaults.favorite_regions);
    assert_eq!(prefs.preferred_safety_rating, defaults.preferred_safety_rating);
    assert_eq!(prefs.population_preference, defaults.population_preference);
}

#[test]
fn test_preferences_personalize_insights() {
    let catalog = Catalog::builtin();
    let engine = InsightEngine::new();

    let plain = Session::new();
    let mut personalized = Session::new();
    personalized
        .update_preferences(
            PreferenceUpdate::from_json(serde_json::json!({
                "travel_style": "adventure",
                "population_preference": "small",
            }))
            .unwrap(),
        )
        .unwrap();

    let before = engine.generate(&catalog, &plain, "Tuvalu");
    let after = engine.generate(&catalog, &personalized, "Tuvalu");
    assert_eq!(
        before,
        vec![
            "First time exploring Tuvalu! Click to learn more.",
            "Tuvalu is a smaller country with 11,396 people.",
        ]
    );
    assert_ne!(before, after);
    assert_eq!(after[..2], before[..]);
    assert_eq!(
        after[2],
        "Perfect size! Tuvalu's small population fits your preference for small-sized countries."
    );

    personalized.reset();
    assert_eq!(engine.generate(&catalog, &personalized, "Tuvalu"), before);
}

#[test]
fn test_sessions_do_not_share_history() {
    let catalog = Catalog::builtin();
    let engine = InsightEngine::new();
    let mut registry = SessionRegistry::new(EngineConfig::default());
    let alice = registry.open();
    let bob = registry.open();

    {
        let session = registry.get_mut(alice).unwrap();
        session.record("Kenya", ActionKind::Click, None).unwrap();
        session.record("Kenya", ActionKind::Click, None).unwrap();
    }

    let alice_view = engine.generate(&catalog, registry.get(alice).unwrap(), "Kenya");
    let bob_view = engine.generate(&catalog, registry.get(bob).unwrap(), "Kenya");
    assert_eq!(alice_view[0], "You've viewed Kenya 1 time(s) before.");
    assert_eq!(bob_view[0], "First time exploring Kenya! Click to learn more.");
}

// =============================================================================
// Map Data
// =============================================================================

#[test]
fn test_map_rows_round_trip_population() {
    let catalog = Catalog::builtin();
    let rows = map::build(&catalog).unwrap();
    assert_eq!(rows, map::build(&catalog).unwrap());

    for (row, record) in rows.iter().zip(catalog.all()) {
        let restored = 10f64.powf(row.log_population).round() as u64;
        assert_eq!(restored, record.population);
    }
}

#[test]
fn test_map_rejects_zero_population() {
    let catalog = Catalog::from_entries([("Tuvalu", 11_396u64), ("Empty", 0)]).unwrap();
    let err = map::build(&catalog).unwrap_err();
    assert!(matches!(err, Error::ValueKind(_)));
    assert!(err.to_string().contains("Empty"));
}
