//! Session-scoped interaction store
//!
//! A [`Session`] owns one user's interaction log and preference record. The
//! host creates one per logical session and passes it by reference into the
//! engine; nothing here is process-global. [`SessionRegistry`] keys sessions
//! for hosts that serve more than one.
//!
//! The log is append-only with a retention cap: once `history_capacity` events
//! are held, recording a new one drops the oldest.

use std::collections::{HashMap, VecDeque};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::models::{
    ActionKind, EventId, InteractionEvent, PreferenceRecord, PreferenceUpdate, SessionStats,
    MAX_RATING, MIN_RATING,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logical user's interaction log and preferences
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    created_at: DateTime<Utc>,
    events: VecDeque<InteractionEvent>,
    capacity: usize,
    next_id: u64,
    preferences: PreferenceRecord,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    pub fn with_config(config: &EngineConfig) -> Self {
        Self::with_capacity(config.history_capacity)
    }

    /// Session retaining at most `capacity` events (minimum 1)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            events: VecDeque::new(),
            capacity: capacity.max(1),
            next_id: 1,
            preferences: PreferenceRecord::default(),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an interaction stamped with the current time.
    ///
    /// A `rate` payload must be a rating between 1 and 5.
    pub fn record(
        &mut self,
        country: &str,
        action: ActionKind,
        payload: Option<i64>,
    ) -> Result<EventId> {
        if action == ActionKind::Rate {
            if let Some(rating) = payload {
                if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                    return Err(Error::ContractViolation(format!(
                        "rating must be between {} and {}, got {}",
                        MIN_RATING, MAX_RATING, rating
                    )));
                }
            }
        }

        // Wall clock may step backwards; keep the log non-decreasing
        let now = Utc::now();
        let timestamp = match self.events.back() {
            Some(last) if last.timestamp > now => last.timestamp,
            _ => now,
        };

        let id = EventId(self.next_id);
        self.next_id += 1;

        if self.events.len() == self.capacity {
            if let Some(dropped) = self.events.pop_front() {
                tracing::debug!(
                    session = %self.id,
                    event = %dropped.id,
                    "History capacity reached, dropping oldest interaction"
                );
            }
        }

        self.events.push_back(InteractionEvent {
            id,
            country: country.to_string(),
            action,
            timestamp,
            payload,
        });

        tracing::debug!(
            session = %self.id,
            event = %id,
            country,
            action = action.as_str(),
            "Recorded interaction"
        );

        Ok(id)
    }

    /// Record with the action given in string form (`"search"`, `"click"`, `"rate"`)
    pub fn record_action(
        &mut self,
        country: &str,
        action: &str,
        payload: Option<i64>,
    ) -> Result<EventId> {
        let action: ActionKind = action.parse()?;
        self.record(country, action, payload)
    }

    /// All retained events for a country, oldest first
    pub fn history_for(&self, country: &str) -> Vec<&InteractionEvent> {
        self.events.iter().filter(|e| e.country == country).collect()
    }

    /// Events for a country that precede the current request.
    ///
    /// Callers record an action and then ask for insights, so when the most
    /// recent event in the session concerns `country` it is the triggering
    /// event and is left out.
    pub fn prior_history_for(&self, country: &str) -> Vec<&InteractionEvent> {
        let mut history = self.history_for(country);
        if self.latest().is_some_and(|e| e.country == country) {
            history.pop();
        }
        history
    }

    /// Up to `n` events, most recent first
    pub fn recent(&self, n: usize) -> Vec<&InteractionEvent> {
        self.events.iter().rev().take(n).collect()
    }

    pub fn latest(&self) -> Option<&InteractionEvent> {
        self.events.back()
    }

    /// Retained events, oldest first
    pub fn events(&self) -> impl Iterator<Item = &InteractionEvent> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Counters over the retained log
    pub fn stats(&self) -> SessionStats {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut rating_sum = 0i64;
        let mut rating_count = 0usize;

        for event in &self.events {
            match counts.iter_mut().find(|(c, _)| *c == event.country) {
                Some((_, n)) => *n += 1,
                None => counts.push((event.country.as_str(), 1)),
            }
            if let Some(rating) = event.rating() {
                rating_sum += rating;
                rating_count += 1;
            }
        }

        // First-seen order is preserved in `counts`, so the earliest wins ties
        let most_viewed_country = counts
            .iter()
            .fold(None::<(&str, usize)>, |best, &(country, n)| match best {
                Some((_, best_n)) if best_n >= n => best,
                _ => Some((country, n)),
            })
            .map(|(country, _)| country.to_string());

        SessionStats {
            total_interactions: self.events.len(),
            unique_countries: counts.len(),
            average_rating: (rating_count > 0).then(|| rating_sum as f64 / rating_count as f64),
            most_viewed_country,
        }
    }

    pub fn preferences(&self) -> &PreferenceRecord {
        &self.preferences
    }

    /// Merge supplied preference fields (last write wins per field)
    pub fn update_preferences(&mut self, update: PreferenceUpdate) -> Result<()> {
        self.preferences.apply(update)?;
        tracing::debug!(session = %self.id, "Updated preferences");
        Ok(())
    }

    /// Forget all interactions and preferences.
    ///
    /// Event ids keep increasing so ids stay unique for the session's lifetime.
    pub fn reset(&mut self) {
        let dropped = self.events.len();
        self.events.clear();
        self.preferences = PreferenceRecord::default();
        tracing::debug!(session = %self.id, dropped, "Reset session data");
    }
}

/// Sessions keyed by id, one per logical user session
#[derive(Debug, Default)]
pub struct SessionRegistry {
    config: EngineConfig,
    sessions: HashMap<SessionId, Session>,
}

impl SessionRegistry {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
        }
    }

    /// Start a new session and return its id
    pub fn open(&mut self) -> SessionId {
        let session = Session::with_config(&self.config);
        let id = session.id();
        self.sessions.insert(id, session);
        tracing::debug!(session = %id, "Opened session");
        id
    }

    pub fn get(&self, id: SessionId) -> Result<&Session> {
        self.sessions
            .get(&id)
            .ok_or_else(|| Error::NotFound(format!("session {}", id)))
    }

    pub fn get_mut(&mut self, id: SessionId) -> Result<&mut Session> {
        self.sessions
            .get_mut(&id)
            .ok_or_else(|| Error::NotFound(format!("session {}", id)))
    }

    /// End a session, handing back its final state
    pub fn close(&mut self, id: SessionId) -> Option<Session> {
        let session = self.sessions.remove(&id);
        if let Some(session) = &session {
            let age = Utc::now() - session.created_at();
            tracing::debug!(
                session = %id,
                interactions = session.len(),
                age_secs = age.num_seconds(),
                "Closed session"
            );
        }
        session
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
