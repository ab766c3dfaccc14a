//! The birth-detail acquisition flow.
//!
//! Drives one user turn at a time: trigger detection starts a session,
//! each subsequent message fills the step the session is waiting on, and
//! once all details are collected the chart pipeline runs synchronously in
//! the same turn. Chart generation always ends the session, on success and
//! on failure alike; there is no retry in place.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Timelike, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use kundli_engine::{
    BirthDetails, EphemerisOracle, HouseOracle, KundliResult, compute_kundli,
};
use kundli_geo::{GeoResolution, Geocoder};
use kundli_time::BirthMoment;

use crate::intent::{Intent, Language, detect_intent, detect_language};
use crate::parser::{extract_date, extract_place, extract_time};
use crate::session::{KundliSession, SessionStore, Step};
use crate::templates::{Prompt, prompt_text, render_report};

/// What the host should do with this turn.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    /// Whether this turn belonged to an acquisition flow.
    pub is_kundli_flow: bool,
    /// Reply to send verbatim, when the flow produced one.
    pub direct_response: Option<String>,
    /// When true the host must not generate its own reply.
    pub skip_llm: bool,
    /// The finished chart, on the generating turn only.
    pub kundli_result: Option<KundliResult>,
    /// Detected intent, reported even when the flow does not handle it.
    pub intent: Option<Intent>,
}

impl ProcessOutcome {
    fn passthrough(intent: Option<Intent>) -> Self {
        Self {
            is_kundli_flow: false,
            direct_response: None,
            skip_llm: false,
            kundli_result: None,
            intent,
        }
    }

    fn reply(text: String, intent: Option<Intent>) -> Self {
        Self {
            is_kundli_flow: true,
            direct_response: Some(text),
            skip_llm: true,
            kundli_result: None,
            intent,
        }
    }
}

/// The acquisition flow with its injected collaborators.
pub struct KundliService<S: SessionStore> {
    store: S,
    geocoder: Geocoder,
    ephemeris: Box<dyn EphemerisOracle + Send + Sync>,
    houses: Box<dyn HouseOracle + Send + Sync>,
}

impl<S: SessionStore> KundliService<S> {
    pub fn new(
        store: S,
        geocoder: Geocoder,
        ephemeris: Box<dyn EphemerisOracle + Send + Sync>,
        houses: Box<dyn HouseOracle + Send + Sync>,
    ) -> Self {
        Self {
            store,
            geocoder,
            ephemeris,
            houses,
        }
    }

    /// Handle one user message with "now" taken from the wall clock.
    pub fn process(
        &self,
        user_id: &str,
        message: &str,
        language_hint: Option<Language>,
    ) -> ProcessOutcome {
        self.process_at(user_id, message, language_hint, Utc::now())
    }

    /// Handle one user message at an explicit instant.
    ///
    /// A create trigger discards any in-flight session for the user and
    /// starts over at the name step; match and question intents are only
    /// reported back to the host.
    pub fn process_at(
        &self,
        user_id: &str,
        message: &str,
        language_hint: Option<Language>,
        now: DateTime<Utc>,
    ) -> ProcessOutcome {
        let language = language_hint.unwrap_or_else(|| detect_language(message));
        let intent = detect_intent(message);

        if intent == Some(Intent::CreateKundli) {
            debug!(user_id, "kundli trigger, starting fresh session");
            self.store.put(user_id, KundliSession::new(language));
            return ProcessOutcome::reply(
                prompt_text(Prompt::AskName, language).to_string(),
                intent,
            );
        }

        let Some(mut session) = self.store.get(user_id) else {
            return ProcessOutcome::passthrough(intent);
        };

        session.language = language;
        session.touch();

        match session.step {
            Step::AskName => self.on_name(user_id, session, message, intent),
            Step::AskDate => self.on_date(user_id, session, message, intent),
            Step::AskTime => self.on_time(user_id, session, message, intent),
            Step::AskPlace => self.on_place(user_id, session, message, intent, now),
        }
    }

    fn on_name(
        &self,
        user_id: &str,
        mut session: KundliSession,
        message: &str,
        intent: Option<Intent>,
    ) -> ProcessOutcome {
        let name = message.trim();
        if name.chars().count() < 2 {
            let text = prompt_text(Prompt::AskName, session.language).to_string();
            self.store.put(user_id, session);
            return ProcessOutcome::reply(text, intent);
        }
        session.name = Some(name.to_string());
        session.step = Step::AskDate;
        let text = prompt_text(Prompt::AskDate, session.language).to_string();
        self.store.put(user_id, session);
        ProcessOutcome::reply(text, intent)
    }

    fn on_date(
        &self,
        user_id: &str,
        mut session: KundliSession,
        message: &str,
        intent: Option<Intent>,
    ) -> ProcessOutcome {
        let prompt = match extract_date(message) {
            Some((date, _)) => {
                session.date = Some(date);
                session.step = Step::AskTime;
                Prompt::AskTime
            }
            None => Prompt::RetryDate,
        };
        let text = prompt_text(prompt, session.language).to_string();
        self.store.put(user_id, session);
        ProcessOutcome::reply(text, intent)
    }

    fn on_time(
        &self,
        user_id: &str,
        mut session: KundliSession,
        message: &str,
        intent: Option<Intent>,
    ) -> ProcessOutcome {
        let prompt = match extract_time(message) {
            Some((time, _)) => {
                session.time = Some(time);
                session.step = Step::AskPlace;
                Prompt::AskPlace
            }
            None => Prompt::RetryTime,
        };
        let text = prompt_text(prompt, session.language).to_string();
        self.store.put(user_id, session);
        ProcessOutcome::reply(text, intent)
    }

    fn on_place(
        &self,
        user_id: &str,
        mut session: KundliSession,
        message: &str,
        intent: Option<Intent>,
        now: DateTime<Utc>,
    ) -> ProcessOutcome {
        let candidate = match extract_place(message, &[]) {
            Some(place) => place,
            None => message.trim().to_string(),
        };

        let resolution = match self.geocoder.resolve(&candidate) {
            Ok(r) => r,
            Err(e) => {
                debug!(user_id, place = %candidate, error = %e, "place lookup failed");
                let text = prompt_text(Prompt::RetryPlace, session.language).to_string();
                self.store.put(user_id, session);
                return ProcessOutcome::reply(text, intent);
            }
        };

        session.place = Some(resolution.place.clone());
        self.generate(user_id, session, &resolution, intent, now)
    }

    /// Terminal step: run the chart pipeline and delete the session no
    /// matter the outcome.
    fn generate(
        &self,
        user_id: &str,
        session: KundliSession,
        geo: &GeoResolution,
        intent: Option<Intent>,
        now: DateTime<Utc>,
    ) -> ProcessOutcome {
        self.store.delete(user_id);
        let language = session.language;

        let Some(moment) = session_birth_moment(&session, geo.tz_offset_hours) else {
            warn!(user_id, "session carried malformed birth details, dropping");
            return ProcessOutcome::reply(
                prompt_text(Prompt::ChartFailed, language).to_string(),
                intent,
            );
        };
        let birth = BirthDetails {
            moment,
            latitude: geo.latitude,
            longitude: geo.longitude,
        };

        match compute_kundli(self.ephemeris.as_ref(), self.houses.as_ref(), &birth, now) {
            Ok(kundli) => {
                let name = session.name.as_deref().unwrap_or("you");
                info!(user_id, "kundli generated");
                let text = render_report(name, &kundli, language);
                ProcessOutcome {
                    is_kundli_flow: true,
                    direct_response: Some(text),
                    skip_llm: true,
                    kundli_result: Some(kundli),
                    intent,
                }
            }
            Err(e) => {
                warn!(user_id, error = %e, "chart computation failed, session dropped");
                ProcessOutcome::reply(prompt_text(Prompt::ChartFailed, language).to_string(), intent)
            }
        }
    }
}

/// Build a [`BirthMoment`] from the session's canonical date/time strings.
///
/// The strings were produced by the extractors, so this only fails when a
/// session reaches the terminal step with a field missing.
fn session_birth_moment(session: &KundliSession, tz_offset_hours: f64) -> Option<BirthMoment> {
    let date = NaiveDate::parse_from_str(session.date.as_deref()?, "%Y-%m-%d").ok()?;
    let time = NaiveTime::parse_from_str(session.time.as_deref()?, "%H:%M").ok()?;
    Some(BirthMoment {
        year: date.year(),
        month: date.month() as u8,
        day: date.day() as u8,
        hour: time.hour() as u8,
        minute: time.minute() as u8,
        tz_offset_hours,
    })
}
