//! End-to-end acquisition flow tests against fixed oracle doubles.

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, TimeZone, Utc};

use kundli_dialogue::{
    Intent, KundliService, Language, Prompt, SESSION_TIMEOUT, SessionStore, prompt_text,
};
use kundli_dialogue::session::InMemorySessionStore;
use kundli_engine::{EphemerisOracle, HouseOracle, HouseSystem, OracleError, RawHouses};
use kundli_geo::Geocoder;
use kundli_vedic::{Graha, Nakshatra, Rashi};

/// Ephemeris double returning fixed tropical longitudes for the
/// 1989-01-31 Ferozepur scenario (ayanamsa 23.52).
struct FixedEphemeris;

impl EphemerisOracle for FixedEphemeris {
    fn tropical_longitude(&self, _jd_ut: f64, body: Graha) -> Result<f64, OracleError> {
        Ok(match body {
            Graha::Surya => 310.80,
            Graha::Chandra => 58.52,
            Graha::Mangal => 55.10,
            Graha::Buddh => 295.40,
            Graha::Guru => 81.30,
            Graha::Shukra => 339.75,
            Graha::Shani => 285.00,
            Graha::Rahu => 331.90,
            Graha::Ketu => unreachable!("Ketu is derived, never queried"),
        })
    }
}

struct FixedHouses;

impl HouseOracle for FixedHouses {
    fn houses(
        &self,
        _jd_ut: f64,
        _latitude: f64,
        _longitude: f64,
        _system: HouseSystem,
    ) -> Result<RawHouses, OracleError> {
        Ok(RawHouses {
            cusps: vec![
                120.0, 150.0, 180.0, 210.0, 240.0, 270.0, 300.0, 330.0, 0.0, 30.0, 60.0, 90.0,
            ],
            points: None,
            ascendant: None,
        })
    }

    fn ayanamsa(&self, _jd_ut: f64) -> Result<f64, OracleError> {
        Ok(23.52)
    }
}

fn service() -> (Arc<InMemorySessionStore>, KundliService<Arc<InMemorySessionStore>>) {
    let store = Arc::new(InMemorySessionStore::new());
    let service = KundliService::new(
        Arc::clone(&store),
        Geocoder::offline(),
        Box::new(FixedEphemeris),
        Box::new(FixedHouses),
    );
    (store, service)
}

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 31, 12, 0, 0).unwrap()
}

#[test]
fn full_conversation_generates_chart() {
    let (_, svc) = service();

    let turn = svc.process_at("u1", "meri kundli banao", None, now());
    assert!(turn.is_kundli_flow);
    assert!(turn.skip_llm);
    assert_eq!(turn.intent, Some(Intent::CreateKundli));
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskName, Language::English))
    );

    let turn = svc.process_at("u1", "Ramesh", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskDate, Language::English))
    );

    let turn = svc.process_at("u1", "31 January 1989", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskTime, Language::English))
    );

    let turn = svc.process_at("u1", "4:00 PM", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskPlace, Language::English))
    );

    let turn = svc.process_at("u1", "Ferozepur", None, now());
    assert!(turn.is_kundli_flow);
    assert!(turn.skip_llm);
    let result = turn.kundli_result.expect("chart should be generated");
    assert_eq!(result.lagna.rashi, Rashi::Karka);
    assert_eq!(result.moon_rashi.rashi, Rashi::Vrishabha);
    assert_eq!(result.moon_nakshatra.nakshatra, Nakshatra::Krittika);
    assert_eq!(result.moon_nakshatra.pada, 3);
    assert_eq!(result.mahadasha.state.lord, Graha::Rahu);

    let report = turn.direct_response.expect("report text");
    assert!(report.contains("Ramesh"));
    assert!(report.contains("<!--kundli:"));

    // The session is gone: the next message is not part of any flow.
    let turn = svc.process_at("u1", "thanks", None, now());
    assert!(!turn.is_kundli_flow);
    assert!(!turn.skip_llm);
    assert!(turn.direct_response.is_none());
}

#[test]
fn unparsable_date_stays_on_date_step() {
    let (store, svc) = service();
    svc.process_at("u1", "make my birth chart", None, now());
    svc.process_at("u1", "Ramesh", None, now());

    let turn = svc.process_at("u1", "a while ago", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::RetryDate, Language::English))
    );
    let session = store.get("u1").unwrap();
    assert_eq!(session.date, None);

    // A valid date afterwards advances normally.
    let turn = svc.process_at("u1", "31/01/1989", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskTime, Language::English))
    );
    assert_eq!(store.get("u1").unwrap().date.as_deref(), Some("1989-01-31"));
}

#[test]
fn fresh_trigger_discards_in_flight_session() {
    let (store, svc) = service();
    svc.process_at("u1", "meri kundli banao", None, now());
    svc.process_at("u1", "Ramesh", None, now());
    svc.process_at("u1", "31/01/1989", None, now());

    // Mid-flow re-trigger: back to the name step, collected fields gone.
    let turn = svc.process_at("u1", "meri kundli banao", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskName, Language::English))
    );
    let session = store.get("u1").unwrap();
    assert_eq!(session.name, None);
    assert_eq!(session.date, None);
}

#[test]
fn expired_session_reads_as_absent() {
    let (store, svc) = service();
    svc.process_at("u1", "meri kundli banao", None, now());

    let mut session = store.get("u1").unwrap();
    session.last_active = SystemTime::now() - SESSION_TIMEOUT - Duration::from_secs(1);
    store.put("u1", session);

    // The name reply lands on no session at all.
    let turn = svc.process_at("u1", "Ramesh", None, now());
    assert!(!turn.is_kundli_flow);

    // A fresh trigger starts over cleanly.
    let turn = svc.process_at("u1", "meri kundli banao", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskName, Language::English))
    );
}

#[test]
fn hindi_trigger_prompts_in_hindi() {
    let (_, svc) = service();
    let turn = svc.process_at("u1", "मेरी कुंडली बनाओ", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskName, Language::Hindi))
    );
}

#[test]
fn language_hint_overrides_detection() {
    let (_, svc) = service();
    let turn = svc.process_at("u1", "make my kundli", Some(Language::Hinglish), now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::AskName, Language::Hinglish))
    );
}

#[test]
fn unknown_place_reprompts() {
    let (store, svc) = service();
    svc.process_at("u1", "meri kundli banao", None, now());
    svc.process_at("u1", "Ramesh", None, now());
    svc.process_at("u1", "31/01/1989", None, now());
    svc.process_at("u1", "sham 4 baje", None, now());

    let turn = svc.process_at("u1", "Atlantis", None, now());
    assert_eq!(
        turn.direct_response.as_deref(),
        Some(prompt_text(Prompt::RetryPlace, Language::English))
    );
    // Still waiting on the place.
    assert!(store.get("u1").is_some());

    let turn = svc.process_at("u1", "Ferozepur", None, now());
    assert!(turn.kundli_result.is_some());
}

#[test]
fn hinglish_time_accepted_mid_flow() {
    let (store, svc) = service();
    svc.process_at("u1", "meri kundli banao", None, now());
    svc.process_at("u1", "Ramesh", None, now());
    svc.process_at("u1", "31/01/1989", None, now());
    svc.process_at("u1", "sham 4 baje", None, now());
    assert_eq!(store.get("u1").unwrap().time.as_deref(), Some("16:00"));
}

#[test]
fn match_intent_reported_but_not_handled() {
    let (store, svc) = service();
    let turn = svc.process_at("u1", "kundli milan karna hai", None, now());
    assert_eq!(turn.intent, Some(Intent::MatchKundli));
    assert!(!turn.is_kundli_flow);
    assert!(store.get("u1").is_none());
}

#[test]
fn unrelated_message_passes_through() {
    let (_, svc) = service();
    let turn = svc.process_at("u1", "what's the weather like", None, now());
    assert!(!turn.is_kundli_flow);
    assert!(!turn.skip_llm);
    assert_eq!(turn.intent, None);
    assert!(turn.direct_response.is_none());
}
