//! Intent and language classification for incoming messages.
//!
//! Three disjoint pattern sets recognize chart-creation, compatibility and
//! question requests, each with Hindi, Hinglish and English variants.
//! Language is detected from the scripts present: Devanagari alone means
//! Hindi, both scripts mean Hinglish, Latin alone means English.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Message language, used to select response templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Language {
    English,
    Hindi,
    Hinglish,
}

impl Language {
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hindi => "hindi",
            Self::Hinglish => "hinglish",
        }
    }
}

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intent {
    /// Make a birth chart.
    CreateKundli,
    /// Match two charts for compatibility.
    MatchKundli,
    /// Ask a question about an existing chart or a chart topic.
    Question,
}

static RE_MATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)kundli\s*(?:milan|matching|match)|gun\s*milan|\bmilan\b.*kundli",
        r"|compatibilit|horoscope\s+match|कुंडली\s*मिलान|गुण\s*मिलान",
    ))
    .unwrap()
});

static RE_CREATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:kundli|kundali|janampatri|janmpatri|janam\s*patri|birth\s*chart|horoscope)",
        r".{0,40}(?:bana|banao|banado|banaiye|banwa|make|create|generate|chahiye|dikhao)",
        r"|(?:bana|banao|make|create|generate).{0,40}(?:kundli|kundali|janampatri|birth\s*chart|horoscope)",
        r"|(?:meri|mera|my)\s+(?:kundli|kundali|janampatri|birth\s*chart)",
        r"|कुंडली.{0,30}(?:बनाओ|बनाइए|बनवा|चाहिए)|जन्मपत्री.{0,30}(?:बनाओ|बनाइए|चाहिए)",
    ))
    .unwrap()
});

static RE_QUESTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(?:kundli|kundali|janampatri|rashi|nakshatra|dasha|lagna|horoscope|zodiac)",
        r".{0,60}(?:kya|kab|kaun|kaisa|kaise|kyu|what|when|which|how|why|\?)",
        r"|(?:kya|what|which|कौन|क्या|कब|कैसे).{0,60}(?:rashi|nakshatra|dasha|lagna|राशि|नक्षत्र|दशा|लग्न)",
    ))
    .unwrap()
});

/// Classify a message's intent, if any.
///
/// Match patterns are tested before create patterns: "kundli milan karo"
/// contains a create keyword but is a compatibility request.
pub fn detect_intent(message: &str) -> Option<Intent> {
    if RE_MATCH.is_match(message) {
        Some(Intent::MatchKundli)
    } else if RE_CREATE.is_match(message) {
        Some(Intent::CreateKundli)
    } else if RE_QUESTION.is_match(message) {
        Some(Intent::Question)
    } else {
        None
    }
}

fn is_devanagari(ch: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&ch)
}

/// Detect a message's language from the scripts it uses.
pub fn detect_language(message: &str) -> Language {
    let has_devanagari = message.chars().any(is_devanagari);
    let has_latin = message.chars().any(|ch| ch.is_ascii_alphabetic());
    match (has_devanagari, has_latin) {
        (true, true) => Language::Hinglish,
        (true, false) => Language::Hindi,
        _ => Language::English,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_english() {
        assert_eq!(
            detect_intent("please make my birth chart"),
            Some(Intent::CreateKundli)
        );
        assert_eq!(
            detect_intent("create a horoscope for me"),
            Some(Intent::CreateKundli)
        );
    }

    #[test]
    fn create_hinglish() {
        assert_eq!(
            detect_intent("meri kundli banao"),
            Some(Intent::CreateKundli)
        );
        assert_eq!(
            detect_intent("kundali banado yaar"),
            Some(Intent::CreateKundli)
        );
    }

    #[test]
    fn create_hindi() {
        assert_eq!(
            detect_intent("मेरी कुंडली बनाओ"),
            Some(Intent::CreateKundli)
        );
    }

    #[test]
    fn match_beats_create() {
        assert_eq!(
            detect_intent("kundli milan karwana hai, banao please"),
            Some(Intent::MatchKundli)
        );
        assert_eq!(detect_intent("गुण मिलान"), Some(Intent::MatchKundli));
    }

    #[test]
    fn question_detected() {
        assert_eq!(
            detect_intent("meri rashi kya hai?"),
            Some(Intent::Question)
        );
        assert_eq!(
            detect_intent("what nakshatra am I"),
            Some(Intent::Question)
        );
    }

    #[test]
    fn unrelated_message_is_none() {
        assert_eq!(detect_intent("what's the weather today"), None);
        assert_eq!(detect_intent("hello"), None);
    }

    #[test]
    fn language_detection() {
        assert_eq!(detect_language("make my chart"), Language::English);
        assert_eq!(detect_language("मेरी कुंडली बनाओ"), Language::Hindi);
        assert_eq!(
            detect_language("meri कुंडली banao"),
            Language::Hinglish
        );
        assert_eq!(detect_language("12/05/1990"), Language::English);
    }
}
