//! Birth-detail extraction from free-form multilingual text.
//!
//! Each of date, time and place is extracted by an ordered ladder of
//! independent strategies tried in sequence until one succeeds. Supported
//! input mixes English, Hindi (Devanagari) and Hinglish freely within one
//! message. Extractors return the canonical string plus the byte span of
//! the match so the place extractor can blank consumed text.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// One of the three birth-detail fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Field {
    Date,
    Time,
    Place,
}

/// Result of parsing one message. Produced, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedBirthDetails {
    /// Canonical `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Canonical 24-hour `HH:MM`.
    pub time: Option<String>,
    /// Title-cased place label.
    pub place: Option<String>,
    /// Fields not found in the message.
    pub missing: Vec<Field>,
    /// 0.4 (date) + 0.3 (time) + 0.3 (place) per extracted field.
    pub confidence: f64,
}

// ── Date extraction ─────────────────────────────────────────────────────

const ENGLISH_MONTHS: &str = "january|february|march|april|may|june|july|august|september|\
october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec";

static RE_DMY_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{4})\b").unwrap());

static RE_DAY_MONTH_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})(?:st|nd|rd|th)?\s+({ENGLISH_MONTHS})\.?,?\s+(\d{{4}})\b"
    ))
    .unwrap()
});

static RE_MONTH_DAY_YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b({ENGLISH_MONTHS})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?,?\s+(\d{{4}})\b"
    ))
    .unwrap()
});

const HINDI_MONTHS: [(&str, u8); 16] = [
    ("जनवरी", 1),
    ("फरवरी", 2),
    ("मार्च", 3),
    ("अप्रैल", 4),
    ("मई", 5),
    ("जून", 6),
    ("जुलाई", 7),
    ("अगस्त", 8),
    ("सितंबर", 9),
    ("सितम्बर", 9),
    ("अक्टूबर", 10),
    ("अक्तूबर", 10),
    ("नवंबर", 11),
    ("नवम्बर", 11),
    ("दिसंबर", 12),
    ("दिसम्बर", 12),
];

static RE_DAY_HINDI_MONTH: LazyLock<Regex> = LazyLock::new(|| {
    let months: Vec<&str> = HINDI_MONTHS.iter().map(|(name, _)| *name).collect();
    Regex::new(&format!(
        r"(\d{{1,2}})\s*({})\s*(\d{{4}})",
        months.join("|")
    ))
    .unwrap()
});

static RE_ISO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

fn english_month(name: &str) -> Option<u8> {
    let key = name.to_lowercase();
    match &key[..3.min(key.len())] {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

fn hindi_month(name: &str) -> Option<u8> {
    HINDI_MONTHS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, m)| m)
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn canonical_date(year: i32, month: u8, day: u8) -> Option<String> {
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return None;
    }
    if !(1800..=2200).contains(&year) {
        return None;
    }
    Some(format!("{year:04}-{month:02}-{day:02}"))
}

/// Extract a date; first matching strategy wins.
///
/// Order: numeric DD/MM/YYYY (or dashes), "DD Month YYYY", "Month DD, YYYY",
/// "DD <Devanagari month> YYYY", ISO.
pub fn extract_date(message: &str) -> Option<(String, Range<usize>)> {
    if let Some(c) = RE_DMY_NUMERIC.captures(message) {
        let m = c.get(0)?;
        let day: u8 = c[1].parse().ok()?;
        let month: u8 = c[2].parse().ok()?;
        let year: i32 = c[3].parse().ok()?;
        if let Some(date) = canonical_date(year, month, day) {
            return Some((date, m.range()));
        }
    }
    if let Some(c) = RE_DAY_MONTH_YEAR.captures(message) {
        let m = c.get(0)?;
        let day: u8 = c[1].parse().ok()?;
        let month = english_month(&c[2])?;
        let year: i32 = c[3].parse().ok()?;
        if let Some(date) = canonical_date(year, month, day) {
            return Some((date, m.range()));
        }
    }
    if let Some(c) = RE_MONTH_DAY_YEAR.captures(message) {
        let m = c.get(0)?;
        let month = english_month(&c[1])?;
        let day: u8 = c[2].parse().ok()?;
        let year: i32 = c[3].parse().ok()?;
        if let Some(date) = canonical_date(year, month, day) {
            return Some((date, m.range()));
        }
    }
    if let Some(c) = RE_DAY_HINDI_MONTH.captures(message) {
        let m = c.get(0)?;
        let day: u8 = c[1].parse().ok()?;
        let month = hindi_month(&c[2])?;
        let year: i32 = c[3].parse().ok()?;
        if let Some(date) = canonical_date(year, month, day) {
            return Some((date, m.range()));
        }
    }
    if let Some(c) = RE_ISO.captures(message) {
        let m = c.get(0)?;
        let year: i32 = c[1].parse().ok()?;
        let month: u8 = c[2].parse().ok()?;
        let day: u8 = c[3].parse().ok()?;
        if let Some(date) = canonical_date(year, month, day) {
            return Some((date, m.range()));
        }
    }
    None
}

// ── Time extraction ─────────────────────────────────────────────────────

static RE_12H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})[:.](\d{2})\s*(am|pm)\b").unwrap());

static RE_12H_BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(\d{1,2})\s*(am|pm)\b").unwrap());

static RE_24H: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(\d{1,2}):(\d{2})\b").unwrap());

/// Day-part words with their hour offsets: morning words keep the stated
/// hour, afternoon/evening/night words push it into the second half of the
/// day when the stated hour is 12 or less.
const DAY_PARTS: [(&str, u8); 13] = [
    ("subah", 0),
    ("savere", 0),
    ("सुबह", 0),
    ("morning", 0),
    ("dopahar", 12),
    ("दोपहर", 12),
    ("afternoon", 12),
    ("shaam", 12),
    ("sham", 12),
    ("शाम", 12),
    ("evening", 12),
    ("raat", 12),
    ("रात", 12),
];

static RE_DAY_PART_FIRST: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<&str> = DAY_PARTS.iter().map(|(w, _)| *w).collect();
    Regex::new(&format!(
        r"(?i)\b({})\s*(?:ko\s+|mein\s+)?(\d{{1,2}})\s*(?:baje|बजे)?",
        words.join("|")
    ))
    .unwrap()
});

static RE_DAY_PART_LAST: LazyLock<Regex> = LazyLock::new(|| {
    let words: Vec<&str> = DAY_PARTS.iter().map(|(w, _)| *w).collect();
    Regex::new(&format!(
        r"(?i)\b(\d{{1,2}})\s*(?:baje|बजे|o'?clock)?\s*(?:in\s+the\s+)?(?:ko\s+)?({})",
        words.join("|")
    ))
    .unwrap()
});

fn day_part_offset(word: &str) -> u8 {
    let key = word.to_lowercase();
    DAY_PARTS
        .iter()
        .find(|(w, _)| *w == key)
        .map(|&(_, off)| off)
        .unwrap_or(0)
}

fn apply_day_part(hour: u8, offset: u8) -> Option<u8> {
    if hour == 0 || hour > 12 {
        return None;
    }
    let h = if offset > 0 && hour < 12 {
        hour + offset
    } else {
        hour
    };
    Some(h % 24)
}

fn canonical_time(hour: u8, minute: u8) -> Option<String> {
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(format!("{hour:02}:{minute:02}"))
}

fn from_12h(hour: u8, minute: u8, meridiem: &str) -> Option<String> {
    if hour == 0 || hour > 12 {
        return None;
    }
    let h = match meridiem.to_lowercase().as_str() {
        "pm" => (hour % 12) + 12,
        _ => hour % 12,
    };
    canonical_time(h, minute)
}

/// Extract a time; first matching strategy wins.
///
/// Order: `h:mm am/pm`, `h am/pm`, 24-hour `h:mm`, day-part word + hour
/// (Hindi and English, either order).
pub fn extract_time(message: &str) -> Option<(String, Range<usize>)> {
    if let Some(c) = RE_12H.captures(message) {
        let m = c.get(0)?;
        let hour: u8 = c[1].parse().ok()?;
        let minute: u8 = c[2].parse().ok()?;
        if let Some(time) = from_12h(hour, minute, &c[3]) {
            return Some((time, m.range()));
        }
    }
    if let Some(c) = RE_12H_BARE.captures(message) {
        let m = c.get(0)?;
        let hour: u8 = c[1].parse().ok()?;
        if let Some(time) = from_12h(hour, 0, &c[2]) {
            return Some((time, m.range()));
        }
    }
    if let Some(c) = RE_24H.captures(message) {
        let m = c.get(0)?;
        let hour: u8 = c[1].parse().ok()?;
        let minute: u8 = c[2].parse().ok()?;
        if let Some(time) = canonical_time(hour, minute) {
            return Some((time, m.range()));
        }
    }
    if let Some(c) = RE_DAY_PART_FIRST.captures(message) {
        let m = c.get(0)?;
        let hour: u8 = c[2].parse().ok()?;
        if let Some(h) = apply_day_part(hour, day_part_offset(&c[1])) {
            return Some((canonical_time(h, 0)?, m.range()));
        }
    }
    if let Some(c) = RE_DAY_PART_LAST.captures(message) {
        let m = c.get(0)?;
        let hour: u8 = c[1].parse().ok()?;
        if let Some(h) = apply_day_part(hour, day_part_offset(&c[2])) {
            return Some((canonical_time(h, 0)?, m.range()));
        }
    }
    None
}

// ── Place extraction ────────────────────────────────────────────────────

/// Words carried by chart requests that are never part of a place name:
/// request verbs, possessives, postpositions and politeness fillers in
/// English, romanized Hindi and Devanagari.
const STOP_WORDS: &[&str] = &[
    "kundli", "kundali", "janampatri", "janmpatri", "janampatrika", "banao", "banado", "banaiye",
    "bana", "do", "meri", "mera", "mere", "ka", "ki", "ke", "ko", "mein", "me", "main", "hua",
    "hui", "tha", "thi", "hai", "hain", "janam", "janm", "paida", "birth", "born", "in", "at",
    "on", "the", "my", "i", "was", "is", "of", "make", "create", "chart", "horoscope", "please",
    "kripya", "ji", "aur", "and", "baje", "बजे", "कुंडली", "जन्मपत्री", "बनाओ", "बनाइए", "मेरा",
    "मेरी", "मेरे", "का", "की", "के", "को", "में", "जन्म", "हुआ", "था", "कृपया", "जी", "और",
];

fn is_stop_word(token: &str) -> bool {
    let key = token.to_lowercase();
    STOP_WORDS.iter().any(|w| *w == key)
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + chars.as_str().to_lowercase().as_str()
        }
        None => String::new(),
    }
}

/// Extract a place label from what remains after removing the given spans
/// (matched date/time substrings) and all stop words.
pub fn extract_place(message: &str, consumed: &[Range<usize>]) -> Option<String> {
    let residue: String = message
        .char_indices()
        .map(|(i, ch)| {
            if consumed.iter().any(|r| r.contains(&i)) {
                ' '
            } else {
                ch
            }
        })
        .collect();

    let tokens: Vec<String> = residue
        .split(|ch: char| ch.is_whitespace() || ",.!?;:()\"'".contains(ch))
        .filter(|t| !t.is_empty())
        .filter(|t| !is_stop_word(t))
        .filter(|t| !t.chars().all(|ch| ch.is_ascii_digit()))
        .map(title_case)
        .collect();

    let place = tokens.join(" ");
    if place.chars().count() < 2 {
        None
    } else {
        Some(place)
    }
}

// ── Whole-message parse ─────────────────────────────────────────────────

/// Parse one message into birth details with a completeness score.
pub fn parse(message: &str) -> ParsedBirthDetails {
    let date = extract_date(message);
    let time = extract_time(message);

    let mut consumed = Vec::new();
    if let Some((_, r)) = &date {
        consumed.push(r.clone());
    }
    if let Some((_, r)) = &time {
        consumed.push(r.clone());
    }
    let place = extract_place(message, &consumed);

    let mut confidence = 0.0;
    let mut missing = Vec::new();
    match &date {
        Some(_) => confidence += 0.4,
        None => missing.push(Field::Date),
    }
    match &time {
        Some(_) => confidence += 0.3,
        None => missing.push(Field::Time),
    }
    match &place {
        Some(_) => confidence += 0.3,
        None => missing.push(Field::Place),
    }

    ParsedBirthDetails {
        date: date.map(|(d, _)| d),
        time: time.map(|(t, _)| t),
        place,
        missing,
        confidence,
    }
}
