//! Response text tables for Hindi, English and Hinglish.
//!
//! Every string the flow sends comes from here, selected by the session's
//! recorded language. The report renderer also appends the serialized
//! result in an HTML comment so a client can reuse it without re-parsing
//! the prose.

use kundli_engine::KundliResult;
use tracing::warn;

use crate::intent::Language;

/// One of the fixed messages the flow can send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    AskName,
    AskDate,
    /// Date did not parse; repeat with a format hint.
    RetryDate,
    AskTime,
    RetryTime,
    AskPlace,
    /// Geocoding miss; ask for the place again.
    RetryPlace,
    /// Chart computation failed; the session is gone.
    ChartFailed,
}

/// The fixed text for a prompt in a language.
pub fn prompt_text(prompt: Prompt, language: Language) -> &'static str {
    match language {
        Language::English => match prompt {
            Prompt::AskName => "Sure, let's make your kundli. What is your name?",
            Prompt::AskDate => "What is your date of birth? (for example 31/01/1989)",
            Prompt::RetryDate => {
                "I could not read that date. Please send it as DD/MM/YYYY, like 31/01/1989."
            }
            Prompt::AskTime => "What time were you born? (for example 4:00 PM or 16:00)",
            Prompt::RetryTime => {
                "I could not read that time. Please send it like 4:00 PM or 16:00."
            }
            Prompt::AskPlace => "Which city were you born in?",
            Prompt::RetryPlace => {
                "I could not find that place. Please send the city name, like Delhi or Ferozepur."
            }
            Prompt::ChartFailed => {
                "Sorry, something went wrong while computing your kundli. Please start again."
            }
        },
        Language::Hindi => match prompt {
            Prompt::AskName => "ज़रूर, आपकी कुंडली बनाते हैं। आपका नाम क्या है?",
            Prompt::AskDate => "आपकी जन्म तिथि क्या है? (जैसे 31/01/1989)",
            Prompt::RetryDate => "तिथि समझ नहीं आई। कृपया DD/MM/YYYY में भेजें, जैसे 31/01/1989।",
            Prompt::AskTime => "आपका जन्म किस समय हुआ था? (जैसे शाम 4 बजे या 16:00)",
            Prompt::RetryTime => "समय समझ नहीं आया। कृपया ऐसे भेजें: शाम 4 बजे या 16:00।",
            Prompt::AskPlace => "आपका जन्म किस शहर में हुआ था?",
            Prompt::RetryPlace => "यह जगह नहीं मिली। कृपया शहर का नाम भेजें, जैसे दिल्ली।",
            Prompt::ChartFailed => "क्षमा करें, कुंडली बनाने में त्रुटि हुई। कृपया फिर से शुरू करें।",
        },
        Language::Hinglish => match prompt {
            Prompt::AskName => "Sure, aapki kundli banate hain. Aapka naam kya hai?",
            Prompt::AskDate => "Aapki janam tithi kya hai? (jaise 31/01/1989)",
            Prompt::RetryDate => {
                "Date samajh nahi aayi. DD/MM/YYYY mein bhejiye, jaise 31/01/1989."
            }
            Prompt::AskTime => "Aapka janam kis samay hua tha? (jaise sham 4 baje ya 16:00)",
            Prompt::RetryTime => "Samay samajh nahi aaya. Aise bhejiye: sham 4 baje ya 16:00.",
            Prompt::AskPlace => "Aapka janam kis sheher mein hua tha?",
            Prompt::RetryPlace => "Yeh jagah nahi mili. Sheher ka naam bhejiye, jaise Delhi.",
            Prompt::ChartFailed => {
                "Maaf kijiye, kundli banane mein dikkat aayi. Kripya phir se shuru kijiye."
            }
        },
    }
}

/// Render the finished chart as a localized report.
///
/// The serialized result rides along in an HTML comment; clients that want
/// structured data read the comment, everyone else sees only the prose.
pub fn render_report(name: &str, result: &KundliResult, language: Language) -> String {
    let lagna = &result.lagna;
    let moon = &result.moon_rashi;
    let nak = &result.moon_nakshatra;
    let dasha = &result.mahadasha;

    let body = match language {
        Language::English => format!(
            "Here is the kundli for {name}:\n\
             Lagna (ascendant): {} ({})\n\
             Moon sign: {} ({})\n\
             Nakshatra: {}, pada {}\n\
             Current Mahadasha: {} — about {:.1} years remaining (until ~{})",
            lagna.rashi.name(),
            lagna.rashi.western_name(),
            moon.rashi.name(),
            moon.rashi.western_name(),
            nak.nakshatra.name(),
            nak.pada,
            dasha.state.lord.name(),
            dasha.state.years_remaining,
            dasha.approximate_end,
        ),
        Language::Hindi => format!(
            "{name} की कुंडली:\n\
             लग्न: {}\n\
             चंद्र राशि: {}\n\
             नक्षत्र: {}, पद {}\n\
             वर्तमान महादशा: {} — लगभग {:.1} वर्ष शेष (~{} तक)",
            lagna.rashi.hindi_name(),
            moon.rashi.hindi_name(),
            nak.nakshatra.hindi_name(),
            nak.pada,
            dasha.state.lord.hindi_name(),
            dasha.state.years_remaining,
            dasha.approximate_end,
        ),
        Language::Hinglish => format!(
            "{name} ki kundli taiyar hai:\n\
             Lagna: {} ({})\n\
             Chandra rashi: {} ({})\n\
             Nakshatra: {}, pada {}\n\
             Abhi ki Mahadasha: {} — lagbhag {:.1} saal baaki (~{} tak)",
            lagna.rashi.name(),
            lagna.rashi.western_name(),
            moon.rashi.name(),
            moon.rashi.western_name(),
            nak.nakshatra.name(),
            nak.pada,
            dasha.state.lord.name(),
            dasha.state.years_remaining,
            dasha.approximate_end,
        ),
    };

    match serde_json::to_string(result) {
        Ok(json) => format!("{body}\n<!--kundli:{json}-->"),
        Err(e) => {
            warn!(error = %e, "kundli result serialization failed, omitting data comment");
            body
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prompt_has_text_in_every_language() {
        let prompts = [
            Prompt::AskName,
            Prompt::AskDate,
            Prompt::RetryDate,
            Prompt::AskTime,
            Prompt::RetryTime,
            Prompt::AskPlace,
            Prompt::RetryPlace,
            Prompt::ChartFailed,
        ];
        for language in [Language::English, Language::Hindi, Language::Hinglish] {
            for prompt in prompts {
                assert!(!prompt_text(prompt, language).is_empty());
            }
        }
    }

    #[test]
    fn hindi_prompts_are_devanagari() {
        let text = prompt_text(Prompt::AskName, Language::Hindi);
        assert!(text.chars().any(|ch| ('\u{0900}'..='\u{097F}').contains(&ch)));
    }
}
