//! Conversational acquisition of birth details.
//!
//! Parses dates, times and places out of multilingual chat messages,
//! classifies intent and language, and walks a per-user session through
//! name, date, time and place before handing off to the chart engine.
//! The host integrates through [`KundliService::process`], which says
//! whether the turn was handled and what to reply.

pub mod flow;
pub mod intent;
pub mod parser;
pub mod session;
pub mod templates;

pub use flow::{KundliService, ProcessOutcome};
pub use intent::{Intent, Language, detect_intent, detect_language};
pub use parser::{Field, ParsedBirthDetails, parse};
pub use session::{InMemorySessionStore, KundliSession, SESSION_TIMEOUT, SessionStore, Step};
pub use templates::{Prompt, prompt_text, render_report};
