//! Skill Normalizer: splits a skill label into its main phrase and an optional
//! parenthetical abbreviation, e.g. `"Long Short-Term Memory (LSTM)"`.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A skill label split into the phrase to search for and its abbreviation, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSkill {
    pub main_phrase: String,
    pub abbreviation: Option<String>,
}

fn parenthetical() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((.*?)\)").expect("parenthetical pattern is valid"))
}

/// Normalizes a raw skill label.
///
/// Only the first `(...)` group is treated as the abbreviation. Any later groups stay
/// embedded in `main_phrase`. Never fails; `""` yields an empty main phrase.
pub fn normalize(skill: &str) -> ParsedSkill {
    match parenthetical().captures(skill) {
        Some(caps) => {
            // Group 0 always exists on a successful capture.
            let whole = caps.get(0).map(|m| m.range()).unwrap_or(0..0);
            let inner = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

            let mut main_phrase = String::with_capacity(skill.len());
            main_phrase.push_str(&skill[..whole.start]);
            main_phrase.push_str(&skill[whole.end..]);

            ParsedSkill {
                main_phrase: main_phrase.trim().to_string(),
                abbreviation: Some(inner.trim().to_string()),
            }
        }
        None => ParsedSkill {
            main_phrase: skill.trim().to_string(),
            abbreviation: None,
        },
    }
}
