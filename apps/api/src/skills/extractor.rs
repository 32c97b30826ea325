//! Skill Extraction: asks the LLM for the skills a job description implies and cleans
//! the returned list before it reaches the matcher.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::llm_client::prompts::fenced_document;
use crate::llm_client::{LlmError, TextGenerator};
use crate::skills::prompts::SKILL_EXTRACTION_PROMPT_TEMPLATE;

/// Skills shorter than this (in characters) are dropped.
const MIN_SKILL_CHARS: usize = 3;
/// Skills this long or longer are dropped; they are sentences, not skills.
const MAX_SKILL_CHARS: usize = 50;

/// Trailing annotations the model adds that are not abbreviations.
fn noise_annotation() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\s*\((optional|implied|e\.g\..*?|written and visual)\)\s*$")
            .expect("noise annotation pattern is valid")
    })
}

/// List markers the model sometimes emits despite being told not to.
fn list_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[-*•]+|\d{1,2}[.)])\s+").expect("list marker pattern is valid")
    })
}

pub fn build_prompt(jd_text: &str) -> String {
    SKILL_EXTRACTION_PROMPT_TEMPLATE
        .replace("{jd_document}", &fenced_document("Job Description", jd_text))
}

/// Extracts the cleaned, deduplicated skill list for a job description.
pub async fn extract_skills(
    jd_text: &str,
    generator: &dyn TextGenerator,
) -> Result<Vec<String>, LlmError> {
    let raw = generator.generate(&build_prompt(jd_text)).await?;
    let skills = clean_skill_list(&raw);
    debug!(count = skills.len(), "Extracted skills from job description");
    Ok(skills)
}

/// Turns raw model output (one skill per line) into the matcher's input.
///
/// Drops blank lines and list markers, strips noisy trailing notes such as
/// `(optional)` or `(e.g., AWS)` while keeping abbreviations like `(LSTM)`, keeps
/// entries of 3–49 characters and removes duplicates, first occurrence wins.
pub fn clean_skill_list(raw: &str) -> Vec<String> {
    let mut seen = HashSet::new();

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| list_marker().replace(line, "").trim().to_string())
        .map(|skill| noise_annotation().replace(&skill, "").trim().to_string())
        .filter(|skill| {
            let len = skill.chars().count();
            (MIN_SKILL_CHARS..MAX_SKILL_CHARS).contains(&len)
        })
        .filter(|skill| seen.insert(skill.clone()))
        .collect()
}
