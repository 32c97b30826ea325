//! Matcher: classifies each skill as matched or missing against a resume.
//!
//! Matching is case-insensitive and whole-word. A term is found when it occurs in the
//! lower-cased resume and the characters on both sides of the occurrence are either
//! absent or non-word characters. For terms with word-character edges this is plain
//! `\b` semantics; it also lets punctuation-edged terms such as `C++`, `.NET` or
//! `CI/CD` match when they are cleanly delimited.
//!
//! Whitespace inside a term matches any whitespace run, so line breaks introduced by
//! document extraction do not split multi-word skills.

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::skills::normalizer::normalize;

/// Partition of the input skills. Both lists hold the original-case skill labels in
/// input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl MatchResult {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Both lists sorted alphabetically, for display.
    pub fn sorted(mut self) -> Self {
        self.matched.sort();
        self.missing.sort();
        self
    }
}

/// Matches every skill against the resume text.
///
/// Never fails: an empty skill list yields two empty lists and an empty resume puts
/// every skill in `missing`.
pub fn match_skills<S: AsRef<str>>(resume_text: &str, skills: &[S]) -> MatchResult {
    let resume_lower = resume_text.to_lowercase();
    let mut result = MatchResult::default();

    for skill in skills {
        let skill = skill.as_ref();
        if skill_is_present(&resume_lower, skill) {
            result.matched.push(skill.to_string());
        } else {
            result.missing.push(skill.to_string());
        }
    }

    result
}

/// Checks one skill against text that is already lower-cased.
fn skill_is_present(resume_lower: &str, skill: &str) -> bool {
    let parsed = normalize(skill);

    match parsed.abbreviation {
        Some(abbreviation) => {
            contains_term(resume_lower, &parsed.main_phrase)
                || contains_term(resume_lower, &abbreviation)
        }
        None => contains_term(resume_lower, skill),
    }
}

/// Whole-word search for `term` in `haystack_lower`. Empty terms never match.
fn contains_term(haystack_lower: &str, term: &str) -> bool {
    let Some(pattern) = term_pattern(term) else {
        return false;
    };

    match Regex::new(&pattern) {
        Ok(re) => re.is_match(haystack_lower),
        Err(e) => {
            warn!(term = %term, "Skipping skill term whose pattern failed to compile: {e}");
            false
        }
    }
}

/// Builds the boundary-anchored pattern for a term, or `None` if the term is blank.
fn term_pattern(term: &str) -> Option<String> {
    let term_lower = term.trim().to_lowercase();
    if term_lower.is_empty() {
        return None;
    }

    let body = term_lower
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");

    Some(format!(r"(?:^|\W){body}(?:\W|$)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn matched_set(result: &MatchResult) -> HashSet<&str> {
        result.matched.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_end_to_end_scenario() {
        let skills = ["Python", "Machine Learning (ML)", "C++"];
        let result = match_skills("5 years of Python and ML experience.", &skills);

        assert_eq!(
            matched_set(&result),
            HashSet::from(["Python", "Machine Learning (ML)"])
        );
        assert_eq!(result.missing, vec!["C++".to_string()]);
    }

    #[test]
    fn test_abbreviation_alone_matches() {
        let result = match_skills(
            "Previously trained an svm classifier on tabular data",
            &["Support Vector Machine (SVM)"],
        );
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn test_main_phrase_alone_matches() {
        let result = match_skills(
            "Built a support vector machine for fraud detection",
            &["Support Vector Machine (SVM)"],
        );
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn test_neither_phrase_nor_abbreviation_is_missing() {
        let result = match_skills(
            "Built gradient boosted trees",
            &["Support Vector Machine (SVM)"],
        );
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, vec!["Support Vector Machine (SVM)".to_string()]);
    }

    #[test]
    fn test_word_boundary_rejects_substring() {
        let result = match_skills("Strong background in distributed systems", &["Go"]);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_word_boundary_accepts_trailing_punctuation() {
        let result = match_skills("I wrote it in Go.", &["Go"]);
        assert_eq!(result.matched, vec!["Go".to_string()]);
    }

    #[test]
    fn test_punctuation_edged_skills_match_when_delimited() {
        let resume = "Languages: C++, Rust. Shipped Node.js services behind a CI/CD pipeline on .NET";
        let skills = ["C++", "Node.js", "CI/CD", ".NET"];
        let result = match_skills(resume, &skills);
        assert_eq!(result.matched.len(), 4, "missing: {:?}", result.missing);
    }

    #[test]
    fn test_punctuation_edged_skill_embedded_in_word_is_missing() {
        let result = match_skills("Maintained asp.net applications", &[".NET"]);
        assert!(result.matched.is_empty());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let result = match_skills("Experience with c# and f#", &["C#", "C.*"]);
        assert_eq!(result.matched, vec!["C#".to_string()]);
        assert_eq!(result.missing, vec!["C.*".to_string()]);
    }

    #[test]
    fn test_multi_word_skill_spans_line_break() {
        let result = match_skills("Applied machine\nlearning to ranking", &["Machine Learning"]);
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn test_empty_skill_list() {
        let skills: [&str; 0] = [];
        let result = match_skills("anything", &skills);
        assert_eq!(result, MatchResult::default());
    }

    #[test]
    fn test_empty_resume_misses_everything() {
        let result = match_skills("", &["Rust", "SQL"]);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing.len(), 2);
    }

    #[test]
    fn test_blank_skill_is_always_missing() {
        let result = match_skills("plenty of words here", &["", "   "]);
        assert!(result.matched.is_empty());
        assert_eq!(result.missing.len(), 2);
    }

    #[test]
    fn test_empty_main_phrase_uses_abbreviation_only() {
        let result = match_skills("some words", &["(SQL)"]);
        assert!(result.matched.is_empty());

        let result = match_skills("wrote sql daily", &["(SQL)"]);
        assert_eq!(result.matched.len(), 1);
    }

    #[test]
    fn test_sorted_orders_both_lists() {
        let result = match_skills("rust and python", &["Rust", "Python", "Zig", "Ada"]).sorted();
        assert_eq!(result.matched, vec!["Python".to_string(), "Rust".to_string()]);
        assert_eq!(result.missing, vec!["Ada".to_string(), "Zig".to_string()]);
    }

    #[test]
    fn test_is_idempotent() {
        let skills = ["Docker", "Kubernetes (K8s)", "Terraform"];
        let resume = "Ran k8s clusters with Docker";
        assert_eq!(match_skills(resume, &skills), match_skills(resume, &skills));
    }

    proptest! {
        #[test]
        fn prop_result_partitions_input(
            resume in "[a-zA-Z0-9 .,+#()/-]{0,80}",
            skills in proptest::collection::vec("[a-zA-Z0-9 .+#()/-]{0,16}", 0..8),
        ) {
            let result = match_skills(&resume, &skills);
            prop_assert_eq!(result.total(), skills.len());

            let matched: HashSet<&String> = result.matched.iter().collect();
            let missing: HashSet<&String> = result.missing.iter().collect();
            let input: HashSet<&String> = skills.iter().collect();
            let union: HashSet<&String> = matched.union(&missing).copied().collect();
            prop_assert_eq!(union, input);
            prop_assert!(matched.is_disjoint(&missing));
        }

        #[test]
        fn prop_matching_ignores_resume_case(
            resume in "[a-zA-Z .,+#]{0,80}",
            skills in proptest::collection::vec("[a-zA-Z .+#()]{1,16}", 0..8),
        ) {
            let lower = match_skills(&resume.to_lowercase(), &skills);
            let upper = match_skills(&resume.to_uppercase(), &skills);
            let original = match_skills(&resume, &skills);
            prop_assert_eq!(&lower, &upper);
            prop_assert_eq!(&lower, &original);
        }
    }
}
