//! Scorer: converts match counts into a 0–100 percentage.

use serde::{Deserialize, Serialize};

use crate::skills::matcher::MatchResult;

/// Percentage of skills matched, rounded half away from zero.
///
/// `total_count == 0` scores 0. The result is clamped to 100 should a caller pass
/// `matched_count > total_count`.
pub fn score(matched_count: usize, total_count: usize) -> u32 {
    if total_count == 0 {
        return 0;
    }
    let pct = (matched_count as f64 / total_count as f64 * 100.0).round();
    (pct as u32).min(100)
}

/// Match lists plus their score, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub score: u32,
}

impl From<MatchResult> for SkillMatchReport {
    fn from(result: MatchResult) -> Self {
        let score = score(result.matched.len(), result.total());
        let result = result.sorted();
        Self {
            matched: result.matched,
            missing: result.missing,
            score,
        }
    }
}
