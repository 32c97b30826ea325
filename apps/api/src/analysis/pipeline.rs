//! Resume Analysis: orchestrates the full analysis pipeline.
//!
//! Flow: extract_skills → match_skills → score → (summary ∥ improvements) → report.
//!
//! Skill extraction is the only step whose failure fails the analysis; without a skill
//! list there is nothing to score.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analysis::summary::{generate_improvements, generate_summary};
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::skills::extractor::extract_skills;
use crate::skills::matcher::match_skills;
use crate::skills::scorer::SkillMatchReport;

/// Everything the dashboard shows for one resume / job description pair.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub analysis_id: Uuid,
    /// Skills extracted from the job description, in extraction order.
    pub skills: Vec<String>,
    /// Alphabetical.
    pub matched: Vec<String>,
    /// Alphabetical.
    pub missing: Vec<String>,
    /// 0 – 100
    pub score: u32,
    pub summary: String,
    pub improvements: String,
    pub generated_at: DateTime<Utc>,
}

/// Runs the full analysis for already-extracted document text.
pub async fn analyze(
    resume_text: &str,
    jd_text: &str,
    generator: &dyn TextGenerator,
) -> Result<AnalysisReport, AppError> {
    let analysis_id = Uuid::new_v4();

    // Step 1: Skills from the JD
    let skills = extract_skills(jd_text, generator).await?;
    info!(%analysis_id, skills = skills.len(), "Extracted skills from job description");

    // Step 2 + 3: Match and score
    let SkillMatchReport {
        matched,
        missing,
        score,
    } = SkillMatchReport::from(match_skills(resume_text, &skills));
    info!(
        %analysis_id,
        matched = matched.len(),
        missing = missing.len(),
        score,
        "Resume scored against job description"
    );

    // Step 4: Prose blocks, requested concurrently
    let (summary, improvements) = tokio::join!(
        generate_summary(jd_text, resume_text, generator),
        generate_improvements(jd_text, resume_text, generator),
    );

    Ok(AnalysisReport {
        analysis_id,
        skills,
        matched,
        missing,
        score,
        summary,
        improvements,
        generated_at: Utc::now(),
    })
}
