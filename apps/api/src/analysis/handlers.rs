//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::pipeline::{analyze, AnalysisReport};
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::skills::extractor::extract_skills;
use crate::skills::matcher::match_skills;
use crate::skills::scorer::SkillMatchReport;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JD_FIELD: &str = "job_description";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractSkillsResponse {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchSkillsRequest {
    pub resume_text: String,
    pub skills: Vec<String>,
}

/// One uploaded file, before text extraction.
struct Upload {
    file_name: String,
    bytes: Vec<u8>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart upload of a resume and a job description (`.pdf`, `.docx` or text).
/// Extracts both documents and runs the full analysis.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let mut resume: Option<Upload> = None;
    let mut jd: Option<Upload> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read multipart field: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        if field_name != RESUME_FIELD && field_name != JD_FIELD {
            continue;
        }

        let file_name = field
            .file_name()
            .map(|s| s.to_string())
            .unwrap_or_else(|| format!("{field_name}.txt"));
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read {field_name}: {e}")))?
            .to_vec();

        let upload = Upload { file_name, bytes };
        if field_name == RESUME_FIELD {
            resume = Some(upload);
        } else {
            jd = Some(upload);
        }
    }

    let (resume, jd) = match (resume, jd) {
        (Some(resume), Some(jd)) => (resume, jd),
        _ => {
            return Err(AppError::Validation(format!(
                "Upload both '{RESUME_FIELD}' and '{JD_FIELD}' files to proceed"
            )))
        }
    };

    info!(
        resume = %resume.file_name,
        job_description = %jd.file_name,
        "Analyzing uploaded documents"
    );

    let resume_text = extract_upload(resume).await?;
    let jd_text = extract_upload(jd).await?;

    let report = analyze(&resume_text, &jd_text, state.generator.as_ref()).await?;
    Ok(Json(report))
}

/// POST /api/v1/analyze/text
///
/// Same analysis as the upload endpoint, for callers that already have plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalysisReport>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text cannot be empty".to_string()));
    }
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let report = analyze(
        &request.resume_text,
        &request.jd_text,
        state.generator.as_ref(),
    )
    .await?;
    Ok(Json(report))
}

/// POST /api/v1/skills/extract
///
/// Returns the cleaned skill list for a job description.
/// Useful for previewing extraction before analyzing.
pub async fn handle_extract_skills(
    State(state): State<AppState>,
    Json(request): Json<ExtractSkillsRequest>,
) -> Result<Json<ExtractSkillsResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let skills = extract_skills(&request.jd_text, state.generator.as_ref()).await?;
    Ok(Json(ExtractSkillsResponse { skills }))
}

/// POST /api/v1/skills/match
///
/// Matches a caller-supplied skill list against resume text. No LLM involved.
pub async fn handle_match_skills(
    Json(request): Json<MatchSkillsRequest>,
) -> Json<SkillMatchReport> {
    Json(SkillMatchReport::from(match_skills(
        &request.resume_text,
        &request.skills,
    )))
}

/// Extracts an upload's text on the blocking pool and rejects blank documents.
async fn extract_upload(upload: Upload) -> Result<String, AppError> {
    let Upload { file_name, bytes } = upload;
    let name = file_name.clone();

    let text = tokio::task::spawn_blocking(move || extract_text(&name, bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))??;

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(format!(
            "No text could be extracted from '{file_name}'"
        )));
    }
    Ok(text)
}
