//! Summary & Improvements: the two prose blocks of an analysis report.
//!
//! Neither block is essential to the score, so LLM failures degrade to a readable
//! placeholder instead of failing the whole analysis.

use tracing::warn;

use crate::analysis::prompts::{IMPROVEMENTS_PROMPT_TEMPLATE, SUMMARY_PROMPT_TEMPLATE};
use crate::llm_client::prompts::fenced_document;
use crate::llm_client::TextGenerator;

fn fill_template(template: &str, jd_text: &str, resume_text: &str) -> String {
    template
        .replace("{jd_document}", &fenced_document("Job Description", jd_text))
        .replace("{resume_document}", &fenced_document("Resume", resume_text))
}

/// 2-3 sentence professional summary tailored to the job description.
pub async fn generate_summary(
    jd_text: &str,
    resume_text: &str,
    generator: &dyn TextGenerator,
) -> String {
    let prompt = fill_template(SUMMARY_PROMPT_TEMPLATE, jd_text, resume_text);
    match generator.generate(&prompt).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Summary generation failed: {e}");
            format!("Could not generate summary: {e}")
        }
    }
}

/// 3-5 actionable resume improvements for the job description.
pub async fn generate_improvements(
    jd_text: &str,
    resume_text: &str,
    generator: &dyn TextGenerator,
) -> String {
    let prompt = fill_template(IMPROVEMENTS_PROMPT_TEMPLATE, jd_text, resume_text);
    match generator.generate(&prompt).await {
        Ok(text) => text.trim().to_string(),
        Err(e) => {
            warn!("Improvement generation failed: {e}");
            format!("Could not generate improvements: {e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records the last prompt and replies with padded text.
    #[derive(Default)]
    struct RecordingGenerator {
        last_prompt: Mutex<String>,
    }

    #[async_trait]
    impl TextGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = prompt.to_string();
            Ok("  Seasoned Rust engineer.  \n".to_string())
        }
    }

    struct DownGenerator;

    #[async_trait]
    impl TextGenerator for DownGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::Api {
                status: 503,
                message: "overloaded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_summary_prompt_carries_both_documents() {
        let generator = RecordingGenerator::default();
        let summary = generate_summary("Rust role", "Wrote Rust", &generator).await;

        assert_eq!(summary, "Seasoned Rust engineer.");
        let prompt = generator.last_prompt.lock().unwrap().clone();
        assert!(prompt.contains("2-3 sentence professional summary"));
        assert!(prompt.contains("Job Description:\n---\nRust role\n---"));
        assert!(prompt.contains("Resume:\n---\nWrote Rust\n---"));
    }

    #[tokio::test]
    async fn test_improvements_prompt() {
        let generator = RecordingGenerator::default();
        generate_improvements("Rust role", "Wrote Rust", &generator).await;

        let prompt = generator.last_prompt.lock().unwrap().clone();
        assert!(prompt.contains("3 to 5 specific, actionable improvements"));
        assert!(prompt.contains("Resume:\n---\nWrote Rust\n---"));
    }

    #[tokio::test]
    async fn test_summary_failure_degrades_to_message() {
        let summary = generate_summary("jd", "resume", &DownGenerator).await;
        assert!(summary.starts_with("Could not generate summary:"));
        assert!(summary.contains("overloaded"));
    }

    #[tokio::test]
    async fn test_improvements_failure_degrades_to_message() {
        let text = generate_improvements("jd", "resume", &DownGenerator).await;
        assert!(text.starts_with("Could not generate improvements:"));
    }
}
