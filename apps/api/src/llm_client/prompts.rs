// Shared prompt constants and prompt-building utilities.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt used for every call. All Tailor prompts expect plain text back.
pub const PLAIN_TEXT_SYSTEM: &str = "You are a precise assistant for resume and job description analysis. \
    Respond with plain text only. \
    Do NOT use markdown code fences. \
    Do NOT include apologies or remarks about yourself.";

/// Wraps a document between `---` fences under a heading, the layout every Tailor
/// prompt uses to hand documents to the model.
pub fn fenced_document(heading: &str, body: &str) -> String {
    format!("{heading}:\n---\n{body}\n---\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_document_layout() {
        assert_eq!(
            fenced_document("Job Description", "Rust engineer"),
            "Job Description:\n---\nRust engineer\n---\n"
        );
    }
}
