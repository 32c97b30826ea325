// All LLM prompt constants for the Analysis module.
// Document fencing comes from llm_client::prompts.

/// Professional summary prompt.
/// Replace: {jd_document}, {resume_document}
pub const SUMMARY_PROMPT_TEMPLATE: &str = "\
You are an expert resume writer. Based on the provided resume and the target job description, \
write a compelling 2-3 sentence professional summary. The summary should immediately highlight \
the candidate's most relevant qualifications and experiences that align with the job's key requirements.

{jd_document}
{resume_document}";

/// Improvement suggestions prompt.
/// Replace: {jd_document}, {resume_document}
pub const IMPROVEMENTS_PROMPT_TEMPLATE: &str = "\
As an expert career coach, review the provided resume against the job description.
Provide a list of 3 to 5 specific, actionable improvements the candidate can make to their resume \
to better align with this specific job.
Focus on re-framing existing experience, quantifying achievements, and incorporating missing keywords naturally.

{jd_document}
{resume_document}";
