// Resume analysis: skill extraction → matching → scoring, plus the two prose blocks
// (tailored summary and improvement suggestions) and the HTTP surface for all of it.
// All LLM calls go through llm_client; no direct Gemini calls here.

pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod summary;
