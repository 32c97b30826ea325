// Skill matching core: normalize skill labels, match them against a resume, score.
// Skill extraction is the only part here that talks to the LLM.

pub mod extractor;
pub mod matcher;
pub mod normalizer;
pub mod prompts;
pub mod scorer;
