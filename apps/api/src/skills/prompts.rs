// LLM prompt constants for skill extraction.

/// Skill extraction prompt. Replace `{jd_document}` with a fenced job description.
pub const SKILL_EXTRACTION_PROMPT_TEMPLATE: &str = "\
From the job description provided below, please extract the top 15-20 most important technical skills, tools, and concepts.
- Return only the names of the skills.
- Each skill should be on a new line.
- Do not use any prefixes like bullet points, numbers, or asterisks.
- Do not add any commentary or explanations.

{jd_document}";
