// All LLM prompt constants for the counsel module.
// Templates use `{placeholder}` markers filled by the builders below.

/// System prompt for the preference-based suggestion call.
pub const PREFERENCE_SYSTEM: &str =
    "You are a career counsellor AI assistant helping users discover Gen-AI career paths.";

/// System prompt for the resume-based suggestion call.
pub const RESUME_SYSTEM: &str = "You are a Gen-AI career advisor.";

/// Preference prompt template. Replace `{top_categories}` before sending.
const PREFERENCE_PROMPT_TEMPLATE: &str = "\
User has rated statements for career preferences. Top categories: {top_categories}.
Suggest 3-5 fitting career titles. For each, give:
- Main Gen-AI area
- Why it fits
- Two practical starting steps
Provide short, crisp sentences with bullet points.";

/// Resume prompt template. Replace `{resume_text}` before sending.
/// The caller truncates the resume text to the extraction character budget.
const RESUME_PROMPT_TEMPLATE: &str = "\
Analyze the following resume and suggest 3-5 Gen-AI career paths:
Resume Content: {resume_text}
For each suggestion, include:
- Main Gen-AI area
- Why it fits
- Two practical starting steps
Provide short, crisp sentences with bullet points.";

/// Builds the user message for the preference variant from the ranked,
/// positively-scored category list.
pub fn preference_prompt(top_categories: &[String]) -> String {
    PREFERENCE_PROMPT_TEMPLATE.replace("{top_categories}", &top_categories.join(", "))
}

/// Builds the user message for the resume variant.
pub fn resume_prompt(resume_text: &str) -> String {
    RESUME_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
