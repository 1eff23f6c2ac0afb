//! Resume text extraction.
//!
//! Dispatches on the uploaded filename's suffix and returns plain text,
//! capped to a fixed character budget before it reaches the LLM.

mod docx;
mod pdf;

use thiserror::Error;

/// Character budget for extracted resume text sent to the LLM.
pub const MAX_RESUME_CHARS: usize = 3000;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Extracts plain text from an uploaded resume.
///
/// The suffix match is case-sensitive: `resume.PDF` is rejected the same
/// way `resume.txt` is. A corrupt file with a recognized suffix surfaces
/// as `ExtractError::Parse` carrying the underlying parser message.
pub fn extract(filename: &str, content: &[u8]) -> Result<String, ExtractError> {
    let text = if filename.ends_with(".pdf") {
        pdf::extract_text(content)?
    } else if filename.ends_with(".doc") || filename.ends_with(".docx") {
        docx::extract_text(content)?
    } else {
        return Err(ExtractError::UnsupportedFileType(filename.to_string()));
    };

    Ok(truncate_chars(text, MAX_RESUME_CHARS))
}

/// Truncates `text` to at most `max` characters (not bytes), keeping the
/// result on a char boundary.
fn truncate_chars(mut text: String, max: usize) -> String {
    if let Some((idx, _)) = text.char_indices().nth(max) {
        text.truncate(idx);
    }
    text
}
