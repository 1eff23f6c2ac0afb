use lopdf::Document;
use tracing::debug;

use super::ExtractError;

/// Extracts text from an in-memory PDF, page by page in page order.
///
/// A page whose text extraction fails contributes an empty string rather
/// than failing the whole document; pages are joined with a newline.
pub fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let doc = Document::load_mem(content).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let pages: Vec<String> = doc
        .get_pages()
        .into_keys()
        .map(|page_num| {
            doc.extract_text(&[page_num]).unwrap_or_else(|e| {
                debug!("Text extraction failed for page {page_num}: {e}");
                String::new()
            })
        })
        .collect();

    Ok(pages.join("\n"))
}
