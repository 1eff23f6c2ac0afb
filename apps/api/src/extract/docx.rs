use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

use super::ExtractError;

/// Extracts paragraph text from an in-memory DOCX (OOXML) archive.
///
/// Reads `word/document.xml` and collects the text of each `w:p` paragraph
/// in document order, joined by newlines. Legacy binary `.doc` files are
/// not ZIP archives and fail here with a parse error, which is surfaced to
/// the caller like any other corrupt upload.
pub fn extract_text(content: &[u8]) -> Result<String, ExtractError> {
    let cursor = Cursor::new(content);
    let mut archive =
        zip::ZipArchive::new(cursor).map_err(|e| ExtractError::Parse(e.to_string()))?;

    let mut document_file = archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Parse(e.to_string()))?;
    let mut xml = String::new();
    document_file
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::Parse(e.to_string()))?;

    parse_document_xml(&xml)
}

fn parse_document_xml(xml: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut current = String::new();
    let mut paragraphs = Vec::new();
    let mut in_paragraph = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == b"w:p" {
                    in_paragraph = true;
                    current.clear();
                }
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"w:p" {
                    paragraphs.push(current.trim().to_string());
                    current.clear();
                    in_paragraph = false;
                }
            }
            Ok(Event::Text(e)) => {
                if in_paragraph {
                    let value = e.unescape().map_err(|e| ExtractError::Parse(e.to_string()))?;
                    current.push_str(&value);
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(ExtractError::Parse(err.to_string())),
            _ => {}
        }

        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    use super::*;

    fn docx_with_document_xml(xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const TWO_PARAGRAPHS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Senior data engineer.</w:t></w:r></w:p>
    <w:p><w:r><w:t>Built pipelines at scale.</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let docx = docx_with_document_xml(TWO_PARAGRAPHS);
        let text = extract_text(&docx).unwrap();
        assert_eq!(text, "Senior data engineer.\nBuilt pipelines at scale.");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let xml = r#"<w:document xmlns:w="w"><w:body><w:p><w:r><w:t>C &amp; D</w:t></w:r></w:p></w:body></w:document>"#;
        let docx = docx_with_document_xml(xml);
        assert_eq!(extract_text(&docx).unwrap(), "C & D");
    }

    #[test]
    fn test_not_a_zip_is_parse_error() {
        let err = extract_text(b"plain old bytes").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_zip_without_document_xml_is_parse_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("unrelated.txt", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"nope").unwrap();
        let bytes = writer.finish().unwrap().into_inner();
        let err = extract_text(&bytes).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }
}
