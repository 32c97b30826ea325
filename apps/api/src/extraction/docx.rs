//! DOCX text extraction: paragraph text from `word/document.xml`, one line per paragraph.

use std::io::{Cursor, Read};
use std::sync::OnceLock;

use regex::{Captures, Regex};
use thiserror::Error;
use zip::result::ZipError;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("invalid DOCX container: {0}")]
    Zip(#[from] ZipError),

    #[error("failed to read word/document.xml: {0}")]
    Io(#[from] std::io::Error),
}

/// Text runs, tabs, breaks and paragraph ends, in document order.
fn body_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?s)<w:t(?:\s[^>]*)?>(?P<text>.*?)</w:t>|(?P<tab><w:tab\s*/>)|(?P<br><w:br(?:\s[^>]*)?/>)|(?P<end></w:p>|<w:p\s*/>)",
        )
        .expect("docx token pattern is valid")
    })
}

fn xml_entity() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(#x[0-9a-fA-F]+|#[0-9]+|amp|lt|gt|quot|apos);")
            .expect("xml entity pattern is valid")
    })
}

pub fn extract_text(bytes: &[u8]) -> Result<String, DocxError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;
    Ok(paragraphs_from_xml(&xml).join("\n"))
}

fn paragraphs_from_xml(xml: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for caps in body_token().captures_iter(xml) {
        if let Some(text) = caps.name("text") {
            current.push_str(&decode_entities(text.as_str()));
        } else if caps.name("tab").is_some() {
            current.push('\t');
        } else if caps.name("br").is_some() {
            current.push('\n');
        } else if caps.name("end").is_some() {
            paragraphs.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }
    paragraphs
}

fn decode_entities(text: &str) -> String {
    xml_entity()
        .replace_all(text, |caps: &Captures| {
            let entity = &caps[1];
            let decoded = match entity {
                "amp" => Some('&'),
                "lt" => Some('<'),
                "gt" => Some('>'),
                "quot" => Some('"'),
                "apos" => Some('\''),
                _ => entity
                    .strip_prefix("#x")
                    .map(|hex| u32::from_str_radix(hex, 16))
                    .or_else(|| entity.strip_prefix('#').map(str::parse::<u32>))
                    .and_then(Result::ok)
                    .and_then(char::from_u32),
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    fn build_docx(document_xml: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        writer.start_file(DOCUMENT_PART, options).unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
    <w:p>
      <w:r><w:t xml:space="preserve">Skills: </w:t></w:r>
      <w:r><w:t>C++ &amp; Rust</w:t></w:r>
    </w:p>
    <w:p/>
    <w:p><w:r><w:t>Tools</w:t><w:tab/><w:t>Docker</w:t></w:r></w:p>
  </w:body>
</w:document>"#;

    #[test]
    fn test_paragraphs_are_joined_with_newlines() {
        let text = extract_text(&build_docx(DOCUMENT)).unwrap();
        assert_eq!(text, "Jane Doe\nSkills: C++ & Rust\n\nTools\tDocker");
    }

    #[test]
    fn test_tab_element_is_not_a_text_run() {
        let paragraphs = paragraphs_from_xml("<w:p><w:tab/><w:t>x</w:t></w:p>");
        assert_eq!(paragraphs, vec!["\tx"]);
    }

    #[test]
    fn test_line_break_inside_paragraph() {
        let paragraphs = paragraphs_from_xml("<w:p><w:t>a</w:t><w:br/><w:t>b</w:t></w:p>");
        assert_eq!(paragraphs, vec!["a\nb"]);
    }

    #[test]
    fn test_decodes_named_and_numeric_entities() {
        assert_eq!(
            decode_entities("&lt;CI/CD&gt; &quot;x&quot; &apos;y&apos; &#65;&#x42;"),
            "<CI/CD> \"x\" 'y' AB"
        );
    }

    #[test]
    fn test_unknown_numeric_entity_is_kept() {
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    }

    #[test]
    fn test_missing_document_part_is_an_error() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(extract_text(&bytes), Err(DocxError::Zip(_))));
    }
}
