//! Resume text extraction for pdf, docx and plain text files.

use std::io::{Cursor, Read};
use std::path::Path;

use lopdf::Document;
use quick_xml::Reader;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::events::Event;
use zip::ZipArchive;

use pathwise_core::extract::DocumentExtractor;
use pathwise_types::error::ExtractionError;

/// Formats accepted by [`FileExtractor`], by extension.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "txt", "md"];

/// [`DocumentExtractor`] dispatching on the file extension.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileExtractor;

impl FileExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Read `path` from disk and extract its text.
    pub async fn extract_path(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ExtractionError::Io(format!("{}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.extract(&file_name, &bytes)
    }
}

impl DocumentExtractor for FileExtractor {
    fn extract(&self, file_name: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let text = match extension.as_str() {
            "pdf" => extract_pdf(bytes)?,
            "docx" => extract_docx(bytes)?,
            "txt" | "md" => extract_plain(&extension, bytes)?,
            _ => return Err(ExtractionError::UnsupportedFormat(file_name.to_string())),
        };

        let text = text.trim();
        if text.is_empty() {
            return Err(ExtractionError::Empty);
        }
        tracing::debug!(file = file_name, format = %extension, chars = text.len(), "document extracted");
        Ok(text.to_string())
    }
}

fn corrupt(format: &str, reason: impl ToString) -> ExtractionError {
    ExtractionError::Corrupt {
        format: format.to_string(),
        reason: reason.to_string(),
    }
}

fn extract_plain(format: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| corrupt(format, e))
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = Document::load_mem(bytes).map_err(|e| corrupt("pdf", e))?;
    let pages: Vec<u32> = doc.get_pages().keys().copied().collect();
    if pages.is_empty() {
        return Err(ExtractionError::Empty);
    }
    doc.extract_text(&pages).map_err(|e| corrupt("pdf", e))
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(|e| corrupt("docx", e))?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| corrupt("docx", e))?
        .read_to_string(&mut xml)
        .map_err(|e| corrupt("docx", e))?;
    docx_text(&xml)
}

/// Collect the text of `<w:t>` runs from a WordprocessingML body.
///
/// Paragraph ends and `w:br`/`w:cr` become newlines, `w:tab` a tab.
fn docx_text(xml: &str) -> Result<String, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let decoder = reader.decoder();
    let mut out = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(|e| corrupt("docx", e))? {
            Event::Start(tag) if tag.name().as_ref() == b"w:t" => in_text = true,
            Event::End(tag) => match tag.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Start(tag) | Event::Empty(tag) => match tag.name().as_ref() {
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:tab" => out.push('\t'),
                _ => {}
            },
            Event::Text(text) if in_text => {
                let raw = decoder.decode(&text).map_err(|e| corrupt("docx", e))?;
                out.push_str(&unescape(&raw).map_err(|e| corrupt("docx", e))?);
            }
            Event::GeneralRef(entity) if in_text => {
                if let Some(ch) = entity.resolve_char_ref().map_err(|e| corrupt("docx", e))? {
                    out.push(ch);
                } else {
                    let name = decoder.decode(&entity).map_err(|e| corrupt("docx", e))?;
                    match resolve_predefined_entity(&name) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('&');
                            out.push_str(&name);
                            out.push(';');
                        }
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn docx_bytes(document_xml: &str) -> Vec<u8> {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(document_xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_plain_text_and_markdown() {
        let extractor = FileExtractor::new();
        let text = extractor.extract("cv.txt", b"\xEF\xBB\xBFJane Doe\nEngineer\n").unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
        assert_eq!(extractor.extract("CV.MD", b"# Jane").unwrap(), "# Jane");
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let xml = r#"<?xml version="1.0"?><w:document><w:body>
            <w:p><w:r><w:t>Jane Doe</w:t></w:r></w:p>
            <w:p><w:r><w:t xml:space="preserve">Rust &amp; Go </w:t></w:r><w:r><w:t>engineer</w:t></w:r></w:p>
            </w:body></w:document>"#;
        let text = FileExtractor::new().extract("resume.docx", &docx_bytes(xml)).unwrap();
        assert_eq!(text, "Jane Doe\nRust & Go engineer");
    }

    #[test]
    fn test_docx_character_references_resolved() {
        let xml = "<w:document><w:body>\
            <w:p><w:r><w:t>R&#233;sum&#233;</w:t></w:r></w:p>\
            <w:p><w:r><w:t>Jane&#x2019;s &lt;team&gt;</w:t></w:r></w:p>\
            </w:body></w:document>";
        let text = FileExtractor::new().extract("resume.docx", &docx_bytes(xml)).unwrap();
        assert_eq!(text, "Résumé\nJane\u{2019}s <team>");
    }

    #[test]
    fn test_docx_breaks_and_tabs_with_attributes() {
        let xml = r#"<w:document><w:body><w:p>
            <w:r><w:t>Skills</w:t><w:tab w:val="left"/><w:t>Rust</w:t></w:r>
            <w:r><w:br w:type="page"/><w:t>Page two</w:t></w:r>
            </w:p></w:body></w:document>"#;
        let text = FileExtractor::new().extract("resume.docx", &docx_bytes(xml)).unwrap();
        assert_eq!(text, "Skills\tRust\nPage two");
    }

    #[test]
    fn test_docx_malformed_xml_is_corrupt() {
        let xml = "<w:document><w:body><w:p><w:t>Jane</w:p></w:body></w:document>";
        let err = FileExtractor::new()
            .extract("resume.docx", &docx_bytes(xml))
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Corrupt { ref format, .. } if format == "docx"));
    }

    #[test]
    fn test_docx_without_document_part_is_corrupt() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("other.xml", SimpleFileOptions::default()).unwrap();
        writer.write_all(b"<x/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = FileExtractor::new().extract("resume.docx", &bytes).unwrap_err();
        assert!(matches!(err, ExtractionError::Corrupt { ref format, .. } if format == "docx"));
    }

    #[test]
    fn test_supported_extensions_are_dispatched() {
        for ext in SUPPORTED_EXTENSIONS {
            let result = FileExtractor::new().extract(&format!("cv.{ext}"), b"");
            assert!(
                !matches!(result, Err(ExtractionError::UnsupportedFormat(_))),
                "{ext} not dispatched"
            );
        }
    }

    #[test]
    fn test_corrupt_pdf() {
        let err = FileExtractor::new().extract("resume.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::Corrupt { ref format, .. } if format == "pdf"));
    }

    #[test]
    fn test_unsupported_and_empty() {
        let extractor = FileExtractor::new();
        assert!(matches!(
            extractor.extract("photo.png", b"\x89PNG"),
            Err(ExtractionError::UnsupportedFormat(_))
        ));
        assert!(matches!(extractor.extract("resume", b"text"), Err(ExtractionError::UnsupportedFormat(_))));
        assert!(matches!(extractor.extract("blank.txt", b"  \n "), Err(ExtractionError::Empty)));
        assert!(matches!(
            extractor.extract("bad.txt", &[0xff, 0xfe, 0x00]),
            Err(ExtractionError::Corrupt { .. })
        ));
    }

    #[tokio::test]
    async fn test_extract_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cv.md");
        tokio::fs::write(&path, "Skills: SQL").await.unwrap();
        assert_eq!(FileExtractor::new().extract_path(&path).await.unwrap(), "Skills: SQL");

        let missing = FileExtractor::new().extract_path(&dir.path().join("nope.txt")).await;
        assert!(matches!(missing, Err(ExtractionError::Io(_))));
    }
}
