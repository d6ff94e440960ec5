use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use super::{DEFAULT_MAX_BYTES, DocumentFormat, ExtractError, TextExtractor, check_size};

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph text of a `.docx` body, one line per paragraph.
///
/// Runs inside a paragraph are concatenated; `<w:tab/>` becomes a tab and
/// `<w:br/>` a line break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxExtractor {
    /// Limit on the archive and on the uncompressed document part.
    pub max_bytes: Option<usize>,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self {
            max_bytes: Some(DEFAULT_MAX_BYTES),
        }
    }
}

impl TextExtractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        check_size(bytes, self.max_bytes)?;
        let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(malformed)?;
        let mut part = archive.by_name(DOCUMENT_PART).map_err(malformed)?;

        let size = usize::try_from(part.size()).unwrap_or(usize::MAX);
        if let Some(limit) = self.max_bytes {
            if size > limit {
                return Err(ExtractError::TooLarge { size, limit });
            }
        }
        let mut xml = String::with_capacity(size.min(DEFAULT_MAX_BYTES));
        part.read_to_string(&mut xml).map_err(malformed)?;
        paragraphs(&xml).map(|paras| paras.join("\n"))
    }
}

fn malformed(err: impl std::fmt::Display) -> ExtractError {
    ExtractError::Malformed {
        format: DocumentFormat::Docx,
        reason: err.to_string(),
    }
}

fn paragraphs(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(malformed)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"tab" if in_run => current.push('\t'),
                b"br" | b"cr" if in_run => current.push('\n'),
                b"p" => paragraphs.push(String::new()),
                _ => {}
            },
            Event::Text(t) if in_text => current.push_str(&t.unescape().map_err(malformed)?),
            Event::End(e) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(paragraphs)
}
