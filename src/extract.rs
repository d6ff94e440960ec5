//! Turning uploaded files into plain text.
//!
//! Comparison works on decoded strings only. This module is the boundary
//! where files become strings:
//!
//! ```text
//! path ──► DocumentFormat (by extension) ──► TextExtractor ──► String
//! ```
//!
//! | Format          | Extractor              | Cargo feature |
//! |-----------------|------------------------|---------------|
//! | plain text      | [`PlainTextExtractor`] | always        |
//! | PDF             | `PdfExtractor`         | `pdf`         |
//! | Word (`.docx`)  | `DocxExtractor`        | `docx`        |
//!
//! Legacy binary Word (`.doc`) files, and formats whose feature is disabled,
//! are reported as [`ExtractError::UnsupportedFormat`].

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use thiserror::Error;
use tracing::debug;

#[cfg(feature = "docx")]
mod docx;
#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
pub use self::docx::DocxExtractor;
#[cfg(feature = "pdf")]
pub use self::pdf::PdfExtractor;

/// Default upper bound on the size of an input file: 10 MiB.
pub const DEFAULT_MAX_BYTES: usize = 10 * 1024 * 1024;

/// Errors produced while reading or decoding an input file.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{format} documents are not supported; convert the file to plain text")]
    UnsupportedFormat { format: DocumentFormat },
    #[error("input is {size} bytes, limit is {limit}")]
    TooLarge { size: usize, limit: usize },
    #[error("invalid {encoding} text: {reason}")]
    InvalidEncoding {
        encoding: &'static str,
        reason: String,
    },
    #[error("malformed {format} document: {reason}")]
    Malformed {
        format: DocumentFormat,
        reason: String,
    },
}

/// File formats the upload boundary recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
    /// Binary `.doc`, never extracted.
    LegacyWord,
}

impl DocumentFormat {
    /// Format implied by a path's extension. Anything that is not a PDF or
    /// Word extension is treated as plain text.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => DocumentFormat::Pdf,
            Some("docx") => DocumentFormat::Docx,
            Some("doc") => DocumentFormat::LegacyWord,
            _ => DocumentFormat::PlainText,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::PlainText => f.write_str("plain text"),
            DocumentFormat::Pdf => f.write_str("PDF"),
            DocumentFormat::Docx => f.write_str("Word (.docx)"),
            DocumentFormat::LegacyWord => f.write_str("legacy Word (.doc)"),
        }
    }
}

/// Capability to turn file bytes of one format into text.
pub trait TextExtractor: Send + Sync {
    fn format(&self) -> DocumentFormat;
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

pub(crate) fn check_size(bytes: &[u8], max_bytes: Option<usize>) -> Result<(), ExtractError> {
    match max_bytes {
        Some(limit) if bytes.len() > limit => Err(ExtractError::TooLarge {
            size: bytes.len(),
            limit,
        }),
        _ => Ok(()),
    }
}

/// Decoder for plain text files.
///
/// A byte order mark (UTF-8, UTF-16 LE, UTF-16 BE) decides the encoding and
/// is stripped. Without one, valid UTF-8 is taken as is; anything else goes
/// through charset detection and is decoded with the guessed encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainTextExtractor {
    pub max_bytes: Option<usize>,
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self {
            max_bytes: Some(DEFAULT_MAX_BYTES),
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::PlainText
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        check_size(bytes, self.max_bytes)?;
        decode_text(bytes)
    }
}

/// Decode text bytes, see [`PlainTextExtractor`] for the detection rules.
pub fn decode_text(bytes: &[u8]) -> Result<String, ExtractError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        if had_errors {
            return Err(ExtractError::InvalidEncoding {
                encoding: encoding.name(),
                reason: "byte sequence does not match the byte order mark".to_string(),
            });
        }
        return Ok(text.into_owned());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, false);
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    debug!(
        len = bytes.len(),
        encoding = encoding.name(),
        had_errors,
        "charset_detected"
    );
    Ok(text.into_owned())
}

/// Extractor for `format`, or `UnsupportedFormat` when this build has none.
pub fn extractor_for(format: DocumentFormat) -> Result<Box<dyn TextExtractor>, ExtractError> {
    match format {
        DocumentFormat::PlainText => Ok(Box::new(PlainTextExtractor::default())),
        #[cfg(feature = "pdf")]
        DocumentFormat::Pdf => Ok(Box::new(PdfExtractor::default())),
        #[cfg(feature = "docx")]
        DocumentFormat::Docx => Ok(Box::new(DocxExtractor::default())),
        other => Err(ExtractError::UnsupportedFormat { format: other }),
    }
}

/// Read a file and extract its text, choosing the extractor by extension.
pub fn extract_path(path: impl AsRef<Path>) -> Result<String, ExtractError> {
    let path = path.as_ref();
    let extractor = extractor_for(DocumentFormat::from_path(path))?;

    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = extractor.extract(&bytes)?;
    debug!(
        path = %path.display(),
        format = %extractor.format(),
        bytes = bytes.len(),
        chars = text.chars().count(),
        "file_extracted"
    );
    Ok(text)
}
