//! Per-engine OCR adapters.
//!
//! Each supported engine reports text regions in its own shape; each
//! adapter projects that shape into the canonical [`OcrOutput`] hand-off
//! consumed by [`Document`](crate::model::Document) construction.
//!
//! Dispatch is by the explicit [`OcrEngine`] tag; raw values are never
//! shape-sniffed. A raw value that does not deserialize into the tagged
//! engine's shape fails with [`Error::MalformedOcrOutput`] naming the
//! engine.

mod easy;
mod paddle;
mod tesseract;

pub use easy::{from_easy_ocr, EasyOcrRecord};
pub use paddle::{from_paddle_ocr, PaddleOcrLine};
pub use tesseract::{from_tesseract_ocr, TesseractOutput};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A quadrilateral as four `[x, y]` corner points.
pub type Quad = [[f64; 2]; 4];

/// The canonical adapter output and document-construction contract:
/// parallel lists of canonical boxes and contents, with an optional label
/// list for classification-augmented input.
///
/// This is a transient hand-off: it is produced by an adapter (or
/// deserialized from a dataset collaborator's JSON) and immediately
/// consumed by document construction. Equal lengths are enforced at that
/// construction, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    /// Canonical `[x, y, w, h]` boxes in native emission order
    pub bbox: Vec<[f64; 4]>,

    /// Recognized content per box
    pub content: Vec<String>,

    /// Entity/class labels, present only for classification datasets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<Vec<i64>>,
}

impl OcrOutput {
    /// Number of records.
    pub fn len(&self) -> usize {
        self.bbox.len()
    }

    /// Check whether the output has no records. Empty output is valid and
    /// constructs an empty document.
    pub fn is_empty(&self) -> bool {
        self.bbox.is_empty()
    }
}

/// A supported OCR engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OcrEngine {
    /// Quad-polygon output grouped by page/block
    PaddleOcr,
    /// Flat quad-polygon list
    EasyOcr,
    /// Per-word parallel-array table with explicit confidence
    Tesseract,
}

impl OcrEngine {
    /// The engine name used in error messages and logs.
    pub fn name(&self) -> &'static str {
        match self {
            OcrEngine::PaddleOcr => "paddleocr",
            OcrEngine::EasyOcr => "easyocr",
            OcrEngine::Tesseract => "tesseract",
        }
    }

    /// Normalize a raw engine dump into the canonical hand-off.
    ///
    /// `raw` is the engine's own JSON shape (see the per-engine modules).
    /// Any value that does not match the shape of the engine this tag
    /// names fails with [`Error::MalformedOcrOutput`].
    pub fn normalize(&self, raw: &serde_json::Value) -> Result<OcrOutput> {
        let output = match self {
            OcrEngine::PaddleOcr => {
                let lines: Vec<Vec<PaddleOcrLine>> = self.deserialize(raw)?;
                from_paddle_ocr(lines)
            }
            OcrEngine::EasyOcr => {
                let records: Vec<EasyOcrRecord> = self.deserialize(raw)?;
                from_easy_ocr(records)
            }
            OcrEngine::Tesseract => {
                let table: TesseractOutput = self.deserialize(raw)?;
                from_tesseract_ocr(&table)?
            }
        };
        if output.is_empty() {
            log::debug!("{}: no records survived normalization", self.name());
        }
        Ok(output)
    }

    fn deserialize<T: serde::de::DeserializeOwned>(&self, raw: &serde_json::Value) -> Result<T> {
        serde_json::from_value(raw.clone()).map_err(|e| Error::malformed(self.name(), e.to_string()))
    }
}

impl std::fmt::Display for OcrEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
