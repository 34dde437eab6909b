//! # docnorm
//!
//! OCR output normalization and document layout analysis for Rust.
//!
//! This library ingests heterogeneous OCR output, with each engine
//! reporting text regions in its own geometric convention, and normalizes
//! it into
//! one canonical document representation: positioned content elements with
//! a shared bounding-box convention. On top of that model it exposes
//! deterministic geometric and textual relationship primitives for
//! layout-understanding consumers (key-value association, entity tagging).
//!
//! ## Quick Start
//!
//! ```
//! use docnorm::{Document, OcrEngine};
//! use serde_json::json;
//!
//! fn main() -> docnorm::Result<()> {
//!     // Raw EasyOCR dump: (quad, text, confidence) records
//!     let raw = json!([
//!         [[[10.0, 20.0], [110.0, 20.0], [110.0, 45.0], [10.0, 45.0]], "Invoice", 0.98],
//!         [[[10.0, 60.0], [90.0, 60.0], [90.0, 80.0], [10.0, 80.0]], "Total: $12.34", 0.87]
//!     ]);
//!
//!     // Normalize and build a document (pixel shape read by the caller)
//!     let output = OcrEngine::EasyOcr.normalize(&raw)?;
//!     let doc = Document::new("invoice.png", (600, 800), output)?;
//!     assert_eq!(doc.len(), 2);
//!
//!     // Query relationships between its elements
//!     let d = docnorm::layout::euclidean_distance(doc.get(0).unwrap(), doc.get(1).unwrap());
//!     assert_eq!(d, 40.0);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Three OCR conventions**: two-corner boxes, four-corner
//!   quadrilaterals, per-word record tables, all normalized to one
//!   canonical `(x, y, w, h)` model
//! - **Layout relationships**: distances, overlap ratio, alignment,
//!   angle, document-relative vertical position
//! - **Text relationships**: character statistics, Levenshtein distance,
//!   date/zip/currency/number classification
//! - **JSON interchange**: nested and flattened document views, both
//!   lossless round-trips

pub mod adapter;
pub mod error;
pub mod layout;
pub mod model;
pub mod text;

// Re-export commonly used types
pub use adapter::{
    from_easy_ocr, from_paddle_ocr, from_tesseract_ocr, EasyOcrRecord, OcrEngine, OcrOutput,
    PaddleOcrLine, Quad, TesseractOutput,
};
pub use error::{Error, Result};
pub use layout::{ContentRelativePosition, HorizontalAlignment, VerticalAlignment};
pub use model::{
    BoundingBox, Content, ContentElement, ContentType, Document, FlatDocument, JsonFormat,
};
pub use text::{TextClassifier, TextSource};

/// Normalize a raw engine dump into the canonical hand-off.
///
/// Thin wrapper over [`OcrEngine::normalize`] for call sites that prefer a
/// free function.
pub fn normalize(engine: OcrEngine, raw: &serde_json::Value) -> Result<OcrOutput> {
    engine.normalize(raw)
}

/// Normalize a raw engine dump and construct a document from it in one
/// step.
///
/// `pixel_shape` is the backing image's `(width, height)`, already read by
/// the caller; this crate performs no image I/O.
pub fn document_from_ocr(
    engine: OcrEngine,
    raw: &serde_json::Value,
    filename: impl Into<String>,
    pixel_shape: (u32, u32),
) -> Result<Document> {
    let output = engine.normalize(raw)?;
    Document::new(filename, pixel_shape, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_from_ocr() {
        let raw = json!([
            [[[0.0, 0.0], [10.0, 0.0], [10.0, 5.0], [0.0, 5.0]], "hello", 0.9]
        ]);
        let doc = document_from_ocr(OcrEngine::EasyOcr, &raw, "page.png", (100, 100)).unwrap();
        assert_eq!(doc.filename, "page.png");
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.get(0).unwrap().text_content().unwrap(), "hello");
    }

    #[test]
    fn test_normalize_rejects_malformed_input() {
        let raw = json!("not an ocr dump");
        assert!(normalize(OcrEngine::PaddleOcr, &raw).is_err());
    }
}
