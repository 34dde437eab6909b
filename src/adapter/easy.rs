//! EasyOCR adapter.
//!
//! EasyOCR emits a flat list of `(quad, text, confidence)` records. The
//! adapter takes the axis-aligned hull of each quad and truncates the
//! resulting coordinates to integers, matching the engine's pixel-grid
//! convention; the recognized string is kept as-is and confidence is
//! ignored.

use super::{OcrOutput, Quad};
use crate::model::BoundingBox;

/// One recognized region: detection quad, recognized text, confidence.
pub type EasyOcrRecord = (Quad, String, f64);

/// Convert flat EasyOCR output into the canonical hand-off.
///
/// Zero input records produce empty lists, which construct a valid empty
/// document.
pub fn from_easy_ocr(records: Vec<EasyOcrRecord>) -> OcrOutput {
    let mut output = OcrOutput::default();
    for (quad, text, _confidence) in records {
        let b = BoundingBox::from_quad(quad);
        output
            .bbox
            .push([b.x.trunc(), b.y.trunc(), b.w.trunc(), b.h.trunc()]);
        output.content.push(text);
    }
    output
}
