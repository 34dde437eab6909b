//! PaddleOCR adapter.
//!
//! PaddleOCR emits recognized lines grouped by page/block: each group is a
//! list of `(quad, (text, confidence))` pairs, where `quad` is the four
//! corner points of the detected region. The adapter flattens the grouping
//! in native emission order, takes the axis-aligned hull of each quad, and
//! keeps the top recognition candidate's text. Confidence is ignored.

use super::{OcrOutput, Quad};
use crate::model::BoundingBox;

/// One recognized line: detection quad plus the top `(text, confidence)`
/// recognition candidate.
pub type PaddleOcrLine = (Quad, (String, f64));

/// Convert grouped PaddleOCR output into the canonical hand-off.
///
/// Zero input groups (or zero lines across all groups) produce empty
/// lists, which construct a valid empty document.
pub fn from_paddle_ocr(groups: Vec<Vec<PaddleOcrLine>>) -> OcrOutput {
    let mut output = OcrOutput::default();
    for group in groups {
        for (quad, (text, _confidence)) in group {
            output.bbox.push(BoundingBox::from_quad(quad).into());
            output.content.push(text);
        }
    }
    output
}
