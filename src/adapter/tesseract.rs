//! Tesseract adapter.
//!
//! Tesseract's data output is a table of parallel arrays, one entry per
//! detected word: `left`, `top`, `width`, `height`, `conf`, `text`. Boxes
//! are already in the canonical `(x, y, w, h)` convention. Structural rows
//! (pages, blocks, lines) carry non-positive confidence and are filtered
//! out; this is a required content filter, not a cosmetic cleanup.

use serde::{Deserialize, Serialize};

use super::OcrOutput;
use crate::error::{Error, Result};

/// Raw Tesseract data table. All arrays must have equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TesseractOutput {
    /// Left edge per record
    pub left: Vec<f64>,

    /// Top edge per record
    pub top: Vec<f64>,

    /// Width per record
    pub width: Vec<f64>,

    /// Height per record
    pub height: Vec<f64>,

    /// Recognition confidence per record; `<= 0` marks structural rows
    pub conf: Vec<f64>,

    /// Recognized text per record
    pub text: Vec<String>,
}

/// Convert a Tesseract data table into the canonical hand-off, dropping
/// every record with confidence `<= 0`.
///
/// Fails with [`Error::MalformedOcrOutput`] when the parallel arrays
/// disagree in length. Zero surviving records produce empty lists, which
/// construct a valid empty document.
pub fn from_tesseract_ocr(table: &TesseractOutput) -> Result<OcrOutput> {
    let n = table.text.len();
    for (name, len) in [
        ("left", table.left.len()),
        ("top", table.top.len()),
        ("width", table.width.len()),
        ("height", table.height.len()),
        ("conf", table.conf.len()),
    ] {
        if len != n {
            return Err(Error::malformed(
                "tesseract",
                format!("array '{name}' has {len} entries, 'text' has {n}"),
            ));
        }
    }

    let mut output = OcrOutput::default();
    for i in 0..n {
        if table.conf[i] <= 0.0 {
            continue;
        }
        output
            .bbox
            .push([table.left[i], table.top[i], table.width[i], table.height[i]]);
        output.content.push(table.text[i].clone());
    }
    log::debug!(
        "tesseract: kept {} of {} records after confidence filter",
        output.len(),
        n
    );
    Ok(output)
}
