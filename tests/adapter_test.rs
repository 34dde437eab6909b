//! Integration tests for the OCR adapters.
//!
//! Each engine's raw dump goes through tag dispatch and must come out as
//! the canonical hand-off with equal-length lists in native emission
//! order.

use docnorm::{Document, Error, OcrEngine};
use serde_json::json;

fn paddle_raw() -> serde_json::Value {
    // Two blocks of recognized lines: (quad, (text, confidence))
    json!([
        [
            [
                [[28.0, 37.0], [302.0, 39.0], [302.0, 72.0], [28.0, 70.0]],
                ["ACKNOWLEDGEMENTS", 0.99]
            ],
            [
                [[26.0, 82.0], [172.0, 83.0], [172.0, 104.0], [26.0, 103.0]],
                ["We would like to", 0.95]
            ]
        ],
        [[
            [[30.0, 120.0], [110.0, 120.0], [110.0, 140.0], [30.0, 140.0]],
            ["thank", 0.97]
        ]]
    ])
}

fn easy_raw() -> serde_json::Value {
    json!([
        [
            [[10.5, 20.9], [110.2, 20.9], [110.2, 45.1], [10.5, 45.1]],
            "Invoice",
            0.98
        ],
        [
            [[10.0, 60.0], [90.0, 60.0], [90.0, 80.0], [10.0, 80.0]],
            "Total",
            0.87
        ]
    ])
}

fn tesseract_raw() -> serde_json::Value {
    json!({
        "left":   [0.0, 12.0, 80.0, 150.0],
        "top":    [0.0, 30.0, 30.0, 30.0],
        "width":  [600.0, 50.0, 44.0, 60.0],
        "height": [800.0, 14.0, 14.0, 14.0],
        "conf":   [-1.0, 96.0, 0.0, 88.0],
        "text":   ["", "Invoice", "ghost", "Total"]
    })
}

#[test]
fn test_length_invariant_all_engines() {
    for (engine, raw) in [
        (OcrEngine::PaddleOcr, paddle_raw()),
        (OcrEngine::EasyOcr, easy_raw()),
        (OcrEngine::Tesseract, tesseract_raw()),
    ] {
        let output = engine.normalize(&raw).unwrap();
        assert_eq!(
            output.bbox.len(),
            output.content.len(),
            "length invariant violated for {engine}"
        );
    }
}

#[test]
fn test_paddle_flattens_blocks_in_emission_order() {
    let output = OcrEngine::PaddleOcr.normalize(&paddle_raw()).unwrap();
    assert_eq!(
        output.content,
        vec!["ACKNOWLEDGEMENTS", "We would like to", "thank"]
    );
    // Hull of the first (slightly skewed) quad
    assert_eq!(output.bbox[0], [28.0, 37.0, 274.0, 35.0]);
}

#[test]
fn test_easy_truncates_to_integer_coordinates() {
    let output = OcrEngine::EasyOcr.normalize(&easy_raw()).unwrap();
    assert_eq!(output.bbox[0], [10.0, 20.0, 99.0, 24.0]);
    assert_eq!(output.content[0], "Invoice");
}

#[test]
fn test_tesseract_confidence_filter() {
    let output = OcrEngine::Tesseract.normalize(&tesseract_raw()).unwrap();
    // The conf=-1 structural row and the conf=0 row are dropped
    assert_eq!(output.content, vec!["Invoice", "Total"]);
    assert_eq!(output.bbox[1], [150.0, 30.0, 60.0, 14.0]);
}

#[test]
fn test_all_records_filtered_is_valid_empty_output() {
    let raw = json!({
        "left": [0.0], "top": [0.0], "width": [10.0], "height": [10.0],
        "conf": [-1.0], "text": ["page"]
    });
    let output = OcrEngine::Tesseract.normalize(&raw).unwrap();
    assert!(output.is_empty());

    // An empty hand-off still constructs a valid (empty) document
    let doc = Document::new("blank.png", (100, 100), output).unwrap();
    assert!(doc.is_empty());
}

#[test]
fn test_malformed_shapes_name_the_engine() {
    let cases = [
        (OcrEngine::PaddleOcr, json!({"lines": []}), "paddleocr"),
        (OcrEngine::EasyOcr, json!([["missing quad"]]), "easyocr"),
        (OcrEngine::Tesseract, json!({"left": [1.0]}), "tesseract"),
    ];
    for (engine, raw, expected) in cases {
        match engine.normalize(&raw).unwrap_err() {
            Error::MalformedOcrOutput { engine, .. } => assert_eq!(engine, expected),
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_engines_are_not_shape_sniffed() {
    // A perfectly valid easyocr dump handed to the tesseract tag fails:
    // dispatch is by the explicit tag, never by inspecting the value.
    let err = OcrEngine::Tesseract.normalize(&easy_raw()).unwrap_err();
    assert!(matches!(err, Error::MalformedOcrOutput { .. }));
}
