//! Document-level types.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Content, ContentElement, ContentType};
use crate::adapter::OcrOutput;
use crate::error::{Error, Result};

/// A normalized document: an ordered collection of positioned content
/// elements plus document-level metadata.
///
/// The pixel dimensions are read once from the backing image by the caller
/// (image access is an external collaborator; this crate performs no I/O)
/// and stay immutable for the document's lifetime. They are used only for
/// relative-position classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Source identifier, conventionally the backing image's file name
    pub filename: String,

    /// Pixel width of the backing image
    pub width: u32,

    /// Pixel height of the backing image
    pub height: u32,

    /// Content elements in native emission order
    pub elements: Vec<ContentElement>,
}

impl Document {
    /// Construct a document from normalized OCR output.
    ///
    /// `pixel_shape` is the backing image's `(width, height)`, already read
    /// by the caller. Every box/content pair becomes a text element; when
    /// `output.label` is present each element additionally carries its
    /// label.
    ///
    /// Fails with [`Error::LengthMismatch`] when the parallel lists in
    /// `output` disagree in length. No partial document is ever returned.
    pub fn new(
        filename: impl Into<String>,
        pixel_shape: (u32, u32),
        output: OcrOutput,
    ) -> Result<Self> {
        if output.bbox.len() != output.content.len() {
            return Err(Error::length_mismatch(
                "bbox",
                output.bbox.len(),
                "content",
                output.content.len(),
            ));
        }
        if let Some(labels) = &output.label {
            if output.bbox.len() != labels.len() {
                return Err(Error::length_mismatch(
                    "bbox",
                    output.bbox.len(),
                    "label",
                    labels.len(),
                ));
            }
        }

        let mut elements: Vec<ContentElement> = output
            .bbox
            .into_iter()
            .zip(output.content)
            .map(|(bbox, content)| {
                ContentElement::new(BoundingBox::from(bbox), Content::Text(content))
            })
            .collect();
        if let Some(labels) = output.label {
            for (element, label) in elements.iter_mut().zip(labels) {
                element.label = Some(label);
            }
        }

        Ok(Self {
            filename: filename.into(),
            width: pixel_shape.0,
            height: pixel_shape.1,
            elements,
        })
    }

    /// Pixel dimensions of the backing image as `(width, height)`.
    pub fn pixel_shape(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of content elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check whether the document has any elements. An empty document is
    /// valid (e.g. every OCR record was filtered out).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get an element by index.
    pub fn get(&self, index: usize) -> Option<&ContentElement> {
        self.elements.get(index)
    }

    /// Plain text of all text elements, one per line, in emission order.
    pub fn plain_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|el| el.text_content().ok())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The flattened parallel-list view of this document.
    ///
    /// `label_list` is present only when every element carries a label.
    pub fn to_flat(&self) -> FlatDocument {
        let label_list = self
            .elements
            .iter()
            .map(|el| el.label)
            .collect::<Option<Vec<i64>>>();
        FlatDocument {
            filename: self.filename.clone(),
            bbox_list: self.elements.iter().map(|el| el.bbox.into()).collect(),
            content_type_list: self.elements.iter().map(|el| el.content_type()).collect(),
            content_list: self
                .elements
                .iter()
                .map(|el| match &el.content {
                    Content::Text(s) => s.clone(),
                    _ => String::new(),
                })
                .collect(),
            label_list,
        }
    }

    /// Rebuild a document from its flattened view plus the pixel
    /// dimensions the flat view does not carry.
    pub fn from_flat(flat: FlatDocument, pixel_shape: (u32, u32)) -> Result<Self> {
        if flat.bbox_list.len() != flat.content_list.len() {
            return Err(Error::length_mismatch(
                "bbox_list",
                flat.bbox_list.len(),
                "content_list",
                flat.content_list.len(),
            ));
        }
        if flat.bbox_list.len() != flat.content_type_list.len() {
            return Err(Error::length_mismatch(
                "bbox_list",
                flat.bbox_list.len(),
                "content_type_list",
                flat.content_type_list.len(),
            ));
        }
        if let Some(labels) = &flat.label_list {
            if flat.bbox_list.len() != labels.len() {
                return Err(Error::length_mismatch(
                    "bbox_list",
                    flat.bbox_list.len(),
                    "label_list",
                    labels.len(),
                ));
            }
        }

        let mut elements: Vec<ContentElement> = flat
            .bbox_list
            .into_iter()
            .zip(flat.content_type_list)
            .zip(flat.content_list)
            .map(|((bbox, content_type), content)| {
                ContentElement::new(
                    BoundingBox::from(bbox),
                    Content::from_parts(content_type, content),
                )
            })
            .collect();
        if let Some(labels) = flat.label_list {
            for (element, label) in elements.iter_mut().zip(labels) {
                element.label = Some(label);
            }
        }

        Ok(Self {
            filename: flat.filename,
            width: pixel_shape.0,
            height: pixel_shape.1,
            elements,
        })
    }

    /// Serialize the nested document view to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json_string(self, format)
    }
}

/// The flattened interchange view of a document: parallel lists instead of
/// nested elements. Derivable from any [`Document`] and convertible back
/// given the pixel dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatDocument {
    /// Source identifier
    pub filename: String,

    /// Canonical `[x, y, w, h]` boxes
    pub bbox_list: Vec<[f64; 4]>,

    /// Content type per element
    pub content_type_list: Vec<ContentType>,

    /// Text payload per element (empty string for non-text elements)
    pub content_list: Vec<String>,

    /// Labels, present only for classification-augmented documents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_list: Option<Vec<i64>>,
}

impl FlatDocument {
    /// Serialize the flattened view to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json_string(self, format)
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

fn to_json_string<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };
    result.map_err(|e| Error::Serialize(e.to_string()))
}
