//! Content element types.

use serde::{Deserialize, Serialize};

use super::BoundingBox;
use crate::error::{Error, Result};

/// The type of content carried by a document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Text content
    Text,

    /// Image content
    Image,

    /// Graphic content (vector drawings, separators)
    Graphic,

    /// Tabular content
    Table,
}

/// The payload of a content element, tagged by its content type.
///
/// Only text carries its value in the model; image, graphic and table
/// payloads are opaque here; pixel access goes through the element's
/// bounding box and an external image collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "content_type", content = "content", rename_all = "snake_case")]
pub enum Content {
    /// A recognized text run
    Text(String),

    /// An image region
    Image,

    /// A graphic region
    Graphic,

    /// A table region
    Table,
}

impl Content {
    /// Create a text payload.
    pub fn text(s: impl Into<String>) -> Self {
        Content::Text(s.into())
    }

    /// The content type tag of this payload.
    pub fn content_type(&self) -> ContentType {
        match self {
            Content::Text(_) => ContentType::Text,
            Content::Image => ContentType::Image,
            Content::Graphic => ContentType::Graphic,
            Content::Table => ContentType::Table,
        }
    }

    /// Build a payload from a content type and its flattened string form.
    ///
    /// Non-text types discard the string (it is empty in the flattened
    /// document view).
    pub fn from_parts(content_type: ContentType, content: String) -> Self {
        match content_type {
            ContentType::Text => Content::Text(content),
            ContentType::Image => Content::Image,
            ContentType::Graphic => Content::Graphic,
            ContentType::Table => Content::Table,
        }
    }
}

/// One positioned unit of document content: a canonical bounding box, a
/// typed payload, and an optional classification label.
///
/// Elements are immutable values. They are created by an OCR adapter or a
/// dataset collaborator, owned by exactly one [`Document`](super::Document),
/// and relabeled only through [`with_label`](ContentElement::with_label),
/// which returns a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentElement {
    /// Position and extent in pixel coordinates
    #[serde(flatten)]
    pub bbox: BoundingBox,

    /// Typed payload
    #[serde(flatten)]
    pub content: Content,

    /// Entity/class tag, present only for classification-augmented elements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<i64>,
}

impl ContentElement {
    /// Create an unlabeled element.
    pub fn new(bbox: BoundingBox, content: Content) -> Self {
        Self {
            bbox,
            content,
            label: None,
        }
    }

    /// Create a text element from canonical box values.
    pub fn text(x: f64, y: f64, w: f64, h: f64, content: impl Into<String>) -> Self {
        Self::new(BoundingBox::new(x, y, w, h), Content::text(content))
    }

    /// Return a copy of this element carrying the given label.
    pub fn with_label(&self, label: i64) -> Self {
        Self {
            label: Some(label),
            ..self.clone()
        }
    }

    /// The content type tag of this element.
    pub fn content_type(&self) -> ContentType {
        self.content.content_type()
    }

    /// Borrow the text payload, or fail if this is not a text element.
    pub fn text_content(&self) -> Result<&str> {
        match &self.content {
            Content::Text(s) => Ok(s),
            other => Err(Error::NonTextContent(other.content_type())),
        }
    }
}
