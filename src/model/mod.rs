//! Canonical document model.
//!
//! This module defines the representation every OCR engine's output is
//! normalized into: axis-aligned bounding boxes, typed content elements,
//! and the document that owns them. The model is engine-agnostic; the
//! per-engine projections live in [`crate::adapter`].

mod bbox;
mod document;
mod element;

pub use bbox::BoundingBox;
pub use document::{Document, FlatDocument, JsonFormat};
pub use element::{Content, ContentElement, ContentType};
