//! Error types for the docnorm library.

use thiserror::Error;

use crate::model::ContentType;

/// Result type alias for docnorm operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while normalizing OCR output or querying
/// relationships between content elements.
#[derive(Error, Debug)]
pub enum Error {
    /// Parallel lists handed to document construction disagree in length.
    #[error("length mismatch between '{left_name}' ({left}) and '{right_name}' ({right})")]
    LengthMismatch {
        /// Name of the first list (e.g. "bbox")
        left_name: &'static str,
        /// Length of the first list
        left: usize,
        /// Name of the second list (e.g. "content")
        right_name: &'static str,
        /// Length of the second list
        right: usize,
    },

    /// A text-only function was invoked on a non-text element.
    #[error("expected text content, found {0:?}")]
    NonTextContent(ContentType),

    /// Raw OCR output did not match the engine's expected shape.
    #[error("malformed {engine} output: {reason}")]
    MalformedOcrOutput {
        /// Name of the engine whose shape was violated
        engine: &'static str,
        /// What was missing or mistyped
        reason: String,
    },

    /// Error producing the JSON interchange form.
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl Error {
    pub(crate) fn length_mismatch(
        left_name: &'static str,
        left: usize,
        right_name: &'static str,
        right: usize,
    ) -> Self {
        Error::LengthMismatch {
            left_name,
            left,
            right_name,
            right,
        }
    }

    pub(crate) fn malformed(engine: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedOcrOutput {
            engine,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::length_mismatch("bbox", 3, "content", 2);
        assert_eq!(
            err.to_string(),
            "length mismatch between 'bbox' (3) and 'content' (2)"
        );

        let err = Error::NonTextContent(ContentType::Image);
        assert_eq!(err.to_string(), "expected text content, found Image");

        let err = Error::malformed("tesseract", "missing field `conf`");
        assert_eq!(
            err.to_string(),
            "malformed tesseract output: missing field `conf`"
        );
    }
}
