//! Embedding Request Items
//!
//! The unit of work sent to a multimodal embedding endpoint. Each item is
//! tagged with its modality the way the remote protocol expects:
//!
//! ```json
//! {"type": "text", "text": "..."}
//! {"type": "image_url", "image_url": {"url": "..."}}
//! ```

use serde::{Deserialize, Serialize};

/// Value Object: one input to embed
///
/// ## Example
///
/// ```rust
/// use mme_domain::value_objects::EmbeddingInput;
///
/// let text = EmbeddingInput::text("a red bicycle");
/// let image = EmbeddingInput::image_url("https://example.com/bike.jpg");
/// assert!(text.is_text());
/// assert!(!image.is_text());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EmbeddingInput {
    /// Free text
    Text {
        /// The text content
        text: String,
    },
    /// Image referenced by URL (http(s) or data URI)
    ImageUrl {
        /// Image location
        image_url: ImageUrl,
    },
}

/// Image location wrapper required by the wire format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageUrl {
    /// URL of the image
    pub url: String,
}

impl EmbeddingInput {
    /// Build a text item
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Build an image item
    pub fn image_url(url: impl Into<String>) -> Self {
        Self::ImageUrl {
            image_url: ImageUrl { url: url.into() },
        }
    }

    /// Whether this item is text
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// The text or URL carried by the item
    pub fn content(&self) -> &str {
        match self {
            Self::Text { text } => text,
            Self::ImageUrl { image_url } => &image_url.url,
        }
    }
}
