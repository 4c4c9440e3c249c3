//! Remote Embedding Response Shapes
//!
//! The multimodal endpoint answers with `data` holding either one record or
//! a list of records. [`EmbeddingData`] makes that an explicit variant that
//! is resolved once per request through [`EmbeddingData::into_records`].

use serde::{Deserialize, Serialize};

use crate::value_objects::EmbeddingVector;

/// One embedding record as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    /// The embedding vector
    pub embedding: EmbeddingVector,
    /// Position of the matching input, when the provider echoes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    /// Object type tag (usually `"embedding"`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
}

impl EmbeddingRecord {
    /// Record without index or object tag
    pub fn new(embedding: EmbeddingVector) -> Self {
        Self {
            embedding,
            index: None,
            object: None,
        }
    }

    /// Attach the echoed input index
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

/// The `data` field of a response: one record or a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingData {
    /// A list of records
    Batch(Vec<EmbeddingRecord>),
    /// A single record returned as a scalar object
    Single(EmbeddingRecord),
}

impl EmbeddingData {
    /// Number of records carried
    pub fn len(&self) -> usize {
        match self {
            Self::Batch(records) => records.len(),
            Self::Single(_) => 1,
        }
    }

    /// Whether no record is carried
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the provider answered with a scalar record
    pub fn is_single(&self) -> bool {
        matches!(self, Self::Single(_))
    }

    /// Normalize to a list, a scalar record becoming a one-element list
    pub fn into_records(self) -> Vec<EmbeddingRecord> {
        match self {
            Self::Batch(records) => records,
            Self::Single(record) => vec![record],
        }
    }
}

impl From<EmbeddingRecord> for EmbeddingData {
    fn from(record: EmbeddingRecord) -> Self {
        Self::Single(record)
    }
}

impl From<Vec<EmbeddingRecord>> for EmbeddingData {
    fn from(records: Vec<EmbeddingRecord>) -> Self {
        Self::Batch(records)
    }
}

/// Token usage reported by the provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingUsage {
    /// Tokens consumed by the inputs
    #[serde(default)]
    pub prompt_tokens: u64,
    /// Total tokens billed
    #[serde(default)]
    pub total_tokens: u64,
}

/// A multimodal embedding response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingResponse {
    /// Request identifier assigned by the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model that produced the embeddings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// One record or a list of records
    pub data: EmbeddingData,
    /// Token usage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<EmbeddingUsage>,
}

impl EmbeddingResponse {
    /// Response carrying only `data`
    pub fn new(data: impl Into<EmbeddingData>) -> Self {
        Self {
            id: None,
            model: None,
            data: data.into(),
            usage: None,
        }
    }
}
