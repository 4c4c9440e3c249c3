//! Provider-specific constants

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Vector length produced by the null provider
pub const EMBEDDING_DIMENSION_NULL: usize = 384;

/// Model name reported by the null provider
pub const NULL_MODEL_NAME: &str = "null-test";

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// Path of the Ark multimodal embeddings endpoint, relative to the API base
pub const ARK_MULTIMODAL_EMBEDDINGS_PATH: &str = "/embeddings/multimodal";

/// JSON content type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Prefix of the bearer authorization header value
pub const BEARER_PREFIX: &str = "Bearer ";
