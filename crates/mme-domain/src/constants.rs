//! Domain layer constants
//!
//! Defaults that both the providers and the infrastructure layer need to
//! agree on. Provider-internal values (HTTP paths, header values) stay in
//! `mme_providers::constants`.

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Registry name of the Ark multimodal embedding provider
pub const ARK_PROVIDER_NAME: &str = "ark";

/// Model used when the configuration leaves the model empty
pub const ARK_DEFAULT_MODEL: &str = "doubao-embedding-vision-250615";

/// Default Ark API base URL
pub const ARK_DEFAULT_API_BASE: &str = "https://ark.cn-beijing.volces.com/api/v3";

/// Registry name of the offline null provider
pub const NULL_PROVIDER_NAME: &str = "null";

// ============================================================================
// BATCHING DEFAULTS
// ============================================================================

/// Default number of inputs per remote request
///
/// The multimodal endpoint may fuse every input of a request into a single
/// embedding, so one input per request is the only size that is always safe.
pub const DEFAULT_CHUNK_SIZE: usize = 1;

/// Default per-request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
