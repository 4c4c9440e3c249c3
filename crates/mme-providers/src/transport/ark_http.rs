//! Ark HTTP Transport
//!
//! Sends one multimodal embedding request per call to
//! `{api_base}/embeddings/multimodal` with bearer authentication.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use mme_domain::constants::{ARK_DEFAULT_API_BASE, ARK_PROVIDER_NAME};
use mme_domain::error::{Error, Result};
use mme_domain::ports::MultimodalEmbeddingTransport;
use mme_domain::value_objects::{EmbeddingConfig, EmbeddingInput, EmbeddingResponse};

use crate::constants::{ARK_MULTIMODAL_EMBEDDINGS_PATH, BEARER_PREFIX, CONTENT_TYPE_JSON};
use crate::embedding::helpers::constructor;
use crate::utils::HttpResponseUtils;

/// Request body of the multimodal embeddings endpoint
#[derive(Serialize)]
struct MultimodalEmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [EmbeddingInput],
}

/// Ark multimodal embedding transport
///
/// Receives HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use mme_providers::transport::ArkHttpTransport;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder()
///         .timeout(Duration::from_secs(30))
///         .build()?;
///     let transport = ArkHttpTransport::new(
///         Some("your-api-key"),
///         None,
///         Duration::from_secs(30),
///         client,
///     )?;
///     assert_eq!(
///         transport.endpoint(),
///         "https://ark.cn-beijing.volces.com/api/v3/embeddings/multimodal"
///     );
///     Ok(())
/// }
/// ```
pub struct ArkHttpTransport {
    api_key: String,
    base_url: Option<String>,
    timeout: Duration,
    http_client: Client,
}

impl ArkHttpTransport {
    /// Create a new Ark transport
    ///
    /// # Arguments
    /// * `api_key` - Ark API key, required
    /// * `base_url` - Optional custom base URL (defaults to the Beijing region API)
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        api_key: Option<&str>,
        base_url: Option<String>,
        timeout: Duration,
        http_client: Client,
    ) -> Result<Self> {
        let api_key = constructor::validate_api_key(ARK_PROVIDER_NAME, api_key)?;
        let base_url = constructor::validate_url(base_url);

        Ok(Self {
            api_key,
            base_url,
            timeout,
            http_client,
        })
    }

    /// Create a transport from an embedding configuration
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self> {
        let timeout = constructor::timeout_from_secs(config.timeout_secs);
        let http_client = constructor::build_http_client(timeout)?;
        Self::new(
            config.api_key.as_deref(),
            config.api_base.clone(),
            timeout,
            http_client,
        )
    }

    /// Get the base URL for this transport
    pub fn base_url(&self) -> String {
        constructor::get_effective_url(self.base_url.as_deref(), ARK_DEFAULT_API_BASE)
    }

    /// Full URL of the multimodal embeddings endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url(), ARK_MULTIMODAL_EMBEDDINGS_PATH)
    }

    /// Request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl MultimodalEmbeddingTransport for ArkHttpTransport {
    async fn create_multimodal_embedding(
        &self,
        model: &str,
        input: &[EmbeddingInput],
    ) -> Result<EmbeddingResponse> {
        let payload = MultimodalEmbeddingRequest { model, input };

        let response = self
            .http_client
            .post(self.endpoint())
            .header(AUTHORIZATION, format!("{BEARER_PREFIX}{}", self.api_key))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::transport_with_source(
                        format!("Ark request timed out after {:?}", self.timeout),
                        e,
                    )
                } else {
                    Error::transport_with_source(format!("Ark HTTP request failed: {e}"), e)
                }
            })?;

        HttpResponseUtils::check_and_parse(response, "Ark").await
    }
}
