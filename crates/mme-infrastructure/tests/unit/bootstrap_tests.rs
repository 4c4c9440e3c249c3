//! Provider bootstrap tests

use figment::Jail;
use mme_domain::Error;
use mme_domain::value_objects::EmbeddingConfig;
use mme_infrastructure::bootstrap::{create_embedding_provider, load_embedding_provider};
use mme_infrastructure::config::ConfigBuilder;

#[tokio::test]
async fn test_create_null_provider() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigBuilder::new()
        .with_embedding(EmbeddingConfig::new("null"))
        .build();

    let provider = create_embedding_provider(&config)?;
    let vectors = provider.embed_text(&["hello".to_string()]).await?;

    assert_eq!(provider.provider_name(), "null");
    assert_eq!(vectors.len(), 1);
    Ok(())
}

#[test]
fn test_create_ark_provider() -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigBuilder::new()
        .with_embedding(
            EmbeddingConfig::new("ark")
                .with_api_key("ak-test")
                .with_dimensions(2048),
        )
        .build();

    let provider = create_embedding_provider(&config)?;

    assert_eq!(provider.provider_name(), "ark");
    assert_eq!(provider.model(), "doubao-embedding-vision-250615");
    assert_eq!(provider.dimensions(), None);
    Ok(())
}

#[test]
fn test_create_ark_provider_without_key_fails() {
    let config = ConfigBuilder::new()
        .with_embedding(EmbeddingConfig::new("ark"))
        .build();

    let result = create_embedding_provider(&config);

    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_load_embedding_provider_from_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "service.toml",
            r#"
                [embedding]
                provider = "ark"
                api_key = "ak-file"
                chunk_size = 4
            "#,
        )?;

        let (config, provider) =
            load_embedding_provider(Some("service.toml".as_ref())).map_err(|e| e.to_string())?;

        assert_eq!(config.embedding.chunk_size, 4);
        assert_eq!(provider.provider_name(), "ark");
        Ok(())
    });
}
