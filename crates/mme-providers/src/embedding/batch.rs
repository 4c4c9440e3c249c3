//! Chunked batch runner
//!
//! Splits an input sequence into requests of at most `chunk_size` items,
//! sends them one after another and concatenates the vectors so that the
//! i-th output always belongs to the i-th input.

use mme_domain::error::{Error, Result};
use mme_domain::ports::MultimodalEmbeddingTransport;
use mme_domain::value_objects::{EmbeddingData, EmbeddingInput, EmbeddingVector};
use tracing::debug;

/// Embed `items` through `transport`, `chunk_size` inputs per request
///
/// Chunks are sent strictly in order and each request completes before the
/// next one starts. The first failing chunk fails the whole call; vectors
/// from earlier chunks are discarded.
pub async fn run_batches(
    transport: &dyn MultimodalEmbeddingTransport,
    model: &str,
    items: &[EmbeddingInput],
    chunk_size: usize,
) -> Result<Vec<EmbeddingVector>> {
    if chunk_size == 0 {
        return Err(Error::invalid_argument(
            "chunk_size must be greater than 0",
        ));
    }

    let mut embeddings = Vec::with_capacity(items.len());

    for (chunk_index, chunk) in items.chunks(chunk_size).enumerate() {
        debug!(
            model,
            chunk_index,
            chunk_len = chunk.len(),
            "Requesting multimodal embeddings"
        );

        let response = transport.create_multimodal_embedding(model, chunk).await?;
        embeddings.extend(chunk_vectors(chunk_index, chunk.len(), response.data)?);
    }

    Ok(embeddings)
}

/// Normalize one chunk's response into vectors in input order
///
/// A scalar record counts as a one-element list. When every record echoes an
/// `index` the records are placed by it and the indices must cover
/// `0..expected` exactly; when none do, provider order is taken as input
/// order.
fn chunk_vectors(
    chunk_index: usize,
    expected: usize,
    data: EmbeddingData,
) -> Result<Vec<EmbeddingVector>> {
    let records = data.into_records();

    if records.len() != expected {
        return Err(Error::contract_violation(format!(
            "chunk {chunk_index}: expected {expected} embeddings, got {}",
            records.len()
        )));
    }

    let indexed = records.iter().filter(|r| r.index.is_some()).count();
    if indexed == 0 {
        return Ok(records.into_iter().map(|r| r.embedding).collect());
    }
    if indexed != expected {
        return Err(Error::contract_violation(format!(
            "chunk {chunk_index}: only {indexed} of {expected} embeddings carry an index"
        )));
    }

    let mut slots: Vec<Option<EmbeddingVector>> = vec![None; expected];
    for record in records {
        match record.index {
            Some(index) if index < expected && slots[index].is_none() => {
                slots[index] = Some(record.embedding);
            }
            other => {
                return Err(Error::contract_violation(format!(
                    "chunk {chunk_index}: duplicate or out-of-range index {other:?}"
                )));
            }
        }
    }

    slots
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            Error::contract_violation(format!("chunk {chunk_index}: missing embedding index"))
        })
}
