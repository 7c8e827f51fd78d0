//! Incremental hashing over async streams of byte chunks

use crate::{Algorithm, AnyDigester, Digest, Digester, HashError, Result};
use futures::Stream;
use pin_project_lite::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

pin_project! {
    /// Streaming hasher that absorbs each chunk as it arrives
    ///
    /// Yields one [`StreamHashChunk`] per input chunk, then a final chunk
    /// carrying the digest once the input ends.
    pub struct StreamingHasher<S> {
        #[pin]
        input: S,
        digester: AnyDigester,
        finished: bool,
        total_bytes: u64,
    }
}

impl<S> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    /// Create a new streaming hasher for the specified algorithm
    pub fn new(input: S, algorithm: Algorithm) -> Self {
        Self {
            input,
            digester: algorithm.digester(),
            finished: false,
            total_bytes: 0,
        }
    }

    /// The algorithm being computed
    pub fn algorithm(&self) -> Algorithm {
        self.digester.algorithm()
    }

    /// Get the total number of bytes processed so far
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }
}

/// Chunk result from streaming hash computation
#[derive(Debug, Clone)]
pub struct StreamHashChunk {
    /// Bytes processed in this chunk
    pub bytes_processed: u64,
    /// Total bytes processed so far
    pub total_bytes: u64,
    /// Whether this is the final chunk with the digest
    pub is_final: bool,
    /// Final digest (only present if `is_final` = true)
    pub digest: Option<Digest>,
}

/// Result of streaming hash computation
#[derive(Debug, Clone)]
pub struct StreamHashResult {
    /// The final digest
    pub digest: Digest,
    /// Total bytes processed
    pub total_bytes: u64,
    /// Algorithm used
    pub algorithm: Algorithm,
}

impl<S> Stream for StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    type Item = Result<StreamHashChunk>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut this = self.project();

        if *this.finished {
            return Poll::Ready(None);
        }

        match this.input.as_mut().poll_next(cx) {
            Poll::Ready(Some(chunk)) => {
                let chunk_size = chunk.len() as u64;
                *this.total_bytes = this.total_bytes.wrapping_add(chunk_size);
                this.digester.update(&chunk);

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: chunk_size,
                    total_bytes: *this.total_bytes,
                    is_final: false,
                    digest: None,
                })))
            }
            Poll::Ready(None) => {
                *this.finished = true;
                let digest = this.digester.finalize();

                Poll::Ready(Some(Ok(StreamHashChunk {
                    bytes_processed: 0,
                    total_bytes: *this.total_bytes,
                    is_final: true,
                    digest: Some(digest),
                })))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Create a streaming hasher from any stream of byte chunks
pub fn stream_hash<S>(input: S, algorithm: Algorithm) -> StreamingHasher<S>
where
    S: Stream<Item = Vec<u8>>,
{
    StreamingHasher::new(input, algorithm)
}

/// Collect the final digest from a streaming hasher
///
/// # Errors
///
/// Returns `HashError::Internal` if the stream ends without a final chunk.
pub async fn collect_hash<S>(mut hasher: StreamingHasher<S>) -> Result<StreamHashResult>
where
    S: Stream<Item = Vec<u8>> + Unpin,
{
    use futures::StreamExt;

    let algorithm = hasher.algorithm();
    let mut total_bytes = 0;
    let mut final_digest = None;

    while let Some(chunk_result) = hasher.next().await {
        let chunk = chunk_result?;
        total_bytes = chunk.total_bytes;

        if chunk.is_final {
            final_digest = chunk.digest;
            break;
        }
    }

    let digest = final_digest
        .ok_or_else(|| HashError::internal("Stream ended without producing final digest"))?;

    Ok(StreamHashResult {
        digest,
        total_bytes,
        algorithm,
    })
}
