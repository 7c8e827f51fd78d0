//! Internal workers behind the fluent API
//!
//! Plain hashing and HMAC run on the async runtime in bounded chunks with a
//! yield between them. PBKDF2 is dominated by its iteration loop and runs on
//! the blocking pool instead.

use crate::{Algorithm, AsyncHashResult, Digest, Digester, HashError, Hmac, Pbkdf2, Result};
use cryypt_common::LoggingTransformer;
use std::time::Instant;
use tokio::sync::oneshot;
use zeroize::Zeroizing;

/// Bytes absorbed between yield points
pub(crate) const CHUNK_SIZE: usize = 8 * 1024;

async fn digest_chunked<D: Digester>(mut digester: D, data: &[u8]) -> Digest {
    for chunk in data.chunks(CHUNK_SIZE) {
        digester.update(chunk);
        tokio::task::yield_now().await;
    }
    digester.finalize()
}

/// Spawn `job` onto the current runtime and hand back its result future.
fn spawn<F>(operation: &'static str, job: F) -> AsyncHashResult
where
    F: std::future::Future<Output = Result<Digest>> + Send + 'static,
{
    let Ok(handle) = tokio::runtime::Handle::try_current() else {
        tracing::warn!("hash requested outside of a tokio runtime");
        return AsyncHashResult::error(HashError::internal("No tokio runtime available"));
    };

    let (tx, rx) = oneshot::channel();
    handle.spawn(async move {
        let started = Instant::now();
        let result = job.await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        LoggingTransformer::log_performance_metric(operation, elapsed_ms, result.is_ok());
        if let Err(e) = &result {
            LoggingTransformer::log_crypto_error(operation, e);
        }
        let _ = tx.send(result);
    });
    AsyncHashResult::new(rx)
}

pub(crate) fn hash(algorithm: Algorithm, data: Vec<u8>) -> AsyncHashResult {
    LoggingTransformer::log_digest_operation("hash", algorithm.name(), data.len());
    spawn("hash", async move {
        Ok(digest_chunked(algorithm.digester(), &data).await)
    })
}

pub(crate) fn hmac(
    algorithm: Algorithm,
    key: Zeroizing<Vec<u8>>,
    data: Vec<u8>,
) -> AsyncHashResult {
    LoggingTransformer::log_digest_operation("hmac", algorithm.name(), data.len());
    spawn("hmac", async move {
        let mac = Hmac::new(algorithm.digester(), &key)?;
        Ok::<_, HashError>(digest_chunked(mac, &data).await)
    })
}

pub(crate) fn pbkdf2(
    algorithm: Algorithm,
    salt: Vec<u8>,
    iterations: u32,
    dk_len: usize,
    password: Zeroizing<Vec<u8>>,
) -> AsyncHashResult {
    tracing::debug!(algorithm = algorithm.name(), iterations, dk_len, "PBKDF2 requested");
    spawn("pbkdf2", async move {
        let task = tokio::task::spawn_blocking(move || -> Result<Digest> {
            let mut kdf = Pbkdf2::hmac(algorithm.digester(), &salt, iterations, dk_len)?;
            kdf.update(&password);
            Ok(kdf.finalize())
        });
        task.await
            .map_err(|e| HashError::internal(format!("PBKDF2 worker failed: {e}")))?
    })
}
