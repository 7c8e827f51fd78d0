//! HMAC over any [`Digester`] (RFC 2104)
//!
//! `HMAC(k, m) = H(opad || H(ipad || m))`. Keys longer than the inner block
//! are hashed down first; shorter keys are zero-padded to the block size.

use crate::{Digester, HashError, Prf, Result};
use zeroize::{ZeroizeOnDrop, Zeroizing};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// Keyed-hash message authentication code over `H`
///
/// Both pads are zeroed on drop. The inner state, which holds the keyed
/// `ipad` compression, is zeroed too when `H` is [`ZeroizeOnDrop`].
#[derive(Clone)]
pub struct Hmac<H: Digester + Clone> {
    inner: H,
    ipad: Zeroizing<Vec<u8>>,
    opad: Zeroizing<Vec<u8>>,
}

impl<H: Digester + Clone> Hmac<H> {
    /// Key a new HMAC over `inner`, which is reset before use.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidBlockSize` if the inner hash has a zero
    /// block size or a block size smaller than its digest size.
    pub fn new(inner: H, key: &[u8]) -> Result<Self> {
        check_block_size(&inner)?;
        let hmac = Self::keyed(inner, key);
        tracing::debug!(
            block_size = hmac.inner.block_size(),
            digest_length = hmac.inner.digest_length(),
            hashed_key = key.len() > hmac.inner.block_size(),
            "HMAC instance keyed"
        );
        Ok(hmac)
    }

    fn keyed(mut inner: H, key: &[u8]) -> Self {
        let block_size = inner.block_size();

        let mut block = Zeroizing::new(vec![0u8; block_size]);
        if key.len() > block_size {
            inner.reset();
            inner.update(key);
            let digest_length = inner.digest_length();
            inner.finalize_into(&mut block[..digest_length]);
        } else {
            block[..key.len()].copy_from_slice(key);
        }

        let ipad = Zeroizing::new(block.iter().map(|b| b ^ IPAD).collect::<Vec<u8>>());
        let opad = Zeroizing::new(block.iter().map(|b| b ^ OPAD).collect::<Vec<u8>>());

        let mut hmac = Self { inner, ipad, opad };
        hmac.reset();
        hmac
    }

    /// Compute a tag over `data` and compare it to `tag` in constant time.
    pub fn verify(&mut self, data: &[u8], tag: &[u8]) -> bool {
        self.update(data);
        self.finalize().verify(tag)
    }
}

impl<H: Digester + Clone + Default> Hmac<H> {
    /// Key an HMAC over a default-constructed `H`.
    ///
    /// # Errors
    ///
    /// Same as [`Hmac::new`].
    pub fn with_key(key: &[u8]) -> Result<Self> {
        Self::new(H::default(), key)
    }
}

pub(crate) fn check_block_size(inner: &dyn Digester) -> Result<()> {
    let block_size = inner.block_size();
    let digest_size = inner.digest_length();
    if block_size == 0 || block_size < digest_size {
        tracing::warn!(block_size, digest_size, "rejecting inner hash");
        return Err(HashError::InvalidBlockSize {
            block_size,
            digest_size,
        });
    }
    Ok(())
}

impl<H: Digester + Clone> Digester for Hmac<H> {
    fn reset(&mut self) {
        self.inner.reset();
        self.inner.update(&self.ipad);
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        let mut inner_digest = Zeroizing::new(vec![0u8; self.inner.digest_length()]);
        self.inner.finalize_into(&mut inner_digest);

        self.inner.update(&self.opad);
        self.inner.update(&inner_digest);
        self.inner.finalize_into(out);
        tracing::trace!(digest_length = out.len(), "HMAC finalized");

        self.reset();
    }

    fn digest_length(&self) -> usize {
        self.inner.digest_length()
    }

    fn block_size(&self) -> usize {
        self.inner.block_size()
    }
}

impl<H: Digester + Clone + ZeroizeOnDrop> ZeroizeOnDrop for Hmac<H> {}

impl<H: Digester + Clone> Prf for Hmac<H> {
    fn rekey(&self, key: &[u8]) -> Self {
        Self::keyed(self.inner.clone(), key)
    }
}
