//! PBKDF2 (RFC 8018 §5.2) over any [`Prf`]
//!
//! The password is streamed in through [`Digester::update`] and the derived
//! key is produced by [`Digester::finalize`], so PBKDF2 composes with every
//! API that accepts a digester.

use crate::hmac::{check_block_size, Hmac};
use crate::{Digester, HashError, Prf, Result};
use zeroize::{Zeroize, Zeroizing};

/// Iteration count used when the caller does not choose one
pub const DEFAULT_ITERATIONS: u32 = 4096;

/// Password-based key derivation over the pseudorandom function `P`
///
/// The buffered password is zeroed on reset and on drop.
pub struct Pbkdf2<P: Prf> {
    prf: P,
    salt: Vec<u8>,
    iterations: u32,
    dk_len: usize,
    password: Zeroizing<Vec<u8>>,
}

impl<P: Prf> Pbkdf2<P> {
    /// Configure a derivation of `dk_len` bytes with `iterations` rounds.
    ///
    /// `prf` acts as a template: its key is ignored and replaced with the
    /// password on every finalize.
    ///
    /// # Errors
    ///
    /// - `HashError::InvalidIterations` if `iterations` is zero
    /// - `HashError::InvalidBlockSize` if the PRF's block size is zero or
    ///   smaller than its digest size
    /// - `HashError::InvalidOutputLength` if `dk_len` is zero or exceeds
    ///   `(2^32 - 1) * hLen`
    pub fn new(prf: P, salt: &[u8], iterations: u32, dk_len: usize) -> Result<Self> {
        if iterations == 0 {
            tracing::warn!("rejecting PBKDF2 with zero iterations");
            return Err(HashError::InvalidIterations);
        }
        check_block_size(&prf)?;
        check_output_length(dk_len, prf.digest_length())?;

        tracing::debug!(
            iterations,
            dk_len,
            salt_len = salt.len(),
            prf_length = prf.digest_length(),
            "PBKDF2 instance configured"
        );
        Ok(Self {
            prf,
            salt: salt.to_vec(),
            iterations,
            dk_len,
            password: Zeroizing::new(Vec::new()),
        })
    }

    /// Iteration count
    #[must_use]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Salt fed into the first PRF call of every block
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// `F(P, S, c, i)`: XOR of the `c` chained PRF outputs for block `index`
    fn block(&self, keyed: &mut P, index: u32, out: &mut [u8]) {
        let h_len = keyed.digest_length();
        let mut u = Zeroizing::new(vec![0u8; h_len]);
        let mut t = Zeroizing::new(vec![0u8; h_len]);

        keyed.update(&self.salt);
        keyed.update(&index.to_be_bytes());
        keyed.finalize_into(&mut u);
        t.copy_from_slice(&u);

        for _ in 1..self.iterations {
            keyed.update(&u);
            keyed.finalize_into(&mut u);
            for (acc, byte) in t.iter_mut().zip(u.iter()) {
                *acc ^= byte;
            }
        }

        out.copy_from_slice(&t[..out.len()]);
    }
}

impl<H: Digester + Clone> Pbkdf2<Hmac<H>> {
    /// PBKDF2 with HMAC over `inner` as the PRF.
    ///
    /// # Errors
    ///
    /// Same as [`Pbkdf2::new`].
    pub fn hmac(inner: H, salt: &[u8], iterations: u32, dk_len: usize) -> Result<Self> {
        Self::new(Hmac::new(inner, &[])?, salt, iterations, dk_len)
    }
}

pub(crate) fn check_output_length(dk_len: usize, h_len: usize) -> Result<()> {
    let max = u64::from(u32::MAX).saturating_mul(h_len as u64);
    if dk_len == 0 || dk_len as u64 > max {
        tracing::warn!(dk_len, max, "rejecting PBKDF2 output length");
        return Err(HashError::InvalidOutputLength {
            requested: dk_len,
            max,
        });
    }
    Ok(())
}

impl<P: Prf> Digester for Pbkdf2<P> {
    fn reset(&mut self) {
        self.password.zeroize();
        self.password.clear();
    }

    fn update(&mut self, data: &[u8]) {
        let needed = self.password.len().saturating_add(data.len());
        if needed > self.password.capacity() {
            // Grow into a fresh buffer so the old one is wiped on drop
            // rather than released by a reallocation.
            let capacity = needed.max(self.password.capacity().saturating_mul(2));
            let mut grown = Zeroizing::new(Vec::with_capacity(capacity));
            grown.extend_from_slice(&self.password);
            self.password = grown;
        }
        self.password.extend_from_slice(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        assert_eq!(out.len(), self.dk_len, "PBKDF2 output buffer length");

        let mut keyed = self.prf.rekey(&self.password);
        let h_len = keyed.digest_length();
        for (i, chunk) in out.chunks_mut(h_len).enumerate() {
            // dk_len was bounded at construction, so the index fits in 32 bits
            let index = (i as u32).wrapping_add(1);
            self.block(&mut keyed, index, chunk);
        }
        tracing::trace!(dk_len = self.dk_len, "PBKDF2 finalized");

        self.reset();
    }

    fn digest_length(&self) -> usize {
        self.dk_len
    }

    fn block_size(&self) -> usize {
        self.prf.block_size()
    }
}
