//! Streaming hash contract shared by every algorithm and construction

use crate::Digest;

/// A streaming message digest
///
/// Implementations buffer partial blocks internally, so the result never
/// depends on how input is split across [`update`](Digester::update) calls.
/// [`finalize`](Digester::finalize) leaves the instance freshly reset:
/// finalizing twice in a row yields the digest of the empty message the
/// second time.
///
/// Instances mutate in place and are not meant to be shared across threads
/// without external synchronization.
pub trait Digester {
    /// Return to the algorithm's initial state, discarding buffered input.
    fn reset(&mut self);

    /// Absorb `data`, compressing every block that fills up.
    fn update(&mut self, data: &[u8]);

    /// Pad, compress the tail, write the output into `out`, then reset.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not exactly
    /// [`digest_length`](Digester::digest_length) bytes long.
    fn finalize_into(&mut self, out: &mut [u8]);

    /// Output length in bytes, fixed for the lifetime of the instance.
    fn digest_length(&self) -> usize;

    /// Bytes consumed by one compression call; HMAC pads to this length.
    fn block_size(&self) -> usize;

    /// Pad, compress the tail, extract the digest, then reset.
    fn finalize(&mut self) -> Digest {
        let mut out = vec![0u8; self.digest_length()];
        self.finalize_into(&mut out);
        Digest::new(out)
    }

    /// Absorb several non-contiguous buffers in order.
    fn update_vectored(&mut self, bufs: &[&[u8]]) {
        for buf in bufs {
            self.update(buf);
        }
    }
}

impl<D: Digester + ?Sized> Digester for Box<D> {
    fn reset(&mut self) {
        (**self).reset();
    }

    fn update(&mut self, data: &[u8]) {
        (**self).update(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        (**self).finalize_into(out);
    }

    fn digest_length(&self) -> usize {
        (**self).digest_length()
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }
}

/// A digester that can be rekeyed, usable as the PRF of PBKDF2
///
/// HMAC is the canonical implementation. The inner hash is validated when
/// the first instance is built, so rekeying an existing instance cannot fail.
pub trait Prf: Digester + Sized {
    /// Build a fresh instance of the same construction keyed with `key`.
    fn rekey(&self, key: &[u8]) -> Self;
}
