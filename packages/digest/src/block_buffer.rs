//! Partial-block buffering and Merkle–Damgård length padding
//!
//! Shared by MD4, MD5, SHA-1 and the SHA-2 engines. The owning digester keeps
//! its chaining state and byte counter; this type only holds the
//! 0..N-1 bytes not yet compressed.

use zeroize::Zeroize;

pub(crate) struct BlockBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
}

impl<const N: usize> BlockBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buf: [0u8; N],
            len: 0,
        }
    }

    /// Append `data`, calling `compress` for every complete block.
    pub(crate) fn input(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8])) {
        if self.len != 0 {
            let take = (N - self.len).min(data.len());
            self.buf[self.len..self.len + take].copy_from_slice(&data[..take]);
            self.len += take;
            data = &data[take..];

            if self.len < N {
                return;
            }
            compress(&self.buf);
            self.len = 0;
        }

        let mut blocks = data.chunks_exact(N);
        for block in &mut blocks {
            compress(block);
        }

        let rest = blocks.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.len = rest.len();
    }

    /// Append `0x80`, zero-fill, write `length` into the final bytes of the
    /// last block and compress. Spills into a second block when the marker
    /// leaves no room for the length field. Clears the buffer afterwards.
    pub(crate) fn pad(&mut self, length: &[u8], mut compress: impl FnMut(&[u8])) {
        let tail = N - length.len();
        debug_assert!(self.len < N, "block buffer overrun");

        self.buf[self.len] = 0x80;
        self.len += 1;

        if self.len > tail {
            self.buf[self.len..].fill(0);
            compress(&self.buf);
            self.len = 0;
        }

        self.buf[self.len..tail].fill(0);
        self.buf[tail..].copy_from_slice(length);
        compress(&self.buf);
        self.reset();
    }

    pub(crate) fn reset(&mut self) {
        self.buf.zeroize();
        self.len = 0;
    }

    #[cfg(test)]
    pub(crate) fn is_clear(&self) -> bool {
        self.len == 0 && self.buf.iter().all(|&b| b == 0)
    }
}

impl<const N: usize> Clone for BlockBuffer<N> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf,
            len: self.len,
        }
    }
}

impl<const N: usize> Drop for BlockBuffer<N> {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}
