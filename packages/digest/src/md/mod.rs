//! Merkle–Damgård family over 64-byte blocks: MD4, MD5 and SHA-1
//!
//! All three share the buffering and strengthening of
//! [`BlockBuffer`](crate::block_buffer::BlockBuffer) and differ in their
//! compression rounds, length-field byte order and output word order.
//! MD4 and MD5 are little-endian throughout; SHA-1 is big-endian.
//!
//! These algorithms are provided for interoperability with legacy formats and
//! must not be used where collision resistance matters.

// Zeroize and drop impls for a digester with `state`, `buffer` and `bytes`
// fields. Invoked inside each submodule so the fields stay private.
macro_rules! wipe_on_drop {
    ($ty:ty) => {
        impl zeroize::Zeroize for $ty {
            fn zeroize(&mut self) {
                zeroize::Zeroize::zeroize(&mut self.state);
                self.buffer.reset();
                zeroize::Zeroize::zeroize(&mut self.bytes);
            }
        }

        impl Drop for $ty {
            fn drop(&mut self) {
                zeroize::Zeroize::zeroize(self);
            }
        }

        impl zeroize::ZeroizeOnDrop for $ty {}
    };
}

pub mod md4;
pub mod md5;
pub mod sha1;

pub use md4::Md4;
pub use md5::Md5;
pub use sha1::Sha1;

pub(crate) const BLOCK_LEN: usize = 64;

/// Position of the register updated at `step` and the three inputs to the
/// round function, for the MD4/MD5 rotating a, d, c, b schedule.
#[inline(always)]
pub(crate) const fn registers(step: usize) -> (usize, usize, usize, usize) {
    let target = (4 - step % 4) % 4;
    (target, (target + 1) % 4, (target + 2) % 4, (target + 3) % 4)
}
