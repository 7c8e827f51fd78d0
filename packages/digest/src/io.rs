//! `std::io` adapter: feed a digester from anything that writes or copies

use crate::{Digest, Digester};
use std::io::{self, Read, Write};

/// A [`Write`] sink that forwards every byte to a digester
///
/// ```
/// use cryypt_digest::{io::DigestWriter, Algorithm};
///
/// let mut writer = DigestWriter::new(Algorithm::Sha256.digester());
/// std::io::copy(&mut &b"abc"[..], &mut writer).unwrap();
/// assert_eq!(writer.bytes_written(), 3);
/// ```
#[derive(Clone)]
pub struct DigestWriter<D: Digester> {
    digester: D,
    bytes_written: u64,
}

impl<D: Digester> DigestWriter<D> {
    /// Wrap `digester`
    pub fn new(digester: D) -> Self {
        Self {
            digester,
            bytes_written: 0,
        }
    }

    /// Bytes written since construction or the last finalize
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Finalize the wrapped digester, leaving the writer ready for reuse
    pub fn finalize(&mut self) -> Digest {
        self.bytes_written = 0;
        self.digester.finalize()
    }

    /// Unwrap the digester, keeping any absorbed input
    pub fn into_inner(self) -> D {
        self.digester
    }
}

impl<D: Digester> Write for DigestWriter<D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.digester.update(buf);
        self.bytes_written = self.bytes_written.wrapping_add(buf.len() as u64);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Drain `reader` into `digester` and finalize.
///
/// # Errors
///
/// Propagates read errors; the digester is reset before returning one.
pub fn digest_reader<R, D>(reader: &mut R, digester: D) -> io::Result<Digest>
where
    R: Read + ?Sized,
    D: Digester,
{
    let mut writer = DigestWriter::new(digester);
    if let Err(e) = io::copy(reader, &mut writer) {
        writer.digester.reset();
        return Err(e);
    }
    Ok(writer.finalize())
}
