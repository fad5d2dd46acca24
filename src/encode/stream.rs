//! Incremental encoding through the `std::io::Write` interface.

use crate::alphabet;
use crate::encode::chunk::{self, CHUNK_SIZE};
use std::fmt;
use std::io;
use std::io::Write;

/// Base-1024 encoder that can process multiple chunks of data using the
/// `std::io::Write` interface.
///
/// Input may arrive in writes of any size; up to 4 bytes are carried over
/// until a whole 5-byte chunk is available. Call [`EncodeStream::finish`] to
/// encode the tail chunk and recover the sink.
pub struct EncodeStream<W>
where
    W: Write,
{
    output: W,
    /// Bytes carried over until a whole chunk is available.
    buf: [u8; CHUNK_SIZE],
    buf_len: usize,
    symbols: u64,
}

impl<W> EncodeStream<W>
where
    W: Write,
{
    /// Initialize the stream with the sink that will receive the encoded
    /// symbols as UTF-8 text.
    pub fn new(output: W) -> Self {
        Self {
            output,
            buf: [0; CHUNK_SIZE],
            buf_len: 0,
            symbols: 0,
        }
    }

    /// Get a reference to the output sink.
    pub fn get_ref(&self) -> &W {
        &self.output
    }

    /// Get a mutable reference to the output sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Number of symbols written so far. Buffered tail bytes are not
    /// counted until they are encoded by [`EncodeStream::finish`].
    pub fn symbols_written(&self) -> u64 {
        self.symbols
    }

    /// Encodes any buffered tail bytes as a final short group and returns
    /// the output sink.
    pub fn finish(mut self) -> io::Result<W> {
        if self.buf_len > 0 {
            self.emit()?;
        }
        Ok(self.output)
    }

    fn emit(&mut self) -> io::Result<()> {
        for slot in chunk::pack(&self.buf[..self.buf_len]).iter() {
            super::write_symbol(&mut self.output, alphabet::symbol_for(*slot))?;
        }
        self.symbols += 4;
        self.buf_len = 0;
        Ok(())
    }
}

impl<W> Write for EncodeStream<W>
where
    W: Write,
{
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut consumed = 0;
        while consumed < data.len() {
            let take = (CHUNK_SIZE - self.buf_len).min(data.len() - consumed);
            self.buf[self.buf_len..self.buf_len + take]
                .copy_from_slice(&data[consumed..consumed + take]);
            self.buf_len += take;
            consumed += take;

            if self.buf_len == CHUNK_SIZE {
                self.emit()?;
            }
        }
        Ok(data.len())
    }

    /// Flushes the output sink. Carried-over tail bytes are held back: a
    /// short chunk may only be emitted at the very end of the stream, by
    /// [`EncodeStream::finish`].
    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

impl<W> fmt::Debug for EncodeStream<W>
where
    W: Write,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("EncodeStream")
            .field("buf_len", &self.buf_len)
            .field("symbols", &self.symbols)
            .finish()
    }
}
