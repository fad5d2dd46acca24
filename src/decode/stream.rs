//! Incremental decoding through the `std::io::Write` interface.

use crate::alphabet::{self, Slot};
use crate::decode::group;
use crate::decode::util;
use crate::error::Error;
use std::fmt;
use std::io;
use std::io::Write;

/// Base-1024 decoder that can process multiple chunks of encoded text using
/// the `std::io::Write` interface.
///
/// Writes may split a symbol's UTF-8 sequence, or a group, at any byte
/// position; the stream reassembles whole symbols and decodes whole groups
/// as they complete. Call [`DecodeStream::finish`] to verify that the input
/// ended on a group boundary and recover the sink.
pub struct DecodeStream<W>
where
    W: Write,
{
    /// The sink, or `None` after a failed write, so that `finish` cannot
    /// hand out a sink holding output of a half-decoded stream.
    output: Option<W>,
    /// Bytes of a symbol whose UTF-8 sequence is still incomplete.
    utf8: [u8; 4],
    utf8_len: usize,
    /// Slots of the group currently being filled.
    slots: [Slot; 4],
    slot_len: usize,
    bytes: u64,
}

impl<W> DecodeStream<W>
where
    W: Write,
{
    /// Initialize the stream with the sink that will receive the decoded
    /// bytes.
    pub fn new(output: W) -> Self {
        Self {
            output: Some(output),
            utf8: [0; 4],
            utf8_len: 0,
            slots: [Slot::Padding; 4],
            slot_len: 0,
            bytes: 0,
        }
    }

    /// Get a reference to the output sink.
    pub fn get_ref(&self) -> Option<&W> {
        self.output.as_ref()
    }

    /// Get a mutable reference to the output sink.
    pub fn get_mut(&mut self) -> Option<&mut W> {
        self.output.as_mut()
    }

    /// Number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.bytes
    }

    /// Checks that the input ended on a group boundary and returns the
    /// output sink.
    pub fn finish(mut self) -> io::Result<W> {
        match self.output.take() {
            None => Err(io::Error::new(
                io::ErrorKind::Other,
                "can't finish stream because of a previous write error",
            )),
            Some(output) => {
                if self.utf8_len > 0 {
                    return Err(util::invalid_utf8());
                }
                if self.slot_len > 0 {
                    return Err(io::Error::from(Error::Truncated(self.slot_len)));
                }
                Ok(output)
            }
        }
    }

    fn push_byte(&mut self, byte: u8) -> crate::error::Result<()> {
        self.utf8[self.utf8_len] = byte;
        self.utf8_len += 1;

        let need = util::utf8_len(self.utf8[0]).ok_or_else(util::invalid_utf8)?;
        if self.utf8_len < need {
            return Ok(());
        }

        let decoded =
            std::str::from_utf8(&self.utf8[..need]).map_err(|_| util::invalid_utf8())?;
        let symbol = match decoded.chars().next() {
            Some(symbol) => symbol,
            None => return Err(Error::IoError(util::invalid_utf8())),
        };
        self.utf8_len = 0;
        self.push_symbol(symbol)
    }

    fn push_symbol(&mut self, symbol: char) -> crate::error::Result<()> {
        let slot = alphabet::classify(symbol).ok_or(Error::InvalidSymbol(symbol))?;
        self.slots[self.slot_len] = slot;
        self.slot_len += 1;
        if self.slot_len < 4 {
            return Ok(());
        }

        let (out, len) = group::unpack(&self.slots);
        if let Some(output) = self.output.as_mut() {
            output.write_all(&out[..len])?;
        }
        self.bytes += len as u64;
        self.slot_len = 0;
        base1024_trace!("decoded group into {} bytes", len);
        Ok(())
    }
}

impl<W> Write for DecodeStream<W>
where
    W: Write,
{
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.output.is_none() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "stream is unusable after a previous write error",
            ));
        }

        for &byte in data {
            if let Err(e) = self.push_byte(byte) {
                self.output = None;
                return Err(e.into());
            }
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.output.as_mut() {
            Some(output) => output.flush(),
            None => Ok(()),
        }
    }
}

impl<W> fmt::Debug for DecodeStream<W>
where
    W: Write,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("DecodeStream")
            .field("utf8_len", &self.utf8_len)
            .field("slot_len", &self.slot_len)
            .field("bytes", &self.bytes)
            .finish()
    }
}
