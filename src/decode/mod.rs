//! Decoding of base-1024 symbol streams back into byte streams.

pub(crate) mod group;
#[cfg(feature = "stream")]
pub mod stream;
mod util;

use crate::alphabet::{self, Slot};
use crate::error::{Error, Result};
use std::io;

pub fn decode_stream<R, W>(input: &mut R, output: &mut W) -> Result<u64>
where
    R: io::BufRead,
    W: io::Write,
{
    let mut bytes = 0u64;

    // A clean end of source is only accepted before the first symbol of a
    // group; anywhere else it is a truncation.
    while let Some(first) = util::read_symbol(input)? {
        let mut slots = [classify(first)?, Slot::Padding, Slot::Padding, Slot::Padding];
        for i in 1..4 {
            let symbol = util::read_symbol(input)?.ok_or(Error::Truncated(i))?;
            slots[i] = classify(symbol)?;
        }

        let (out, len) = group::unpack(&slots);
        output.write_all(&out[..len])?;
        bytes += len as u64;
        base1024_trace!("decoded group into {} bytes", len);
    }

    base1024_debug!("decoded {} bytes", bytes);
    Ok(bytes)
}

fn classify(symbol: char) -> Result<Slot> {
    alphabet::classify(symbol).ok_or(Error::InvalidSymbol(symbol))
}
