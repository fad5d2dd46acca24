//! Encoding of byte streams into base-1024 symbol streams.

pub(crate) mod chunk;
#[cfg(feature = "stream")]
pub mod stream;

use crate::alphabet;
use crate::encode::chunk::CHUNK_SIZE;
use crate::error;
use std::io;

pub fn encode_stream<R, W>(input: &mut R, output: &mut W) -> error::Result<u64>
where
    R: io::BufRead,
    W: io::Write,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut bytes = 0u64;
    let mut symbols = 0u64;

    loop {
        let len = read_chunk(input, &mut buf)?;
        if len == 0 {
            break;
        }

        base1024_trace!("encoding chunk of {} bytes", len);
        for slot in chunk::pack(&buf[..len]).iter() {
            write_symbol(output, alphabet::symbol_for(*slot))?;
        }
        bytes += len as u64;
        symbols += 4;

        // A short chunk can only happen at end of source.
        if len < CHUNK_SIZE {
            break;
        }
    }

    base1024_debug!("encoded {} bytes into {} symbols", bytes, symbols);
    Ok(symbols)
}

// Fills the chunk until the source runs dry, so that short intermediate
// reads never produce a padded group in the middle of the output.
fn read_chunk<R: io::Read>(input: &mut R, buf: &mut [u8; CHUNK_SIZE]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = input.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}

pub(crate) fn write_symbol<W: io::Write>(output: &mut W, symbol: char) -> io::Result<()> {
    let mut utf8 = [0u8; 4];
    output.write_all(symbol.encode_utf8(&mut utf8).as_bytes())
}
