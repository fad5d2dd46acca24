//! Reader helpers for the symbol stream.

use crate::error;
use std::io;

/// Length of a UTF-8 sequence, from its leading byte.
pub(crate) fn utf8_len(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

pub(crate) fn invalid_utf8() -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        "invalid UTF-8 in the symbol stream",
    )
}

/// Reads one whole symbol, however many bytes its UTF-8 sequence takes, or
/// `None` on a clean end of source. A symbol is never split across reads.
pub fn read_symbol<R: io::BufRead>(input: &mut R) -> error::Result<Option<char>> {
    let mut buf = [0u8; 4];
    if input.read(&mut buf[..1])? == 0 {
        return Ok(None);
    }

    let len = utf8_len(buf[0]).ok_or_else(invalid_utf8)?;
    input.read_exact(&mut buf[1..len])?;

    let decoded = std::str::from_utf8(&buf[..len]).map_err(|_| invalid_utf8())?;
    match decoded.chars().next() {
        Some(symbol) => Ok(Some(symbol)),
        None => Err(error::Error::IoError(invalid_utf8())),
    }
}
