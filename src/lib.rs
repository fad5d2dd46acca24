//! A pure-Rust encoder and decoder for base-1024 binary-to-emoji text.
//!
//! Every 5 input bytes are split into four 10-bit values and written as four
//! symbols from a fixed 1024-entry emoji alphabet. A final chunk of fewer
//! than 5 bytes is closed by one of five reserved padding marks, so the exact
//! input length survives the round trip without wasting a whole symbol on
//! 2 leftover bits.
//!
//! # Example
//!
//! ```
//! let encoded = base1024_rs::encode_to_string(b"hello world");
//! let decoded = base1024_rs::decode_to_vec(&encoded).unwrap();
//! assert_eq!(decoded, b"hello world");
//! ```
//!
//! The streaming entry points ([`encode()`] and [`decode()`]) work on
//! `std::io` sources and sinks and never buffer more than one chunk or
//! group at a time. With the `stream` feature enabled, `EncodeStream` and
//! `DecodeStream` additionally accept data incrementally through the
//! `std::io::Write` interface.

#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod alphabet;
mod decode;
mod encode;
pub mod error;

use std::io;

#[cfg(feature = "stream")]
pub use crate::decode::stream::DecodeStream;
#[cfg(feature = "stream")]
pub use crate::encode::stream::EncodeStream;

/// Encodes a whole byte source into base-1024 symbols written to `output`
/// as UTF-8 text.
///
/// Returns the number of symbols written, always a multiple of 4 (0 for an
/// empty source). Every byte sequence is encodable; the only possible
/// failure is an I/O error from `input` or `output`.
pub fn encode<R: io::BufRead, W: io::Write>(
    input: &mut R,
    output: &mut W,
) -> error::Result<u64> {
    encode::encode_stream(input, output)
}

/// Decodes a whole base-1024 symbol source back into the bytes it was
/// produced from, written to `output`.
///
/// The input must consist of UTF-8 encoded symbols in complete groups of 4.
/// Returns the number of bytes written. Fails with
/// [`error::Error::Truncated`] if the source ends mid-group, with
/// [`error::Error::InvalidSymbol`] on a code point outside the alphabet and
/// its padding marks, and with [`error::Error::IoError`] on I/O failure or
/// malformed UTF-8. Groups decoded before the failing one remain in the
/// sink; no bytes are written for the failing group itself.
pub fn decode<R: io::BufRead, W: io::Write>(
    input: &mut R,
    output: &mut W,
) -> error::Result<u64> {
    decode::decode_stream(input, output)
}

/// Encodes a byte slice into an owned base-1024 string.
pub fn encode_to_string(data: &[u8]) -> String {
    // 4 symbols per chunk, each up to 4 bytes of UTF-8.
    let mut output = String::with_capacity((data.len() / 5 + 1) * 16);
    for chunk in data.chunks(5) {
        for slot in encode::chunk::pack(chunk).iter() {
            output.push(alphabet::symbol_for(*slot));
        }
    }
    output
}

/// Decodes a base-1024 string back into the bytes it was produced from.
pub fn decode_to_vec(input: &str) -> error::Result<Vec<u8>> {
    let mut bytes = input.as_bytes();
    let mut output = Vec::with_capacity(input.len() / 16 * 5 + 5);
    decode(&mut bytes, &mut output)?;
    Ok(output)
}
