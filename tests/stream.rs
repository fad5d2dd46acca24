#![cfg(feature = "stream")]

use base1024_rs::{DecodeStream, EncodeStream};
use std::io::Write;

fn round_trip_chunked(data: &[u8], chunk: usize) {
    let mut encoder = EncodeStream::new(Vec::new());
    for part in data.chunks(chunk) {
        encoder.write_all(part).unwrap();
    }
    let encoded = encoder.finish().unwrap();
    assert_eq!(
        String::from_utf8(encoded.clone()).unwrap(),
        base1024_rs::encode_to_string(data)
    );

    let mut decoder = DecodeStream::new(Vec::new());
    for part in encoded.chunks(chunk) {
        decoder.write_all(part).unwrap();
    }
    let decoded = decoder.finish().unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn round_trip_every_chunk_size() {
    let _ = env_logger::try_init();
    let data = b"Streaming adapters must reassemble symbols split anywhere";
    for chunk in 1..data.len() {
        round_trip_chunked(data, chunk);
    }
}

#[test]
fn round_trip_every_tail_length() {
    let _ = env_logger::try_init();
    let data = b"0123456789ab";
    for len in 0..=data.len() {
        round_trip_chunked(&data[..len], 3);
    }
}

#[test]
fn encode_counts_and_decode_counts_match() {
    let _ = env_logger::try_init();
    let data = b"fourteen bytes";

    let mut encoder = EncodeStream::new(Vec::new());
    encoder.write_all(data).unwrap();
    let encoded = encoder.finish().unwrap();

    let mut decoder = DecodeStream::new(Vec::new());
    decoder.write_all(&encoded).unwrap();
    assert_eq!(decoder.bytes_written(), data.len() as u64);
    let decoded = decoder.finish().unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn decode_finish_rejects_a_dangling_group() {
    let _ = env_logger::try_init();
    let text = base1024_rs::encode_to_string(&[0xAA, 0xBB, 0xCC, 0xDD, 0xEE]);
    let partial: String = text.chars().take(3).collect();

    let mut decoder = DecodeStream::new(Vec::new());
    decoder.write_all(partial.as_bytes()).unwrap();
    let err = decoder.finish().unwrap_err();
    assert!(err.to_string().contains("3 of 4 symbols"), "error was: {}", err);
}

#[test]
fn decode_finish_rejects_a_split_symbol() {
    let _ = env_logger::try_init();
    let text = base1024_rs::encode_to_string(b"tail");
    let bytes = text.as_bytes();

    let mut decoder = DecodeStream::new(Vec::new());
    decoder.write_all(&bytes[..bytes.len() - 2]).unwrap();
    let err = decoder.finish().unwrap_err();
    assert!(err.to_string().contains("UTF-8"), "error was: {}", err);
}

#[test]
fn decode_stream_poisons_after_an_error() {
    let _ = env_logger::try_init();
    let mut decoder = DecodeStream::new(Vec::new());
    assert!(decoder.write_all(b"not symbols").is_err());
    assert!(decoder.get_ref().is_none());
    assert!(decoder.write_all(b"anything").is_err());
    assert!(decoder.finish().is_err());
}
