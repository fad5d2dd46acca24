#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let encoded = base1024_rs::encode_to_string(data);
    let decoded =
        base1024_rs::decode_to_vec(&encoded).expect("Can't decode what we just encoded");
    assert_eq!(decoded, data);
});
