#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either decode or fail cleanly, never panic.
    let mut input = data;
    let mut output: Vec<u8> = Vec::new();
    let _ = base1024_rs::decode(&mut input, &mut output);
});
