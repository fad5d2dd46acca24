use proptest::prelude::*;

proptest! {
    #[test]
    fn round_trip_identity(input in prop::collection::vec(any::<u8>(), 0..1024)) {
        let encoded = base1024_rs::encode_to_string(&input);
        let decoded = base1024_rs::decode_to_vec(&encoded).unwrap();
        prop_assert_eq!(input, decoded);
    }

    #[test]
    fn symbol_count_is_four_per_chunk(input in prop::collection::vec(any::<u8>(), 0..256)) {
        let encoded = base1024_rs::encode_to_string(&input);
        let expected = 4 * ((input.len() + 4) / 5);
        prop_assert_eq!(encoded.chars().count(), expected);
    }

    // Sorting encoded strings must order them exactly like the raw byte
    // arrays they came from. This is a property of the concrete alphabet
    // (sorted table, padding marks interleaved between the runs), so it is
    // checked against the real table end to end.
    #[test]
    fn encoded_data_has_the_same_sort_order(
        inputs in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..64), 0..64)
    ) {
        let mut inputs_sorted = inputs.clone();
        inputs_sorted.sort();

        let mut outputs_sorted: Vec<String> = inputs
            .iter()
            .map(|bytes| base1024_rs::encode_to_string(bytes))
            .collect();
        outputs_sorted.sort();

        let decoded_sorted: Vec<Vec<u8>> = outputs_sorted
            .iter()
            .map(|text| base1024_rs::decode_to_vec(text).unwrap())
            .collect();

        prop_assert_eq!(inputs_sorted, decoded_sorted);
    }

    #[test]
    fn io_path_agrees_with_the_slice_path(input in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut encoded: Vec<u8> = Vec::new();
        let symbols =
            base1024_rs::encode(&mut std::io::BufReader::new(&input[..]), &mut encoded).unwrap();
        let text = String::from_utf8(encoded).unwrap();
        prop_assert_eq!(&text, &base1024_rs::encode_to_string(&input));
        prop_assert_eq!(symbols as usize, text.chars().count());

        let mut decoded: Vec<u8> = Vec::new();
        let bytes = base1024_rs::decode(&mut text.as_bytes(), &mut decoded).unwrap();
        prop_assert_eq!(bytes as usize, input.len());
        prop_assert_eq!(decoded, input);
    }

    #[test]
    fn four_byte_chunks_end_in_a_short_mark(
        input in prop::collection::vec(any::<u8>(), 4)
    ) {
        let encoded = base1024_rs::encode_to_string(&input);
        let marks = ['\u{269C}', '\u{1F400}', '\u{1F501}', '\u{1F602}'];
        let expected = marks[usize::from(input[3] & 0x03)];
        prop_assert_eq!(encoded.chars().nth(3), Some(expected));
    }
}
