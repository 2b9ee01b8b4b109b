#[cfg(feature = "serde")]
mod serde_tests {
    use proptest::prelude::*;
    use rust_binstring::{BitString, BitValue};

    fn arbitrary_bit_string(max_length: usize) -> impl Strategy<Value = BitString> {
        prop::collection::vec(any::<bool>(), 0..max_length)
            .prop_map(|bits| bits.into_iter().map(BitValue::from).collect())
    }

    proptest! {
        #[test]
        fn bit_string_serde_roundtrip(bits in arbitrary_bit_string(200)) {
            let serialized = serde_json::to_string(&bits).expect("Failed to serialize BitString");
            let deserialized: BitString = serde_json::from_str(&serialized).expect("Failed to deserialize BitString");
            assert_eq!(bits, deserialized);
        }
    }

    #[test]
    fn serializes_as_text() {
        let bits = BitString::new("0b0110");
        assert_eq!(serde_json::to_string(&bits).unwrap(), "\"0110\"");
    }

    #[test]
    fn deserializes_with_marker() {
        let bits: BitString = serde_json::from_str("\"0b101\"").unwrap();
        assert_eq!(bits, "101");
    }

    #[test]
    fn rejects_invalid_text() {
        assert!(serde_json::from_str::<BitString>("\"012\"").is_err());
    }

    #[test]
    fn refuses_to_serialize_invalid() {
        assert!(serde_json::to_string(&BitString::invalid()).is_err());
    }
}
