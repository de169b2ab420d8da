#![no_main]

use ezsp_codec::types::catalog;
use ezsp_codec::{decode_with, encode, DecodeOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Every record type must either reject the input or round-trip it exactly
    for ty in catalog::ALL {
        for options in [DecodeOptions::default(), DecodeOptions::strict()] {
            if let Ok((record, consumed)) = decode_with(data, 0, ty, options) {
                assert_eq!(consumed, ty.encoded_width());
                let bytes = encode(&record).expect("decoded record must encode");
                assert_eq!(&bytes[..], &data[..consumed]);
            }
        }
    }
});
