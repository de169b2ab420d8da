#![no_main]

use ezsp_codec::types::address::{parse_epan, Eui64};
use ezsp_codec::types::channels::{channel_mask, parse_channel_list};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Text helpers must never panic on arbitrary input
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(eui) = text.parse::<Eui64>() {
            assert_eq!(eui.to_string(), text.to_ascii_lowercase());
        }
        let _ = parse_epan(text);
        if let Ok(channels) = parse_channel_list(text) {
            assert!(channel_mask(channels).is_ok());
        }
    }
});
