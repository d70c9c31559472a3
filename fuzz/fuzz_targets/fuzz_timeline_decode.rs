#![no_main]

use libfuzzer_sys::fuzz_target;

use rqstrack_core::timeline::{decode_events, encode_events};

fuzz_target!(|data: &[u8]| {
    let Ok(cell) = std::str::from_utf8(data) else {
        return;
    };

    // Any list that decodes must survive an encode/decode cycle.
    if let Some(events) = decode_events(cell) {
        let encoded = encode_events(&events);
        assert_eq!(decode_events(&encoded), Some(events));
    }
});
