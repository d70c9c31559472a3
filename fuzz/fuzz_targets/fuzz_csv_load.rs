#![no_main]

use libfuzzer_sys::fuzz_target;

use rqstrack_core::{GrantStore, SystemClock};
use rqstrack_io::{read_records, write_records};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must yield records or an error, never a panic.
    let Ok(records) = read_records(data) else {
        return;
    };

    // Whatever loads must write back and reload to the same records.
    let mut buf = Vec::new();
    write_records(&mut buf, &records).expect("write of loaded records failed");
    let reloaded = read_records(buf.as_slice()).expect("reload of written records failed");
    assert_eq!(reloaded, records);

    let _ = GrantStore::from_records(Box::new(SystemClock), records);
});
