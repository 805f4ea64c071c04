#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = serde_json::from_slice::<netrecon::RawNetwork>(data) {
        // Parsing any JSON object must return a record or a typed error, never panic
        if let Ok(record) = netrecon::NetworkRecord::parse(&raw) {
            let _ = record.identity().to_string();
        }
    }
});
