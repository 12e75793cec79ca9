#![no_main]
use libfuzzer_sys::fuzz_target;
use regiondata::record::{search, Field, Record};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must either parse as a table or be rejected, never panic
    let Ok(records) = serde_json::from_slice::<Vec<Record>>(data) else {
        return;
    };

    for record in &records {
        assert!(search(&records, &record.name, Field::Name, Field::Code).is_some());
        assert!(search(&records, &record.code, Field::Code, Field::Name).is_some());
    }
});
