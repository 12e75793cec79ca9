#![no_main]
use libfuzzer_sys::fuzz_target;
use regiondata::store::country_key;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };

    // Key derivation must be deterministic and insensitive to ASCII case
    let key = country_key(name);
    assert_eq!(key, country_key(name));
    assert_eq!(key, country_key(&name.to_ascii_lowercase()));
    assert_eq!(key, country_key(&name.to_ascii_uppercase()));

    if let Some(key) = key {
        assert!(!key.is_empty());
        assert_eq!(key, key.to_ascii_uppercase());
    }
});
