#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fib128_core::bign::BigN;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let reference = if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse::<BigUint>().ok()
    } else {
        None
    };

    match text.parse::<BigN>() {
        Ok(value) => {
            let expected = BigUint::from(u128::from(value));
            assert_eq!(value.to_string(), expected.to_string());
            assert_eq!(Some(expected), reference);
        }
        Err(_) => {
            let limit = BigUint::from(u128::MAX);
            assert!(reference.map_or(true, |r| r > limit));
        }
    }
});
