#![no_main]

use libfuzzer_sys::fuzz_target;

use fib128_core::bign::BigN;
use fib128_core::calculator::FibError;
use fib128_core::fastdoubling::FastDoubling;
use fib128_core::MAX_FIB_INDEX;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let mut buf = [0u8; 8];
    buf.copy_from_slice(&data[..8]);
    let k = u64::from_le_bytes(buf);

    let engine = FastDoubling::new();
    match engine.compute(k) {
        Ok(value) => {
            assert!(k <= MAX_FIB_INDEX, "F({k}) should not fit");
            if k >= 2 {
                let a = engine.compute(k - 2).unwrap();
                let b = engine.compute(k - 1).unwrap();
                assert_eq!(a.checked_add(b), Some(value), "recurrence broken at k={k}");
            } else {
                assert_eq!(value, BigN::from(k));
            }
        }
        Err(FibError::Overflow(_)) => assert!(k > MAX_FIB_INDEX, "F({k}) should fit"),
        Err(e) => panic!("unexpected error at k={k}: {e}"),
    }
});
