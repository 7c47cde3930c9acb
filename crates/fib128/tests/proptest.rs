//! Property-based tests across calculators and the device front end.

use std::io::SeekFrom;
use std::sync::Arc;

use num_bigint::BigUint;
use proptest::prelude::*;

use fib128_core::calculator::{Calculator, FibCalculator};
use fib128_core::fastdoubling::FastDoubling;
use fib128_core::iterator::IterativeAddition;
use fib128_core::observers::NoOpObserver;
use fib128_core::options::Options;
use fib128_core::{format, STRING_LEN};
use fib128_device::{FibDevice, DEVICE_NAME};

const OPTS: Options = Options { max_index: 186 };

fn compute(algo: &str, n: i64) -> BigUint {
    let calc: Arc<dyn Calculator> = match algo {
        "fast" => Arc::new(FibCalculator::new(Arc::new(FastDoubling::new()))),
        "iterative" => Arc::new(FibCalculator::new(Arc::new(IterativeAddition::new()))),
        _ => panic!("Unknown algorithm"),
    };
    let value = calc.calculate(&NoOpObserver::new(), 0, n, &OPTS).unwrap();
    BigUint::from(u128::from(value))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn fast_matches_iterative(n in 0i64..=186) {
        prop_assert_eq!(compute("fast", n), compute("iterative", n));
    }

    #[test]
    fn doubling_identities(n in 1i64..=92) {
        let fk = compute("fast", n);
        let fk1 = compute("fast", n + 1);
        let f2k = compute("fast", 2 * n);
        let f2k1 = compute("fast", 2 * n + 1);
        prop_assert_eq!(f2k, &fk * (BigUint::from(2u32) * &fk1 - &fk));
        prop_assert_eq!(f2k1, &fk * &fk + &fk1 * &fk1);
    }

    #[test]
    fn device_read_matches_formatter(n in 0u64..=186) {
        let device = FibDevice::register(DEVICE_NAME, OPTS);
        let mut session = device.open().unwrap();
        session.seek_index(SeekFrom::Start(n));
        let mut buf = [0u8; STRING_LEN];
        let len = session.read(&mut buf).unwrap();
        let expected = format(FastDoubling::new().compute(n).unwrap());
        prop_assert_eq!(&buf[..len], expected.as_bytes());
        prop_assert_eq!(buf[len], 0);
    }

    #[test]
    fn seek_stays_in_range(start in any::<u64>(), delta in any::<i64>()) {
        let device = FibDevice::register(DEVICE_NAME, Options::default());
        let mut session = device.open().unwrap();
        session.seek_index(SeekFrom::Start(start));
        let pos = session.seek_index(SeekFrom::Current(delta));
        prop_assert!(pos <= device.max_index());
    }
}
