#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fib128_core::bign::BigN;

fn word(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

fn big(v: BigN) -> BigUint {
    BigUint::from(u128::from(v))
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 33 {
        return;
    }
    let a = BigN::new(word(&data[0..8]), word(&data[8..16]));
    let b = BigN::new(word(&data[16..24]), word(&data[24..32]));
    let shift = u32::from(data[32] % 160);
    let limit = BigUint::from(u128::MAX);

    let sum = big(a) + big(b);
    assert_eq!(a.checked_add(b).map(big), (sum <= limit).then_some(sum));

    let (diff, borrow) = a.overflowing_sub(b);
    assert_eq!(borrow, a < b);
    if !borrow {
        assert_eq!(big(diff), big(a) - big(b));
    }

    let product = big(a) * big(b);
    assert_eq!(a.checked_mul(b).map(big), (product <= limit).then_some(product));

    let shifted = big(a) << shift;
    let (wrapped, lost) = a.overflowing_shl(shift);
    assert_eq!(lost, shifted > limit);
    if !lost {
        assert_eq!(big(wrapped), shifted);
    }

    if b.lower != 0 {
        let (q, r) = a.div_rem_small(b.lower).unwrap();
        assert_eq!(big(q) * BigUint::from(b.lower) + BigUint::from(r), big(a));
        assert!(r < b.lower);
    }
});
