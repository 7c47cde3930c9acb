//! Version information.

/// Get the version string.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Version line including the value width.
#[must_use]
pub fn full_version() -> String {
    format!("fib128 {} (u64x2, max F({}))", version(), fib128_core::MAX_FIB_INDEX)
}
