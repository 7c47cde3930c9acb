//! fib128 library — application logic for the 128-bit Fibonacci calculator.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
