//! Workspace-level integration tests for fib128 live under `tests/`.
