//! Property-based tests for core value types.
