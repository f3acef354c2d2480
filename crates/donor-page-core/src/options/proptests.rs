//! Property-based tests for option sets.
