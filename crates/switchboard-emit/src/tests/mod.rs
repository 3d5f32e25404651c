//! Crate-level tests for switchboard-emit.
