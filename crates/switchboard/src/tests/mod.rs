//! Crate-level tests for switchboard.

mod unit;
