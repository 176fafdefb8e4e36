//! Property-based tests
//!
//! Use proptest to generate random inputs and verify invariants

mod status_proptest;
mod validation_proptest;
