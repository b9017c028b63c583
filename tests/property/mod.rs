//! Property-based tests

mod enrollment_proptest;
mod token_proptest;
