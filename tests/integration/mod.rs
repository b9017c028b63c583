//! Router-level integration tests

mod auth_test;
mod policy_test;
mod programs_test;
mod routing_test;
