//! Crate-internal tests, one module per subsystem.

mod registry_tests;
mod value_tests;
