//! CLI integration tests for tmix.

mod helpers;

mod config_test;
mod run_test;
mod surface_test;
