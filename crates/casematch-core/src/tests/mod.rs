//! Unit tests for `casematch_core` types.

mod case_tests;
mod error_tests;
