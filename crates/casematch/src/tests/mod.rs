//! Unit tests for the `casematch` builder and dispatcher.
