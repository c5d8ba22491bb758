//! Shared test utilities for forgelink integration tests.

pub mod builders;

pub use builders::*;
