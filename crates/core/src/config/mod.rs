//! Configuration for the varopts tool itself.

pub mod loader;
pub mod types;
