//! Configuration module for spritegrid
//!
//! Provides types, discovery, and parsing for the optional `spritegrid.toml`.

pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
