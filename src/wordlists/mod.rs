//! Word lists for the letters round
//!
//! Provides the embedded default list and the file loader that builds the
//! game's dictionary.

mod embedded;
pub mod loader;

pub use embedded::BUILTIN;
