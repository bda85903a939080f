//! Configuration types
//!
//! Driver-level settings and config-file pin descriptions.

pub mod pins;
pub mod types;

pub use pins::*;
pub use types::*;
