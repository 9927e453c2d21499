//! Sparkline geometry, independent of any rendering backend.

pub mod services;
pub mod value_objects;

pub use services::*;
pub use value_objects::*;
