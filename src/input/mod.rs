//! Input handling module
//!
//! The demos only react to the quit signal.

mod input_mapper;

pub use input_mapper::{InputMapper, InputAction};
