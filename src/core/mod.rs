//! Core types and errors for the linear classifier

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
