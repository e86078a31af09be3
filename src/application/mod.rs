//! Application services layer.

pub mod chrome;
pub mod error;
