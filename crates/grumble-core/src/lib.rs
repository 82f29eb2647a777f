//! Core types and collaborator traits for the Grumble review pipeline.
//!
//! No I/O and no text-analytics dependencies live here.
//! The pipeline and both analyzer backends depend on it; it depends on
//! nothing but serde, strum and thiserror.

pub mod analyze;
pub mod error;
pub mod review;
pub mod sentiment;

pub use error::{Error, Result};
