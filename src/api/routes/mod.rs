//! API route modules.

pub mod progress;
pub mod scoring;
