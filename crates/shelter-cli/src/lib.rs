//! Library components of the shelter normalizer CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
