//! CLI library components for the LDL-C predictor.

pub mod config;
pub mod logging;
pub mod workflow;
