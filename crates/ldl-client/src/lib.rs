//! Remote LDL-C prediction service client.
//!
//! [`RemoteClient`] posts a lipid panel to `<base_url>/predict` and
//! implements [`ldl_core::PredictionBackend`], so the core orchestrator can
//! use it directly. Every failure surfaces as a
//! [`ldl_model::RemoteServiceError`]; the caller decides how to fall back.

pub mod client;
pub mod config;
pub mod types;

pub use client::{RemoteClient, interpret_response};
pub use config::{DEFAULT_BASE_URL, RemoteSettings};
pub use types::{HealthResponse, PredictRequest, PredictResponse};
