//! Presentation layer for dual-ai
//!
//! This crate contains the CLI definition and the axum HTTP surface.

pub mod cli;
pub mod http;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use http::{ApiError, AppState, DualReplyBody, build_router};
