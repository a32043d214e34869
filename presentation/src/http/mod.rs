//! HTTP surface: the dual-prompt endpoint and a health probe

mod client_ip;
pub mod dto;
pub mod error;
mod handler;
mod health;
mod router;

pub use dto::DualReplyBody;
pub use error::ApiError;
pub use router::{AppState, build_router};
