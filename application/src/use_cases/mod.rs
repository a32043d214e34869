//! Use cases (application services)
//!
//! - [`dispatch`]: settle-all fan-out to both providers
//! - [`normalize`]: outcome → caller-visible reply
//! - [`run_dual_prompt`]: one request end to end, audit write detached

pub mod dispatch;
pub mod normalize;
pub mod run_dual_prompt;

#[cfg(test)]
pub(crate) mod test_support;
