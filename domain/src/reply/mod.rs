//! Reply value objects.
//!
//! - [`outcome::ProviderOutcome`] - settled result of one provider call
//! - [`outcome::NormalizedReply`] - what the caller sees for one provider
//! - [`outcome::DispatchOutcome`] / [`outcome::DualReply`] - one of each per provider

pub mod outcome;
