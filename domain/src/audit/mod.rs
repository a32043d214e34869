//! Audit trail entities.

pub mod record;
