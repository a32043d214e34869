//! Configuration concepts that are independent of file formats.

pub mod validation;
