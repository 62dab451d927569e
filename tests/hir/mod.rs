//! HIR layer tests
//!
//! - The big ring model and its expected targets
//! - Cycles, error reporting and option independence

pub mod tests_big_model;
pub mod tests_resolution;
