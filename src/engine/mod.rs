//! # Engine Module
//!
//! Numeric core shared by the demonstration programs.
//!
//! This module contains:
//! - The precision abstraction and its double-double fallback
//! - Sequential, compensated and partitioned parallel summation
//! - The worker team with its dynamic chunk schedule and critical section
//! - Scalar introspection, footprint measurement and timing helpers
//!
//! Public API exposure is controlled by `lib.rs`.

pub mod types;
pub mod error;
pub mod config;
pub mod precision;
pub mod double_double;
pub mod sequence;
pub mod reduce;
pub mod team;
pub mod special;
pub mod footprint;
pub mod timing;
pub mod report;
