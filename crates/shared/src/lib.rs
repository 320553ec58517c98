//! Hive Shared Types and Utilities
//!
//! This crate contains types and database helpers shared across the Hive dashboard.

pub mod db;
pub mod types;

pub use db::*;
pub use types::*;
