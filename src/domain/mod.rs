//! Domain layer containing the routing rules and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (identifiers, timestamps)
//! - `query` - Query normalization, intent classification, city extraction
//! - `audit` - The audit record written once per invocation

pub mod audit;
pub mod foundation;
pub mod query;
