//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`threshold`]: Resolving the cutoff timestamp and the root directory
//! - [`orchestrator`]: Walking the tree and forwarding entries newer than the cutoff
//! - [`plan`]: The immutable run configuration
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;
pub mod plan;
pub mod threshold;

pub use dto::ListingSummary;
pub use orchestrator::ListEntries;
pub use plan::{ListingPlan, ListingPlanBuilder};
pub use threshold::{ResolvedThreshold, ThresholdResolver, ThresholdSource};
