// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod identity;
pub mod platform;

pub use filesystem::{IgnoreTreeWalker, LocalPathInspector};
pub use identity::SystemIdentityResolver;
