//! Read-only resources addressed by URI.
//!
//! Each resource lives in `definitions/` as a `ResourceDefinition` naming a
//! `ResourceSource`; `registry.rs` turns the definitions into listed
//! entries and `ResourceService` resolves a source to text on every read,
//! so a resource always reflects the note log as it is now.

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::ResourceDefinition;
pub use error::ResourceError;
pub use registry::get_all_resources;
pub use service::{ResourceEntry, ResourceService, ResourceSource};
