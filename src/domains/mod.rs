//! Domains module containing business logic organized by bounded contexts.
//!
//! `notes` and `weather` hold the underlying capabilities; `tools`,
//! `resources` and `prompts` expose them over MCP.

pub mod notes;
pub mod prompts;
pub mod resources;
pub mod tools;
pub mod weather;
