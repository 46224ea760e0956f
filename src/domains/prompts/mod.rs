//! Prompts rendered from client arguments and server state.
//!
//! Definitions in `definitions/` are parsed into `PromptEntry` values by
//! `registry.rs` when the service starts. `PromptService` fills each
//! template on request; the `{{notes}}` variable always comes from the
//! note log, never from the client.

pub mod definitions;
mod error;
mod registry;
mod service;
pub mod templates;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::get_all_prompts;
pub use service::{NOTES_VARIABLE, PromptEntry, PromptService};
pub use templates::PromptTemplate;
