//! One file per prompt: its metadata and template source.

pub mod note_summary;

pub use note_summary::NoteSummaryPrompt;

use rmcp::model::PromptArgument;

/// Static description of a prompt, turned into a `PromptEntry` by the registry.
pub trait PromptDefinition {
    /// The unique name of the prompt.
    const NAME: &'static str;

    /// A description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// Template source; see `templates` for the syntax.
    fn template() -> &'static str;

    /// The arguments this prompt accepts from clients.
    fn arguments() -> Vec<PromptArgument> {
        Vec::new()
    }
}
