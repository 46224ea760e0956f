//! Builds the prompt entries served by `PromptService`.
//!
//! A new prompt gets a file in `definitions/` implementing
//! `PromptDefinition` and one line in `get_all_prompts()`.

use rmcp::model::Prompt;
use tracing::error;

use super::definitions::{NoteSummaryPrompt, PromptDefinition};
use super::error::PromptError;
use super::service::PromptEntry;
use super::templates::PromptTemplate;

fn build_entry<P: PromptDefinition>() -> Result<PromptEntry, PromptError> {
    let arguments = P::arguments();
    Ok(PromptEntry {
        prompt: Prompt {
            name: P::NAME.to_string(),
            title: None,
            description: Some(P::DESCRIPTION.to_string()),
            arguments: (!arguments.is_empty()).then_some(arguments),
            icons: None,
            meta: None,
        },
        template: PromptTemplate::parse(P::template())?,
    })
}

/// Every prompt whose template parses. Broken ones are logged and skipped.
pub fn get_all_prompts() -> Vec<PromptEntry> {
    [build_entry::<NoteSummaryPrompt>()]
        .into_iter()
        .filter_map(|entry| {
            entry
                .map_err(|e| error!("Skipping prompt with a broken template: {}", e))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_definition_parses() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0].prompt.name, "note_summary_prompt");
        assert!(prompts[0].prompt.arguments.is_none());
        assert!(prompts[0].template.references("notes"));
    }
}
