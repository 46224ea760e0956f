//! Note summary prompt definition.

use super::PromptDefinition;

/// Message rendered instead of a summary request when the log is empty.
pub const NO_NOTES_TO_SUMMARIZE: &str = "There are no notes yet.";

/// Asks the model to summarize every note currently in the log.
///
/// Takes no client arguments; `{{notes}}` is filled from the note log.
pub struct NoteSummaryPrompt;

impl PromptDefinition for NoteSummaryPrompt {
    const NAME: &'static str = "note_summary_prompt";
    const DESCRIPTION: &'static str = "Generate a prompt asking the AI to summarize all current notes. The prompt includes the full text of every saved note; if no notes exist, it says so instead.";

    fn template() -> &'static str {
        "{{#if notes}}Summarize the current notes: {{notes}}{{else}}There are no notes yet.{{/if}}"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_summary_metadata() {
        assert_eq!(NoteSummaryPrompt::NAME, "note_summary_prompt");
        assert!(!NoteSummaryPrompt::DESCRIPTION.is_empty());
        assert!(NoteSummaryPrompt::arguments().is_empty());
    }

    #[test]
    fn test_empty_branch_matches_constant() {
        assert!(NoteSummaryPrompt::template().contains(NO_NOTES_TO_SUMMARIZE));
    }
}
