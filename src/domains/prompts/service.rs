//! Prompt service implementation.
//!
//! Renders registered prompts. Besides client arguments, templates can
//! reference server state; currently that is the note log as `{{notes}}`.

use rmcp::model::{GetPromptResult, JsonObject, Prompt, PromptMessage, PromptMessageRole};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::PromptError;
use super::registry::get_all_prompts;
use super::templates::PromptTemplate;
use crate::core::config::NotesConfig;
use crate::domains::notes::NoteStore;

/// Template variable holding the full, trimmed note log.
pub const NOTES_VARIABLE: &str = "notes";

/// A prompt as advertised to clients, paired with its parsed template.
#[derive(Debug, Clone)]
pub struct PromptEntry {
    /// Metadata returned by `prompts/list`.
    pub prompt: Prompt,

    /// Template rendered by `prompts/get`.
    pub template: PromptTemplate,
}

/// Lists and renders prompts.
pub struct PromptService {
    /// Note log read when a template references `{{notes}}`.
    store: NoteStore,

    /// Registered prompts by name.
    entries: HashMap<String, PromptEntry>,
}

impl PromptService {
    /// Create a new PromptService reading from the configured note log.
    pub fn new(notes: NotesConfig) -> Self {
        let mut service = Self {
            store: NoteStore::new(&notes),
            entries: HashMap::new(),
        };

        for entry in get_all_prompts() {
            service.register_prompt(entry);
        }
        info!("PromptService ready with {} prompt(s)", service.entries.len());

        service
    }

    /// Register a prompt, replacing any prompt of the same name.
    pub fn register_prompt(&mut self, entry: PromptEntry) {
        debug!("Registering prompt: {}", entry.prompt.name);
        self.entries.insert(entry.prompt.name.clone(), entry);
    }

    /// Metadata of every registered prompt.
    pub async fn list_prompts(&self) -> Vec<Prompt> {
        self.entries
            .values()
            .map(|entry| entry.prompt.clone())
            .collect()
    }

    /// Render a prompt from the client's arguments and current server state.
    ///
    /// Only string-valued arguments are used. Server state always wins over
    /// a client value of the same name.
    pub async fn get_prompt(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<GetPromptResult, PromptError> {
        let entry = self
            .entries
            .get(name)
            .ok_or_else(|| PromptError::not_found(name))?;

        let mut values: HashMap<String, String> = arguments
            .unwrap_or_default()
            .into_iter()
            .filter_map(|(key, value)| value.as_str().map(|s| (key, s.to_string())))
            .collect();

        let required = entry.prompt.arguments.iter().flatten();
        if let Some(missing) = required
            .filter(|arg| arg.required.unwrap_or(false))
            .find(|arg| !values.contains_key(&arg.name))
        {
            return Err(PromptError::missing_argument(&missing.name));
        }

        if entry.template.references(NOTES_VARIABLE) {
            let notes = self.store.read_all()?;
            debug!("Injecting {} bytes of notes into {}", notes.len(), name);
            values.insert(NOTES_VARIABLE.to_string(), notes);
        }

        Ok(GetPromptResult {
            description: entry.prompt.description.clone(),
            messages: vec![PromptMessage::new_text(
                PromptMessageRole::User,
                entry.template.render(&values),
            )],
        })
    }
}
