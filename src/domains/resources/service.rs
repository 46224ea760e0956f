//! Lists resources and resolves their content from the note log.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use std::collections::HashMap;
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::NotesConfig;
use crate::domains::notes::{NO_NOTES_MESSAGE, NoteStore};

/// Lists and reads resources.
pub struct ResourceService {
    store: NoteStore,

    /// Registered resources by URI.
    entries: HashMap<String, ResourceEntry>,
}

/// A resource as advertised to clients, paired with where its text comes from.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// Metadata returned by `resources/list`.
    pub resource: Resource,

    /// Where the content is resolved from on read.
    pub source: ResourceSource,
}

/// Sources that resource content is resolved from at read time.
#[derive(Debug, Clone)]
pub enum ResourceSource {
    /// Last entry of the note log.
    LatestNote,
}

impl ResourceService {
    /// Create a new ResourceService reading from the configured note log.
    pub fn new(notes: NotesConfig) -> Self {
        let mut service = Self {
            store: NoteStore::new(&notes),
            entries: HashMap::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }
        info!("ResourceService ready with {} resource(s)", service.entries.len());

        service
    }

    /// Register a resource, replacing any resource at the same URI.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.entries.insert(entry.resource.raw.uri.clone(), entry);
    }

    /// Metadata of every registered resource.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.entries
            .values()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Resolve the current text of the resource at `uri`.
    ///
    /// An empty note log reads as the "no notes" message, not an error.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .entries
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = match entry.source {
            ResourceSource::LatestNote => self
                .store
                .read_latest()?
                .unwrap_or_else(|| NO_NOTES_MESSAGE.to_string()),
        };

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::text(text, uri)],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    fn service_in(dir: &TempDir) -> (ResourceService, NoteStore) {
        let notes = NotesConfig::at(dir.path().join("notes.txt"));
        let store = NoteStore::new(&notes);
        (ResourceService::new(notes), store)
    }

    #[tokio::test]
    async fn test_resource_service_lists_latest_note() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].raw.uri, "notes://latest");
    }

    #[tokio::test]
    async fn test_latest_note_without_notes() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let result = service.read_resource("notes://latest").await.unwrap();
        assert_eq!(text_of(&result), NO_NOTES_MESSAGE);
    }

    #[tokio::test]
    async fn test_latest_note_is_last_appended() {
        let dir = TempDir::new().unwrap();
        let (service, store) = service_in(&dir);
        store.append("first entry").unwrap();
        store.append("second entry").unwrap();

        let result = service.read_resource("notes://latest").await.unwrap();
        assert_eq!(text_of(&result), "second entry");
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let dir = TempDir::new().unwrap();
        let (service, _) = service_in(&dir);

        let result = service.read_resource("notes://oldest").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
