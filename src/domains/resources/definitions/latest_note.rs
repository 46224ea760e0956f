//! Latest note resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceSource;

/// Most recently appended entry of the note log.
pub struct LatestNoteResource;

impl ResourceDefinition for LatestNoteResource {
    const URI: &'static str = "notes://latest";
    const NAME: &'static str = "Latest Note";
    const DESCRIPTION: &'static str = "The most recently added note from the sticky note file. If no notes exist, returns \"No notes yet\".";
    const MIME_TYPE: &'static str = "text/plain";

    fn source() -> ResourceSource {
        ResourceSource::LatestNote
    }
}
