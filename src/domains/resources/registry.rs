//! Builds the resource entries served by `ResourceService`.
//!
//! A new resource gets a file in `definitions/` implementing
//! `ResourceDefinition` and one line in `get_all_resources()`.

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{LatestNoteResource, ResourceDefinition};
use super::service::ResourceEntry;

fn entry_for<R: ResourceDefinition>() -> ResourceEntry {
    let raw = RawResource {
        description: Some(R::DESCRIPTION.to_string()),
        mime_type: Some(R::MIME_TYPE.to_string()),
        ..RawResource::new(R::URI, R::NAME)
    };

    ResourceEntry {
        resource: raw.no_annotation(),
        source: R::source(),
    }
}

/// Every resource the server lists, in registration order.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![entry_for::<LatestNoteResource>()]
}
