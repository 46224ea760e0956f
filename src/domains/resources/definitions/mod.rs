//! One file per resource: its URI, metadata and content source.

pub mod latest_note;

pub use latest_note::LatestNoteResource;

use super::service::ResourceSource;

/// Static description of a resource, turned into a `ResourceEntry` by the registry.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Where the content of this resource comes from.
    fn source() -> ResourceSource;
}
