//! Notes domain module.
//!
//! The note log is an append-only, newline-delimited text file. All access
//! goes through [`NoteStore`], which is shared by the `add_note` and
//! `read_notes` tools, the `notes://latest` resource and the
//! `note_summary_prompt` prompt.

mod error;
mod store;

pub use error::NoteStoreError;
pub use store::{NO_NOTES_MESSAGE, NoteStore};
