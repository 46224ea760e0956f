//! Note log tools.

pub mod add_note;
pub mod read_notes;

pub use add_note::{AddNoteParams, AddNoteTool};
pub use read_notes::{ReadNotesParams, ReadNotesTool};
