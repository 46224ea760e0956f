//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod math;
pub mod notes;
pub mod weather;

pub use math::{AddParams, AddTool};
pub use notes::{AddNoteParams, AddNoteTool, ReadNotesParams, ReadNotesTool};
pub use weather::{GetWeatherParams, GetWeatherTool};
