pub mod add;

pub use add::{AddParams, AddTool};
