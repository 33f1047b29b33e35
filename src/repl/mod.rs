mod interactive;
mod reader;

pub use interactive::Explorer;
pub use reader::{EditorReader, LineReader, StreamReader};
