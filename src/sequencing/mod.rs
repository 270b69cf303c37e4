pub mod note;
pub mod schedule;

pub use note::{Note, NoteParseError};
pub use schedule::{Schedule, ScheduledNote};
