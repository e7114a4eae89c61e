mod buffer;
mod command;
mod mode;

pub use buffer::InputBuffer;
pub use command::{Command, CommandError, parse_command};
pub use mode::{InputMode, ModeAction};
