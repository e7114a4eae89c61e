mod input_field;
mod message_panel;
mod status_line;

pub use input_field::draw_input_field;
pub use message_panel::draw_message_panel;
pub use status_line::{StatusBarState, draw_status_line};
