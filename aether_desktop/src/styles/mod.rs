mod button;
mod container;
mod input;
mod progress;

pub use button::{ghost_button_style, primary_button_style};
pub use container::{input_shell_style, module_card_style, terminal_panel_style};
pub use input::intent_input_style;
pub use progress::validation_bar_style;
