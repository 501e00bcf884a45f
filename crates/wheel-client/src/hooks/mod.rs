mod use_element_width;
mod use_keyboard_shortcuts;
mod use_wheel_config;

pub use use_element_width::use_element_width;
pub use use_keyboard_shortcuts::*;
pub use use_wheel_config::use_wheel_config;
