//! FLTK user interface: window construction and theming.

pub mod main_window;
pub mod theme;
