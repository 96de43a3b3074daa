/// Interactive terminal front-end: the menu loop and its text rendering.
pub mod menu;
pub mod table;

pub use menu::Menu;
