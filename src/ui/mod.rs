// src/ui/mod.rs
pub mod menu;
pub mod terminal;

pub use menu::{build_menu, Menu};
pub use terminal::{ConsoleTerminal, Terminal};
