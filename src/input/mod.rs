// src/input/mod.rs
pub mod command;

pub use command::{Action, Command};
