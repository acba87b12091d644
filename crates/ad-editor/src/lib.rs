pub mod canvas;
pub mod commands;
pub mod input;
pub mod properties;
pub mod tools;
