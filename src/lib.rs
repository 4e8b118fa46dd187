pub mod command;
pub mod config;
pub mod domain;
pub mod input;
pub mod shell;
