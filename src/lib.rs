pub mod common;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;

pub mod compare;
pub mod report;
