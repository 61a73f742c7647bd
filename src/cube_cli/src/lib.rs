#![warn(clippy::pedantic)]

pub mod config;
pub mod render;
pub mod session;
