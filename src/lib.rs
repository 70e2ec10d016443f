//! Phasor Tracker - characters with complex-plane health

pub mod character;
pub mod command;
pub mod core;
pub mod render;
pub mod session;
