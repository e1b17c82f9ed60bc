//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod extract;
pub mod grid;
pub mod layout;
pub mod markup;
pub mod problem;
