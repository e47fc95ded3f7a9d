//! Command implementations

pub mod all;
