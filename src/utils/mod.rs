//! Shared helpers: tool lookup, paths, banners and terminal output

pub mod banner;
pub mod paths;
pub mod terminal;
pub mod tools;
