//! External process execution

pub mod cxx;
pub mod subprocess;
