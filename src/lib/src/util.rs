//! Various utility functions
//!

pub mod fs;
pub mod logging;
pub mod time;
