// Engine library root
// This file declares the modules for the DJ 1866 engine crate.

pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod pipeline;
