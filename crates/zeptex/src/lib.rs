#![forbid(unsafe_code)]

//! The Zeptex editor binary crate: CLI, disk storage, and the editor loop.

pub mod app;
pub mod cli;
pub mod fs;
