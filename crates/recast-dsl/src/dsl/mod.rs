//! Configuration document formats.

pub mod yaml;
