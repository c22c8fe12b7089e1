//! Configuration module

mod library;

pub use library::LibraryConfig;
