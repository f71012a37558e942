//! Storage adapters
//!
//! Flat-file JSON implementation of the library port.

pub mod json_library;

pub use json_library::JsonFileLibrary;
