//! Web-search service adapters
//!
//! Implementations of the WebSearchPort trait.

pub mod serper;

pub use serper::SerperService;
