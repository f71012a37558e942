/// Adapters - implementations of the port traits
///
/// External service clients and the flat-file library live here.
pub mod services;
pub mod storage;
