/// Domain layer - core business models
///
/// These models are platform-agnostic and represent core business entities.
pub mod invite;
pub mod models;
pub mod prompts;
