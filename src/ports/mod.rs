/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod library;
pub mod llm;
pub mod search;

#[cfg(test)]
pub mod mocks;
