//! Seams between the batch validator and its external collaborators

pub mod store;
pub mod upstream;

pub use store::ExistenceStore;
pub use upstream::UpstreamLookup;

#[cfg(test)]
pub use store::MockExistenceStore;
