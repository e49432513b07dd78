//! Repositories issuing parameterized statements against the store.

pub mod flower_repo;
pub mod memory_repo;

pub use flower_repo::FlowerRepo;
pub use memory_repo::MemoryRepo;
