//! Seams between the engine and its collaborators.

pub mod store;

pub use store::{ProgressionStore, StoreReader, StoreWriter};
