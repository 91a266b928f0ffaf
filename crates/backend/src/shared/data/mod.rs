pub mod collection_store;
pub mod fixture;

pub use collection_store::{CollectionStore, DataStore};
