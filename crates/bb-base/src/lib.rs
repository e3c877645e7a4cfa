pub mod config;
pub mod error;
pub mod item;
pub mod store;

pub use error::StoreError;
pub use item::Item;
pub use store::{ItemId, ItemStore, StoreConfig};
