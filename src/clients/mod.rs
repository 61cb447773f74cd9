//! Presentation-facing clients built on top of [`crate::store_actor::StoreHandle`].

mod directory_client;

pub use directory_client::*;
