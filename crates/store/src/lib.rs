//! Client-side state for the Kopilka finance API.
//!
//! Each entity kind has a gateway (one remote call per operation) and a
//! container that mirrors the remote collection, tracks its load state and
//! exposes a single error message. Pages combine containers and decide which
//! loads run together; views are pure projections over container snapshots.

pub use balance::BalanceStore;
pub use categories::{CategoriesStore, CategoryLists};
pub use client::{ApiClient, ApiClientBuilder};
pub use error::ApiError;
pub use gateway::{BalanceGateway, CategoriesGateway, IncomeGateway, SpendGateway, WalletsGateway};
pub use income::IncomeStore;
pub use model::{Amount, Archivable, Keyed, Named, Windowed};
pub use pages::Stores;
pub use spend::SpendStore;
pub use state::{LoadState, Snapshot};
pub use wallets::WalletsStore;

mod balance;
mod categories;
mod client;
mod error;
mod gateway;
mod income;
mod model;
pub mod pages;
mod spend;
mod state;
pub mod views;
mod wallets;
