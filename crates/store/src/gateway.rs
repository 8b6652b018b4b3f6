//! One gateway per entity kind. Each method issues exactly one remote
//! request and never retries, caches or batches.

use api_types::{
    balance::Balance,
    category::{Category, CategoryNew, CategoryType},
    income::{Income, IncomeNew},
    period::Period,
    spend::{Spend, SpendNew},
    wallet::{Wallet, WalletNew},
};
use async_trait::async_trait;

use crate::error::ApiError;

#[async_trait]
pub trait WalletsGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Wallet>, ApiError>;
    async fn create(&self, payload: &WalletNew) -> Result<Wallet, ApiError>;
    /// Marks the wallet archived and returns it as stored by the server.
    async fn archive(&self, id: i64) -> Result<Wallet, ApiError>;
}

#[async_trait]
pub trait CategoriesGateway: Send + Sync {
    async fn list(&self, kind: CategoryType) -> Result<Vec<Category>, ApiError>;
    async fn create(&self, kind: CategoryType, payload: &CategoryNew)
    -> Result<Category, ApiError>;
    async fn archive(&self, kind: CategoryType, id: i64) -> Result<Category, ApiError>;
}

#[async_trait]
pub trait IncomeGateway: Send + Sync {
    async fn list(&self, period: Period) -> Result<Vec<Income>, ApiError>;
    async fn create(&self, payload: &IncomeNew) -> Result<Income, ApiError>;
}

#[async_trait]
pub trait SpendGateway: Send + Sync {
    async fn list(&self, period: Period) -> Result<Vec<Spend>, ApiError>;
    async fn create(&self, payload: &SpendNew) -> Result<Spend, ApiError>;
    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}

#[async_trait]
pub trait BalanceGateway: Send + Sync {
    async fn current(&self) -> Result<Balance, ApiError>;
}
