//! Page-level orchestration: which containers a page loads on entry, and
//! which follow-up loads a committed write triggers.

use std::sync::Arc;

use crate::{
    balance::BalanceStore, categories::CategoriesStore, client::ApiClient, income::IncomeStore,
    spend::SpendStore, wallets::WalletsStore,
};

pub use categories::{CategoriesPage, CategoriesView};
pub use forms::{CategoryForm, ExpenseForm, FormError, IncomeForm, WalletForm};
pub use home::{ExpenseRow, HomePage, HomeView, IncomeRow};
pub use wallets::{WalletsPage, WalletsView};

mod categories;
mod forms;
mod home;
mod wallets;

/// One handle per container. Pages clone the handles they need, so every
/// page observes the same containers.
#[derive(Clone)]
pub struct Stores {
    pub wallets: WalletsStore,
    pub categories: CategoriesStore,
    pub income: IncomeStore,
    pub spend: SpendStore,
    pub balance: BalanceStore,
}

impl Stores {
    /// All containers talking to the same HTTP client.
    pub fn new(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            wallets: WalletsStore::new(client.clone()),
            categories: CategoriesStore::new(client.clone()),
            income: IncomeStore::new(client.clone()),
            spend: SpendStore::new(client.clone()),
            balance: BalanceStore::new(client),
        }
    }
}
