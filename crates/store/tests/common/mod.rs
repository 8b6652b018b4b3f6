#![allow(dead_code)]

use std::{collections::VecDeque, sync::Arc, sync::Mutex};

use api_types::{
    Currency,
    balance::Balance,
    category::{Category, CategoryNew, CategoryType},
    income::{Income, IncomeNew},
    period::Period,
    spend::{Spend, SpendNew},
    wallet::{Wallet, WalletNew},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::StatusCode;
use store::{
    ApiError, BalanceGateway, BalanceStore, CategoriesGateway, CategoriesStore, IncomeGateway,
    IncomeStore, SpendGateway, SpendStore, Stores, WalletsGateway, WalletsStore,
};

/// Responses handed out in order, one per call.
pub struct Script<T>(Mutex<VecDeque<Result<T, ApiError>>>);

impl<T> Default for Script<T> {
    fn default() -> Self {
        Self(Mutex::new(VecDeque::new()))
    }
}

impl<T> Script<T> {
    pub fn ok(&self, value: T) -> &Self {
        self.0.lock().unwrap().push_back(Ok(value));
        self
    }

    pub fn fail(&self, err: ApiError) -> &Self {
        self.0.lock().unwrap().push_back(Err(err));
        self
    }

    fn next(&self) -> Result<T, ApiError> {
        self.0
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Endpoint("unscripted call".to_string())))
    }
}

#[derive(Default)]
pub struct FakeApi {
    pub wallets: Script<Vec<Wallet>>,
    pub wallet_created: Script<Wallet>,
    pub wallet_archived: Script<Wallet>,
    pub income_categories: Script<Vec<Category>>,
    pub spend_categories: Script<Vec<Category>>,
    pub category_created: Script<Category>,
    pub category_archived: Script<Category>,
    pub incomes: Script<Vec<Income>>,
    pub income_created: Script<Income>,
    pub spends: Script<Vec<Spend>>,
    pub spend_created: Script<Spend>,
    pub spend_deleted: Script<()>,
    pub balance: Script<Balance>,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls().iter().filter(|c| c.as_str() == call).count()
    }
}

#[async_trait]
impl WalletsGateway for FakeApi {
    async fn list(&self) -> Result<Vec<Wallet>, ApiError> {
        self.record("GET wallets".to_string());
        self.wallets.next()
    }

    async fn create(&self, payload: &WalletNew) -> Result<Wallet, ApiError> {
        self.record(format!("POST wallets {}", payload.name));
        self.wallet_created.next()
    }

    async fn archive(&self, id: i64) -> Result<Wallet, ApiError> {
        self.record(format!("PATCH wallets/{id}/archived"));
        self.wallet_archived.next()
    }
}

#[async_trait]
impl CategoriesGateway for FakeApi {
    async fn list(&self, kind: CategoryType) -> Result<Vec<Category>, ApiError> {
        self.record(format!("GET {kind}-categories"));
        match kind {
            CategoryType::Income => self.income_categories.next(),
            CategoryType::Spend => self.spend_categories.next(),
        }
    }

    async fn create(
        &self,
        kind: CategoryType,
        payload: &CategoryNew,
    ) -> Result<Category, ApiError> {
        self.record(format!("POST {kind}-categories {}", payload.name));
        self.category_created.next()
    }

    async fn archive(&self, kind: CategoryType, id: i64) -> Result<Category, ApiError> {
        self.record(format!("PATCH {kind}-categories/{id}/archived"));
        self.category_archived.next()
    }
}

#[async_trait]
impl IncomeGateway for FakeApi {
    async fn list(&self, period: Period) -> Result<Vec<Income>, ApiError> {
        self.record(format!("GET income {period}"));
        self.incomes.next()
    }

    async fn create(&self, _payload: &IncomeNew) -> Result<Income, ApiError> {
        self.record("POST income".to_string());
        self.income_created.next()
    }
}

#[async_trait]
impl SpendGateway for FakeApi {
    async fn list(&self, period: Period) -> Result<Vec<Spend>, ApiError> {
        self.record(format!("GET spend {period}"));
        self.spends.next()
    }

    async fn create(&self, _payload: &SpendNew) -> Result<Spend, ApiError> {
        self.record("POST spend".to_string());
        self.spend_created.next()
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.record(format!("DELETE spend/{id}"));
        self.spend_deleted.next()
    }
}

#[async_trait]
impl BalanceGateway for FakeApi {
    async fn current(&self) -> Result<Balance, ApiError> {
        self.record("GET balance".to_string());
        self.balance.next()
    }
}

pub fn stores(api: &Arc<FakeApi>) -> Stores {
    Stores {
        wallets: WalletsStore::new(api.clone()),
        categories: CategoriesStore::new(api.clone()),
        income: IncomeStore::new(api.clone()),
        spend: SpendStore::new(api.clone()),
        balance: BalanceStore::new(api.clone()),
    }
}

pub fn server_error(message: &str) -> ApiError {
    ApiError::server(StatusCode::CONFLICT, message)
}

pub fn bare_error() -> ApiError {
    ApiError::Server {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: None,
    }
}

pub fn period(year: i32, month: u32) -> Period {
    Period::new(year, month).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn wallet(id: i64, name: &str, archived: bool) -> Wallet {
    Wallet {
        id,
        name: name.to_string(),
        balance: 100.0,
        currency: Currency::Rub,
        archived,
    }
}

pub fn category(id: i64, name: &str, archived: bool) -> Category {
    Category {
        id,
        name: name.to_string(),
        archived,
    }
}

pub fn income(id: i64, amount: f64, category_id: i64, wallet_id: i64) -> Income {
    Income {
        id,
        amount,
        income_date: date(2024, 5, 1),
        income_category_id: category_id,
        wallet_id,
    }
}

pub fn spend(id: i64, amount: f64, category_id: i64, wallet_id: i64) -> Spend {
    Spend {
        id,
        description: format!("spend {id}"),
        amount,
        date: date(2024, 5, 2),
        spend_category_id: category_id,
        wallet_id,
    }
}
