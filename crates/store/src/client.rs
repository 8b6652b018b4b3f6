//! HTTP implementation of every gateway, backed by `reqwest`.

use std::time::Duration;

use api_types::{
    ErrorBody,
    balance::Balance,
    category::{Category, CategoryNew, CategoryType},
    income::{Income, IncomeNew},
    period::Period,
    spend::{Spend, SpendNew},
    wallet::{Wallet, WalletNew},
};
use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    gateway::{BalanceGateway, CategoriesGateway, IncomeGateway, SpendGateway, WalletsGateway},
};

const WALLETS: &str = "api/wallets";
const INCOME_CATEGORIES: &str = "api/income-categories";
const SPEND_CATEGORIES: &str = "api/spend-categories";
const INCOME: &str = "api/income";
const SPEND: &str = "api/spend";
const BALANCE: &str = "api/balance";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::Endpoint(format!("{path}: {err}")))
    }

    async fn fetch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let res = self.dispatch(req).await?;
        Ok(res.json::<T>().await?)
    }

    async fn dispatch(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let res = req.send().await.inspect_err(|err| {
            tracing::debug!("request failed: {err}");
        })?;

        let status = res.status();
        tracing::debug!("{} {}", status, res.url());
        if status.is_success() {
            return Ok(res);
        }

        let message = match res.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(err) => {
                tracing::debug!("error body read failed: {err}");
                None
            }
        };
        Err(ApiError::Server { status, message })
    }

    fn categories_path(kind: CategoryType) -> &'static str {
        match kind {
            CategoryType::Income => INCOME_CATEGORIES,
            CategoryType::Spend => SPEND_CATEGORIES,
        }
    }

    fn archive_request(&self, collection: &str, id: i64) -> Result<RequestBuilder, ApiError> {
        let endpoint = self.endpoint(&format!("{collection}/{id}/archived"))?;
        Ok(self.http.patch(endpoint).json(&serde_json::json!({})))
    }
}

#[derive(Debug, Default)]
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    pub fn base_url(mut self, base_url: &str) -> ApiClientBuilder {
        self.base_url = base_url.to_string();
        self
    }

    /// Per-request timeout applied by the transport. No timeout by default.
    pub fn timeout(mut self, timeout: Duration) -> ApiClientBuilder {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<ApiClient, ApiError> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let mut base_url = self.base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)
            .map_err(|err| ApiError::Endpoint(format!("invalid base_url: {err}")))?;

        let mut http = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(ApiClient {
            base_url,
            http: http.build()?,
        })
    }
}

#[async_trait]
impl WalletsGateway for ApiClient {
    async fn list(&self) -> Result<Vec<Wallet>, ApiError> {
        let endpoint = self.endpoint(WALLETS)?;
        self.fetch(self.http.get(endpoint)).await
    }

    async fn create(&self, payload: &WalletNew) -> Result<Wallet, ApiError> {
        let endpoint = self.endpoint(WALLETS)?;
        self.fetch(self.http.post(endpoint).json(payload)).await
    }

    async fn archive(&self, id: i64) -> Result<Wallet, ApiError> {
        let req = self.archive_request(WALLETS, id)?;
        self.fetch(req).await
    }
}

#[async_trait]
impl CategoriesGateway for ApiClient {
    async fn list(&self, kind: CategoryType) -> Result<Vec<Category>, ApiError> {
        let endpoint = self.endpoint(Self::categories_path(kind))?;
        self.fetch(self.http.get(endpoint)).await
    }

    async fn create(
        &self,
        kind: CategoryType,
        payload: &CategoryNew,
    ) -> Result<Category, ApiError> {
        let endpoint = self.endpoint(Self::categories_path(kind))?;
        self.fetch(self.http.post(endpoint).json(payload)).await
    }

    async fn archive(&self, kind: CategoryType, id: i64) -> Result<Category, ApiError> {
        let req = self.archive_request(Self::categories_path(kind), id)?;
        self.fetch(req).await
    }
}

#[async_trait]
impl IncomeGateway for ApiClient {
    async fn list(&self, period: Period) -> Result<Vec<Income>, ApiError> {
        let endpoint = self.endpoint(INCOME)?;
        self.fetch(self.http.get(endpoint).query(&period)).await
    }

    async fn create(&self, payload: &IncomeNew) -> Result<Income, ApiError> {
        let endpoint = self.endpoint(INCOME)?;
        self.fetch(self.http.post(endpoint).json(payload)).await
    }
}

#[async_trait]
impl SpendGateway for ApiClient {
    async fn list(&self, period: Period) -> Result<Vec<Spend>, ApiError> {
        let endpoint = self.endpoint(SPEND)?;
        self.fetch(self.http.get(endpoint).query(&period)).await
    }

    async fn create(&self, payload: &SpendNew) -> Result<Spend, ApiError> {
        let endpoint = self.endpoint(SPEND)?;
        self.fetch(self.http.post(endpoint).json(payload)).await
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let endpoint = self.endpoint(&format!("{SPEND}/{id}"))?;
        self.dispatch(self.http.delete(endpoint)).await?;
        Ok(())
    }
}

#[async_trait]
impl BalanceGateway for ApiClient {
    async fn current(&self) -> Result<Balance, ApiError> {
        let endpoint = self.endpoint(BALANCE)?;
        self.fetch(self.http.get(endpoint)).await
    }
}
