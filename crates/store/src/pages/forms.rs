//! Form state kept by the pages. A form only reaches a container once it
//! validates into a create payload.

use api_types::{
    Currency,
    category::{CategoryNew, CategoryType},
    income::IncomeNew,
    spend::SpendNew,
    wallet::WalletNew,
};
use chrono::NaiveDate;
use thiserror::Error;

const MIN_NAME_CHARS: usize = 2;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("name must be at least 2 characters")]
    NameTooShort,
    #[error("balance must be zero or more")]
    NegativeBalance,
    #[error("{0} is required")]
    Missing(&'static str),
}

fn valid_name(name: &str) -> Result<String, FormError> {
    let name = name.trim();
    if name.chars().count() < MIN_NAME_CHARS {
        return Err(FormError::NameTooShort);
    }
    Ok(name.to_string())
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalletForm {
    pub name: String,
    pub balance: f64,
    pub currency: Currency,
}

impl Default for WalletForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            balance: 0.0,
            currency: Currency::Rub,
        }
    }
}

impl WalletForm {
    pub fn validate(&self) -> Result<WalletNew, FormError> {
        let name = valid_name(&self.name)?;
        // NaN fails this comparison too.
        if !(self.balance >= 0.0) {
            return Err(FormError::NegativeBalance);
        }
        Ok(WalletNew {
            name,
            balance: self.balance,
            currency: self.currency,
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub kind: CategoryType,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: CategoryType::Spend,
        }
    }
}

impl CategoryForm {
    pub fn validate(&self) -> Result<(CategoryType, CategoryNew), FormError> {
        let name = valid_name(&self.name)?;
        Ok((self.kind, CategoryNew { name }))
    }

    /// Clears the name, keeps the selected kind.
    pub fn reset(&mut self) {
        self.name.clear();
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncomeForm {
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<i64>,
    pub wallet_id: Option<i64>,
}

impl IncomeForm {
    pub fn validate(&self) -> Result<IncomeNew, FormError> {
        Ok(IncomeNew {
            amount: self.amount.ok_or(FormError::Missing("amount"))?,
            income_date: self.date.ok_or(FormError::Missing("date"))?,
            income_category_id: self.category_id.ok_or(FormError::Missing("category"))?,
            wallet_id: self.wallet_id.ok_or(FormError::Missing("wallet"))?,
        })
    }

    /// Clears the per-entry fields; the category and wallet stay selected.
    pub fn reset(&mut self) {
        self.amount = None;
        self.date = None;
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub category_id: Option<i64>,
    pub wallet_id: Option<i64>,
}

impl ExpenseForm {
    pub fn validate(&self) -> Result<SpendNew, FormError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FormError::Missing("description"));
        }
        Ok(SpendNew {
            description: description.to_string(),
            amount: self.amount.ok_or(FormError::Missing("amount"))?,
            date: self.date.ok_or(FormError::Missing("date"))?,
            spend_category_id: self.category_id.ok_or(FormError::Missing("category"))?,
            wallet_id: self.wallet_id.ok_or(FormError::Missing("wallet"))?,
        })
    }

    pub fn reset(&mut self) {
        self.description.clear();
        self.amount = None;
        self.date = None;
    }
}
