//! Wire types shared by the gateway and the command-line front end.
//!
//! Field names follow the remote API (camelCase JSON); ids are always
//! assigned by the server, so create payloads never carry one.

use core::{fmt, str::FromStr};

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Currency code of a wallet.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "RUB" => Ok(Currency::Rub),
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}

/// Error body returned by the server on non-success responses.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}

pub mod wallet {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Wallet {
        pub id: i64,
        pub name: String,
        pub balance: f64,
        pub currency: Currency,
        pub archived: bool,
    }

    /// Request body for creating a wallet. New wallets are never archived.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct WalletNew {
        pub name: String,
        pub balance: f64,
        pub currency: Currency,
    }
}

pub mod category {
    use super::*;

    /// Which of the two category collections a category belongs to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum CategoryType {
        Income,
        Spend,
    }

    impl CategoryType {
        pub fn as_str(self) -> &'static str {
            match self {
                Self::Income => "income",
                Self::Spend => "spend",
            }
        }
    }

    impl fmt::Display for CategoryType {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.as_str())
        }
    }

    impl FromStr for CategoryType {
        type Err = String;

        fn from_str(value: &str) -> Result<Self, Self::Err> {
            match value.trim().to_ascii_lowercase().as_str() {
                "income" => Ok(Self::Income),
                "spend" => Ok(Self::Spend),
                other => Err(format!("unknown category type: {other}")),
            }
        }
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Category {
        pub id: i64,
        pub name: String,
        pub archived: bool,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct CategoryNew {
        pub name: String,
    }
}

pub mod income {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Income {
        pub id: i64,
        pub amount: f64,
        pub income_date: NaiveDate,
        pub income_category_id: i64,
        pub wallet_id: i64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct IncomeNew {
        pub amount: f64,
        pub income_date: NaiveDate,
        pub income_category_id: i64,
        pub wallet_id: i64,
    }
}

pub mod spend {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Spend {
        pub id: i64,
        pub description: String,
        pub amount: f64,
        pub date: NaiveDate,
        pub spend_category_id: i64,
        pub wallet_id: i64,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SpendNew {
        pub description: String,
        pub amount: f64,
        pub date: NaiveDate,
        pub spend_category_id: i64,
        pub wallet_id: i64,
    }
}

pub mod balance {
    use super::*;

    /// Server-computed aggregate balance. Has no id: there is only ever one.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Balance {
        pub amount: f64,
    }
}

pub mod period {
    use super::*;

    const MONTH_NAMES: [&str; 12] = [
        "Январь",
        "Февраль",
        "Март",
        "Апрель",
        "Май",
        "Июнь",
        "Июль",
        "Август",
        "Сентябрь",
        "Октябрь",
        "Ноябрь",
        "Декабрь",
    ];

    /// A (year, month) window used to filter income and spend lists.
    ///
    /// Serialized as the `year` and `month` query parameters; `month` is
    /// 1-based.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(try_from = "RawPeriod")]
    pub struct Period {
        year: i32,
        month: u32,
    }

    #[derive(Deserialize)]
    struct RawPeriod {
        year: i32,
        month: u32,
    }

    impl TryFrom<RawPeriod> for Period {
        type Error = String;

        fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
            Period::new(raw.year, raw.month)
                .ok_or_else(|| format!("month must be 1..=12, got {}", raw.month))
        }
    }

    impl Period {
        /// Returns `None` when `month` is outside `1..=12`.
        pub fn new(year: i32, month: u32) -> Option<Self> {
            (1..=12).contains(&month).then_some(Self { year, month })
        }

        /// The period containing today's date in local time.
        pub fn current() -> Self {
            Self::from_date(Local::now().date_naive())
        }

        pub fn from_date(date: NaiveDate) -> Self {
            Self {
                year: date.year(),
                month: date.month(),
            }
        }

        pub fn year(self) -> i32 {
            self.year
        }

        pub fn month(self) -> u32 {
            self.month
        }

        /// Moves the window by `delta` months, crossing year boundaries.
        /// The year saturates at the ends of the `i32` range.
        #[must_use]
        pub fn shift(self, delta: i32) -> Self {
            let index = i64::from(self.year) * 12 + i64::from(self.month) - 1 + i64::from(delta);
            let year = index
                .div_euclid(12)
                .clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            Self {
                year,
                month: index.rem_euclid(12) as u32 + 1,
            }
        }

        /// Human label, e.g. `Май 2024`.
        pub fn label(self) -> String {
            format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
        }
    }

    impl fmt::Display for Period {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}
