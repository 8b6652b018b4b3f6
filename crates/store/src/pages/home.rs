//! The month overview: income and spend of one period, plus the forms to
//! record new entries.

use api_types::{
    balance::Balance, category::Category, income::Income, period::Period, spend::Spend,
    wallet::Wallet,
};

use crate::{
    categories::CategoryLists,
    model::Windowed,
    pages::{
        Stores,
        forms::{ExpenseForm, FormError, IncomeForm},
    },
    state::{LoadState, Snapshot},
    views,
};

pub struct HomePage {
    stores: Stores,
    period: Period,
    pub income_form: IncomeForm,
    pub expense_form: ExpenseForm,
}

impl HomePage {
    pub fn new(stores: &Stores, period: Period) -> Self {
        Self {
            stores: stores.clone(),
            period,
            income_form: IncomeForm::default(),
            expense_form: ExpenseForm::default(),
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    /// Loads everything the page shows, all at once, then pre-selects the
    /// first active category and wallet in forms that have no selection yet.
    pub async fn enter(&mut self) {
        let stores = &self.stores;
        tokio::join!(
            stores.categories.load(),
            stores.wallets.load(),
            stores.balance.load(),
            self.load_entries(),
        );
        self.apply_defaults().await;
    }

    /// Moves the window by `delta` months and reloads income and spend.
    pub async fn change_month(&mut self, delta: i32) -> bool {
        self.period = self.period.shift(delta);
        tracing::debug!("switching to {}", self.period);
        self.load_entries().await
    }

    async fn load_entries(&self) -> bool {
        let (income, spend) = tokio::join!(
            self.stores.income.load(self.period),
            self.stores.spend.load(self.period),
        );
        income && spend
    }

    async fn apply_defaults(&mut self) {
        let categories = self.stores.categories.lists().await;
        let wallets = self.stores.wallets.wallets().await;

        let income_category = views::active(&categories.income).first().map(|c| c.id);
        let spend_category = views::active(&categories.spend).first().map(|c| c.id);
        let wallet = views::active(&wallets).first().map(|w| w.id);

        self.income_form.category_id = self.income_form.category_id.or(income_category);
        self.expense_form.category_id = self.expense_form.category_id.or(spend_category);
        self.income_form.wallet_id = self.income_form.wallet_id.or(wallet);
        self.expense_form.wallet_id = self.expense_form.wallet_id.or(wallet);
    }

    /// Submits the income form. The balance is reloaded when the income was
    /// recorded.
    pub async fn add_income(&mut self) -> Result<bool, FormError> {
        let payload = self.income_form.validate()?;
        let committed = self.stores.income.add(payload).await.is_some();
        self.income_form.reset();
        if committed {
            self.stores.balance.load().await;
        }
        Ok(committed)
    }

    pub async fn add_expense(&mut self) -> Result<bool, FormError> {
        let payload = self.expense_form.validate()?;
        let committed = self.stores.spend.add(payload).await.is_some();
        self.expense_form.reset();
        if committed {
            self.stores.balance.load().await;
        }
        Ok(committed)
    }

    pub async fn remove_expense(&self, id: i64) -> bool {
        let committed = self.stores.spend.remove(id).await;
        if committed {
            self.stores.balance.load().await;
        }
        committed
    }

    pub async fn view(&self) -> HomeView {
        let (categories, wallets, income, spend, balance) = tokio::join!(
            self.stores.categories.snapshot(),
            self.stores.wallets.snapshot(),
            self.stores.income.snapshot(),
            self.stores.spend.snapshot(),
            self.stores.balance.snapshot(),
        );
        HomeView::build(self.period, categories, wallets, income, spend, balance)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct IncomeRow {
    pub income: Income,
    pub category: String,
    pub wallet: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRow {
    pub spend: Spend,
    pub category: String,
    pub wallet: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HomeView {
    pub period_label: String,
    pub incomes: Vec<IncomeRow>,
    pub expenses: Vec<ExpenseRow>,
    pub active_income_categories: Vec<Category>,
    pub active_spend_categories: Vec<Category>,
    pub active_wallets: Vec<Wallet>,
    pub income_total: f64,
    pub spend_total: f64,
    pub balance: Option<Balance>,
    pub loading: bool,
    pub error: Option<String>,
}

impl HomeView {
    pub fn build(
        period: Period,
        categories: Snapshot<CategoryLists>,
        wallets: Snapshot<Vec<Wallet>>,
        income: Snapshot<Windowed<Income>>,
        spend: Snapshot<Windowed<Spend>>,
        balance: Snapshot<Option<Balance>>,
    ) -> Self {
        let incomes = income
            .data
            .items
            .iter()
            .map(|item| IncomeRow {
                income: item.clone(),
                category: views::label(&categories.data.income, item.income_category_id)
                    .to_string(),
                wallet: views::label(&wallets.data, item.wallet_id).to_string(),
            })
            .collect();
        let expenses = spend
            .data
            .items
            .iter()
            .map(|item| ExpenseRow {
                spend: item.clone(),
                category: views::label(&categories.data.spend, item.spend_category_id)
                    .to_string(),
                wallet: views::label(&wallets.data, item.wallet_id).to_string(),
            })
            .collect();

        let loading = [
            categories.state,
            wallets.state,
            income.state,
            spend.state,
            balance.state,
        ]
        .contains(&LoadState::Loading);

        Self {
            period_label: period.label(),
            incomes,
            expenses,
            active_income_categories: views::active(&categories.data.income)
                .into_iter()
                .cloned()
                .collect(),
            active_spend_categories: views::active(&categories.data.spend)
                .into_iter()
                .cloned()
                .collect(),
            active_wallets: views::active(&wallets.data).into_iter().cloned().collect(),
            income_total: views::total(&income.data.items),
            spend_total: views::total(&spend.data.items),
            balance: balance.data,
            loading,
            error: views::first_error([
                categories.error,
                wallets.error,
                income.error,
                spend.error,
                balance.error,
            ]),
        }
    }
}
