use api_types::{Currency, category::CategoryType, period::Period};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use store::{
    LoadState, Stores,
    pages::{CategoriesPage, CategoriesView, HomePage, HomeView, WalletsPage, WalletsView},
};

use crate::{
    config::ConfigArgs,
    error::{AppError, Result},
};

#[derive(Parser, Debug)]
#[command(name = "kopilka")]
#[command(about = "Personal finance client: wallets, categories, income and spend")]
pub struct Cli {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Month overview with income, spend and the total balance.
    Home(PeriodArgs),
    Wallets(Wallets),
    Categories(Categories),
    Income(Income),
    Spend(Spend),
}

#[derive(Args, Debug)]
pub struct PeriodArgs {
    /// Defaults to the current year.
    #[arg(long)]
    year: Option<i32>,
    /// 1..=12, defaults to the current month.
    #[arg(long)]
    month: Option<u32>,
}

impl PeriodArgs {
    fn period(&self) -> Result<Period> {
        let current = Period::current();
        let year = self.year.unwrap_or(current.year());
        let month = self.month.unwrap_or(current.month());
        Period::new(year, month)
            .ok_or_else(|| AppError::Input(format!("month must be 1..=12, got {month}")))
    }
}

#[derive(Args, Debug)]
pub struct Wallets {
    #[command(subcommand)]
    command: WalletsCommand,
}

#[derive(Subcommand, Debug)]
enum WalletsCommand {
    List,
    Add(WalletAddArgs),
    Archive { id: i64 },
}

#[derive(Args, Debug)]
struct WalletAddArgs {
    #[arg(long)]
    name: String,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    balance: f64,
    /// RUB, USD or EUR.
    #[arg(long, default_value = "RUB")]
    currency: Currency,
}

#[derive(Args, Debug)]
pub struct Categories {
    #[command(subcommand)]
    command: CategoriesCommand,
}

#[derive(Subcommand, Debug)]
enum CategoriesCommand {
    List,
    Add(CategoryAddArgs),
    Archive {
        /// `income` or `spend`.
        #[arg(long)]
        kind: CategoryType,
        id: i64,
    },
}

#[derive(Args, Debug)]
struct CategoryAddArgs {
    #[arg(long)]
    kind: CategoryType,
    #[arg(long)]
    name: String,
}

#[derive(Args, Debug)]
pub struct Income {
    #[command(subcommand)]
    command: IncomeCommand,
}

#[derive(Subcommand, Debug)]
enum IncomeCommand {
    Add(IncomeAddArgs),
}

#[derive(Args, Debug)]
struct IncomeAddArgs {
    #[arg(long)]
    amount: f64,
    /// YYYY-MM-DD, defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Defaults to the first active income category.
    #[arg(long)]
    category: Option<i64>,
    /// Defaults to the first active wallet.
    #[arg(long)]
    wallet: Option<i64>,
}

#[derive(Args, Debug)]
pub struct Spend {
    #[command(subcommand)]
    command: SpendCommand,
}

#[derive(Subcommand, Debug)]
enum SpendCommand {
    Add(SpendAddArgs),
    Remove {
        id: i64,
        #[command(flatten)]
        period: PeriodArgs,
    },
}

#[derive(Args, Debug)]
struct SpendAddArgs {
    #[arg(long)]
    description: String,
    #[arg(long)]
    amount: f64,
    /// YYYY-MM-DD, defaults to today.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Defaults to the first active spend category.
    #[arg(long)]
    category: Option<i64>,
    /// Defaults to the first active wallet.
    #[arg(long)]
    wallet: Option<i64>,
}

/// Runs one command against the containers and prints the resulting page.
/// Server-side failures are part of the printed page, not an `Err`.
pub async fn run(command: Command, stores: &Stores) -> Result<()> {
    match command {
        Command::Home(args) => {
            let mut page = HomePage::new(stores, args.period()?);
            page.enter().await;
            print_home(&page.view().await);
        }
        Command::Wallets(Wallets { command }) => {
            let mut page = WalletsPage::new(stores);
            page.enter().await;
            match command {
                WalletsCommand::List => {}
                WalletsCommand::Add(args) => {
                    page.form.name = args.name;
                    page.form.balance = args.balance;
                    page.form.currency = args.currency;
                    page.add().await?;
                }
                WalletsCommand::Archive { id } => {
                    page.archive(id).await;
                }
            }
            print_wallets(&page.view().await);
        }
        Command::Categories(Categories { command }) => {
            let mut page = CategoriesPage::new(stores);
            page.enter().await;
            match command {
                CategoriesCommand::List => {}
                CategoriesCommand::Add(args) => {
                    page.form.kind = args.kind;
                    page.form.name = args.name;
                    page.add().await?;
                }
                CategoriesCommand::Archive { kind, id } => {
                    page.archive(kind, id).await;
                }
            }
            print_categories(&page.view().await);
        }
        Command::Income(Income {
            command: IncomeCommand::Add(args),
        }) => {
            let date = args.date.unwrap_or_else(today);
            let mut page = HomePage::new(stores, Period::from_date(date));
            page.income_form.category_id = args.category;
            page.income_form.wallet_id = args.wallet;
            page.enter().await;
            page.income_form.amount = Some(args.amount);
            page.income_form.date = Some(date);
            page.add_income().await?;
            print_home(&page.view().await);
        }
        Command::Spend(Spend { command }) => match command {
            SpendCommand::Add(args) => {
                let date = args.date.unwrap_or_else(today);
                let mut page = HomePage::new(stores, Period::from_date(date));
                page.expense_form.category_id = args.category;
                page.expense_form.wallet_id = args.wallet;
                page.enter().await;
                page.expense_form.description = args.description;
                page.expense_form.amount = Some(args.amount);
                page.expense_form.date = Some(date);
                page.add_expense().await?;
                print_home(&page.view().await);
            }
            SpendCommand::Remove { id, period } => {
                let mut page = HomePage::new(stores, period.period()?);
                page.enter().await;
                page.remove_expense(id).await;
                print_home(&page.view().await);
            }
        },
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_error(error: Option<&str>) {
    if let Some(message) = error {
        println!("error: {message}");
    }
}

fn print_home(view: &HomeView) {
    println!("{}", view.period_label);
    match &view.balance {
        Some(balance) => println!("balance: {:.2}", balance.amount),
        None => println!("balance: -"),
    }

    println!();
    println!("income: {:.2}", view.income_total);
    for row in &view.incomes {
        println!(
            "  #{:<5} {}  {:>10.2}  {}  {}",
            row.income.id, row.income.income_date, row.income.amount, row.category, row.wallet
        );
    }

    println!();
    println!("spend: {:.2}", view.spend_total);
    for row in &view.expenses {
        println!(
            "  #{:<5} {}  {:>10.2}  {}  {}  {}",
            row.spend.id,
            row.spend.date,
            row.spend.amount,
            row.spend.description,
            row.category,
            row.wallet
        );
    }
    print_error(view.error.as_deref());
}

fn print_wallets(view: &WalletsView) {
    for (title, wallets) in [("active", &view.active), ("archived", &view.archived)] {
        println!("{title}:");
        for wallet in wallets {
            println!(
                "  #{:<5} {}  {:.2} {}",
                wallet.id, wallet.name, wallet.balance, wallet.currency
            );
        }
    }
    if view.state == LoadState::Loading {
        println!("loading...");
    }
    print_error(view.error.as_deref());
}

fn print_categories(view: &CategoriesView) {
    for (kind, categories) in [
        (CategoryType::Income, &view.income),
        (CategoryType::Spend, &view.spend),
    ] {
        println!("{kind}:");
        for category in categories {
            let marker = if category.archived { " (archived)" } else { "" };
            println!("  #{:<5} {}{marker}", category.id, category.name);
        }
    }
    if view.state == LoadState::Loading {
        println!("loading...");
    }
    print_error(view.error.as_deref());
}
