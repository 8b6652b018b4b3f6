//! Small capability traits over the wire types, used by the containers to
//! reconcile collections and by the views to project them.

use api_types::{
    category::Category, income::Income, period::Period, spend::Spend, wallet::Wallet,
};

/// Entities with a server-assigned id.
pub trait Keyed {
    fn id(&self) -> i64;
}

pub trait Archivable {
    fn archived(&self) -> bool;
}

/// Entities that can be referenced by a display name.
pub trait Named {
    fn name(&self) -> &str;
}

pub trait Amount {
    fn amount(&self) -> f64;
}

impl Keyed for Wallet {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Archivable for Wallet {
    fn archived(&self) -> bool {
        self.archived
    }
}

impl Named for Wallet {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Category {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Archivable for Category {
    fn archived(&self) -> bool {
        self.archived
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Keyed for Income {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Amount for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Keyed for Spend {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Amount for Spend {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// A collection scoped to one period. Replaced, never merged, when the
/// period changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Windowed<T> {
    pub period: Option<Period>,
    pub items: Vec<T>,
}

impl<T> Default for Windowed<T> {
    fn default() -> Self {
        Self {
            period: None,
            items: Vec::new(),
        }
    }
}

/// Newest first.
pub(crate) fn prepend<T: Clone>(items: &mut Vec<T>, created: &T) {
    items.insert(0, created.clone());
}

/// Swaps every element with `id` for `updated`, keeping its position.
/// Nothing is appended when `id` is absent.
pub(crate) fn replace_by_id<T: Keyed + Clone>(items: &mut [T], id: i64, updated: &T) {
    for item in items.iter_mut().filter(|item| item.id() == id) {
        *item = updated.clone();
    }
}

pub(crate) fn remove_by_id<T: Keyed>(items: &mut Vec<T>, id: i64) {
    items.retain(|item| item.id() != id);
}
