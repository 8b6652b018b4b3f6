//! Categories container: income and spend categories share one load state
//! and one error signal.

use std::sync::Arc;

use api_types::category::{Category, CategoryNew, CategoryType};

use crate::{
    error::ApiError,
    gateway::CategoriesGateway,
    model::{prepend, replace_by_id},
    state::{LoadState, Slot, Snapshot},
};

const LOAD_FAILED: &str = "Не удалось загрузить категории";
const ADD_FAILED: &str = "Не удалось создать категорию";
const ARCHIVE_FAILED: &str = "Не удалось архивировать категорию";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryLists {
    pub income: Vec<Category>,
    pub spend: Vec<Category>,
}

impl CategoryLists {
    pub fn of(&self, kind: CategoryType) -> &[Category] {
        match kind {
            CategoryType::Income => &self.income,
            CategoryType::Spend => &self.spend,
        }
    }

    fn of_mut(&mut self, kind: CategoryType) -> &mut Vec<Category> {
        match kind {
            CategoryType::Income => &mut self.income,
            CategoryType::Spend => &mut self.spend,
        }
    }
}

#[derive(Clone)]
pub struct CategoriesStore {
    gateway: Arc<dyn CategoriesGateway>,
    slot: Slot<CategoryLists>,
}

impl CategoriesStore {
    pub fn new(gateway: Arc<dyn CategoriesGateway>) -> Self {
        Self {
            gateway,
            slot: Slot::new(),
        }
    }

    /// Fetches both kinds concurrently and commits them together.
    ///
    /// If either request fails neither list is replaced. The reported
    /// message comes from the income failure when both fail.
    pub async fn load(&self) -> bool {
        let fetch = async {
            let (income, spend) = tokio::join!(
                self.gateway.list(CategoryType::Income),
                self.gateway.list(CategoryType::Spend),
            );
            Ok::<_, ApiError>(CategoryLists {
                income: income?,
                spend: spend?,
            })
        };
        self.slot.load(LOAD_FAILED, fetch).await
    }

    pub async fn add(&self, kind: CategoryType, payload: CategoryNew) -> Option<Category> {
        self.slot
            .write(
                ADD_FAILED,
                self.gateway.create(kind, &payload),
                |lists: &mut CategoryLists, created: &Category| {
                    prepend(lists.of_mut(kind), created)
                },
            )
            .await
    }

    pub async fn archive(&self, kind: CategoryType, id: i64) -> Option<Category> {
        self.slot
            .write(
                ARCHIVE_FAILED,
                self.gateway.archive(kind, id),
                |lists: &mut CategoryLists, archived: &Category| {
                    replace_by_id(lists.of_mut(kind), id, archived)
                },
            )
            .await
    }

    pub async fn lists(&self) -> CategoryLists {
        self.slot.data().await
    }

    pub async fn income(&self) -> Vec<Category> {
        self.slot.data().await.income
    }

    pub async fn spend(&self) -> Vec<Category> {
        self.slot.data().await.spend
    }

    pub async fn state(&self) -> LoadState {
        self.slot.state().await
    }

    pub async fn error(&self) -> Option<String> {
        self.slot.error().await
    }

    pub async fn snapshot(&self) -> Snapshot<CategoryLists> {
        self.slot.snapshot().await
    }
}
