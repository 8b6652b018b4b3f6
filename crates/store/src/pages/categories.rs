use api_types::category::{Category, CategoryType};

use crate::{
    categories::CategoriesStore,
    pages::{
        Stores,
        forms::{CategoryForm, FormError},
    },
    state::LoadState,
    views,
};

pub struct CategoriesPage {
    categories: CategoriesStore,
    pub form: CategoryForm,
}

impl CategoriesPage {
    pub fn new(stores: &Stores) -> Self {
        Self {
            categories: stores.categories.clone(),
            form: CategoryForm::default(),
        }
    }

    pub async fn enter(&self) -> bool {
        self.categories.load().await
    }

    pub async fn add(&mut self) -> Result<bool, FormError> {
        let (kind, payload) = self.form.validate()?;
        let committed = self.categories.add(kind, payload).await.is_some();
        self.form.reset();
        Ok(committed)
    }

    pub async fn archive(&self, kind: CategoryType, id: i64) -> bool {
        self.categories.archive(kind, id).await.is_some()
    }

    /// Both lists with archived categories moved to the end.
    pub async fn view(&self) -> CategoriesView {
        let snapshot = self.categories.snapshot().await;
        CategoriesView {
            income: views::archived_last(&snapshot.data.income),
            spend: views::archived_last(&snapshot.data.spend),
            state: snapshot.state,
            error: snapshot.error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoriesView {
    pub income: Vec<Category>,
    pub spend: Vec<Category>,
    pub state: LoadState,
    pub error: Option<String>,
}
