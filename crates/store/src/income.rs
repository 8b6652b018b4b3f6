//! Income container, windowed by month.

use std::sync::Arc;

use api_types::{
    income::{Income, IncomeNew},
    period::Period,
};

use crate::{
    error::ApiError,
    gateway::IncomeGateway,
    model::{Windowed, prepend},
    state::{LoadState, Slot, Snapshot},
};

const LOAD_FAILED: &str = "Не удалось загрузить доходы";
const ADD_FAILED: &str = "Не удалось создать доход";

#[derive(Clone)]
pub struct IncomeStore {
    gateway: Arc<dyn IncomeGateway>,
    slot: Slot<Windowed<Income>>,
}

impl IncomeStore {
    pub fn new(gateway: Arc<dyn IncomeGateway>) -> Self {
        Self {
            gateway,
            slot: Slot::new(),
        }
    }

    /// Replaces the window with `period`'s income.
    pub async fn load(&self, period: Period) -> bool {
        let fetch = async {
            let items = self.gateway.list(period).await?;
            Ok::<_, ApiError>(Windowed {
                period: Some(period),
                items,
            })
        };
        self.slot.load(LOAD_FAILED, fetch).await
    }

    pub async fn add(&self, payload: IncomeNew) -> Option<Income> {
        self.slot
            .write(
                ADD_FAILED,
                self.gateway.create(&payload),
                |window: &mut Windowed<Income>, created: &Income| {
                    prepend(&mut window.items, created)
                },
            )
            .await
    }

    pub async fn incomes(&self) -> Vec<Income> {
        self.slot.data().await.items
    }

    /// The period of the committed window, `None` before the first load.
    pub async fn period(&self) -> Option<Period> {
        self.slot.data().await.period
    }

    pub async fn state(&self) -> LoadState {
        self.slot.state().await
    }

    pub async fn error(&self) -> Option<String> {
        self.slot.error().await
    }

    pub async fn snapshot(&self) -> Snapshot<Windowed<Income>> {
        self.slot.snapshot().await
    }
}
