//! Spend container, windowed by month. The only container that deletes.

use std::sync::Arc;

use api_types::{
    period::Period,
    spend::{Spend, SpendNew},
};

use crate::{
    error::ApiError,
    gateway::SpendGateway,
    model::{Windowed, prepend, remove_by_id},
    state::{LoadState, Slot, Snapshot},
};

const LOAD_FAILED: &str = "Не удалось загрузить расходы";
const ADD_FAILED: &str = "Не удалось создать расход";
const REMOVE_FAILED: &str = "Не удалось удалить расход";

#[derive(Clone)]
pub struct SpendStore {
    gateway: Arc<dyn SpendGateway>,
    slot: Slot<Windowed<Spend>>,
}

impl SpendStore {
    pub fn new(gateway: Arc<dyn SpendGateway>) -> Self {
        Self {
            gateway,
            slot: Slot::new(),
        }
    }

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

    pub async fn add(&self, payload: SpendNew) -> Option<Spend> {
        self.slot
            .write(
                ADD_FAILED,
                self.gateway.create(&payload),
                |window: &mut Windowed<Spend>, created: &Spend| {
                    prepend(&mut window.items, created)
                },
            )
            .await
    }

    /// Deletes the spend remotely, then drops it from the window.
    pub async fn remove(&self, id: i64) -> bool {
        self.slot
            .write(
                REMOVE_FAILED,
                self.gateway.delete(id),
                |window: &mut Windowed<Spend>, _: &()| remove_by_id(&mut window.items, id),
            )
            .await
            .is_some()
    }

    pub async fn spends(&self) -> Vec<Spend> {
        self.slot.data().await.items
    }

    pub async fn period(&self) -> Option<Period> {
        self.slot.data().await.period
    }

    pub async fn state(&self) -> LoadState {
        self.slot.state().await
    }

    pub async fn error(&self) -> Option<String> {
        self.slot.error().await
    }

    pub async fn snapshot(&self) -> Snapshot<Windowed<Spend>> {
        self.slot.snapshot().await
    }
}
