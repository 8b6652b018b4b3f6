//! Balance container. Read-only: every load replaces the snapshot.

use std::sync::Arc;

use api_types::balance::Balance;

use crate::{
    gateway::BalanceGateway,
    state::{LoadState, Slot, Snapshot},
};

const LOAD_FAILED: &str = "Не удалось загрузить баланс";

#[derive(Clone)]
pub struct BalanceStore {
    gateway: Arc<dyn BalanceGateway>,
    slot: Slot<Option<Balance>>,
}

impl BalanceStore {
    pub fn new(gateway: Arc<dyn BalanceGateway>) -> Self {
        Self {
            gateway,
            slot: Slot::new(),
        }
    }

    pub async fn load(&self) -> bool {
        let fetch = async { self.gateway.current().await.map(Some) };
        self.slot.load(LOAD_FAILED, fetch).await
    }

    /// `None` until the first successful load.
    pub async fn balance(&self) -> Option<Balance> {
        self.slot.data().await
    }

    pub async fn state(&self) -> LoadState {
        self.slot.state().await
    }

    pub async fn error(&self) -> Option<String> {
        self.slot.error().await
    }

    pub async fn snapshot(&self) -> Snapshot<Option<Balance>> {
        self.slot.snapshot().await
    }
}
