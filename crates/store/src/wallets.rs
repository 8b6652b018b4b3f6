//! Wallets container.

use std::sync::Arc;

use api_types::wallet::{Wallet, WalletNew};

use crate::{
    gateway::WalletsGateway,
    model::{prepend, replace_by_id},
    state::{LoadState, Slot, Snapshot},
};

const LOAD_FAILED: &str = "Не удалось загрузить кошельки";
const ADD_FAILED: &str = "Не удалось создать кошелёк";
const ARCHIVE_FAILED: &str = "Не удалось архивировать кошелёк";

#[derive(Clone)]
pub struct WalletsStore {
    gateway: Arc<dyn WalletsGateway>,
    slot: Slot<Vec<Wallet>>,
}

impl WalletsStore {
    pub fn new(gateway: Arc<dyn WalletsGateway>) -> Self {
        Self {
            gateway,
            slot: Slot::new(),
        }
    }

    /// Replaces the wallets with the server's list.
    pub async fn load(&self) -> bool {
        self.slot.load(LOAD_FAILED, self.gateway.list()).await
    }

    /// Creates a wallet and puts it at the front once the server confirms it.
    pub async fn add(&self, payload: WalletNew) -> Option<Wallet> {
        self.slot
            .write(ADD_FAILED, self.gateway.create(&payload), prepend)
            .await
    }

    pub async fn archive(&self, id: i64) -> Option<Wallet> {
        self.slot
            .write(
                ARCHIVE_FAILED,
                self.gateway.archive(id),
                |wallets: &mut Vec<Wallet>, archived: &Wallet| {
                    replace_by_id(wallets, id, archived)
                },
            )
            .await
    }

    pub async fn wallets(&self) -> Vec<Wallet> {
        self.slot.data().await
    }

    pub async fn state(&self) -> LoadState {
        self.slot.state().await
    }

    pub async fn error(&self) -> Option<String> {
        self.slot.error().await
    }

    pub async fn snapshot(&self) -> Snapshot<Vec<Wallet>> {
        self.slot.snapshot().await
    }
}
