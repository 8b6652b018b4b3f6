use api_types::wallet::Wallet;

use crate::{
    pages::{
        Stores,
        forms::{FormError, WalletForm},
    },
    state::LoadState,
    views,
    wallets::WalletsStore,
};

pub struct WalletsPage {
    wallets: WalletsStore,
    pub form: WalletForm,
}

impl WalletsPage {
    pub fn new(stores: &Stores) -> Self {
        Self {
            wallets: stores.wallets.clone(),
            form: WalletForm::default(),
        }
    }

    pub async fn enter(&self) -> bool {
        self.wallets.load().await
    }

    /// Submits the form. The form is reset whether or not the server accepted
    /// the wallet.
    pub async fn add(&mut self) -> Result<bool, FormError> {
        let payload = self.form.validate()?;
        let committed = self.wallets.add(payload).await.is_some();
        self.form.reset();
        Ok(committed)
    }

    pub async fn archive(&self, id: i64) -> bool {
        self.wallets.archive(id).await.is_some()
    }

    pub async fn view(&self) -> WalletsView {
        let snapshot = self.wallets.snapshot().await;
        WalletsView {
            active: views::active(&snapshot.data).into_iter().cloned().collect(),
            archived: views::archived(&snapshot.data)
                .into_iter()
                .cloned()
                .collect(),
            state: snapshot.state,
            error: snapshot.error,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WalletsView {
    pub active: Vec<Wallet>,
    pub archived: Vec<Wallet>,
    pub state: LoadState,
    pub error: Option<String>,
}
