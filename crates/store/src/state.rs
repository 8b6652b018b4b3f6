//! The state cell every container is built on: the owned data, the load
//! lifecycle and the error signal.
//!
//! The lock is taken only to read or commit; it is never held while a
//! gateway request is in flight, so readers observe the pre-request state
//! until the request resolves.

use std::{future::Future, sync::Arc};

use tokio::sync::Mutex;

use crate::error::ApiError;

/// Lifecycle of a container's data. `load` can be re-entered from any state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}

/// A consistent copy of a container taken under one lock.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot<C> {
    pub data: C,
    pub state: LoadState,
    pub error: Option<String>,
}

#[derive(Debug, Default)]
struct Inner<C> {
    data: C,
    state: LoadState,
    error: Option<String>,
    /// Ticket of the most recently issued load.
    issued: u64,
}

#[derive(Debug)]
pub(crate) struct Slot<C> {
    inner: Arc<Mutex<Inner<C>>>,
}

impl<C> Clone for Slot<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clone + Default> Slot<C> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner::default())),
        }
    }

    /// Runs a load: `Loading` until `fetch` resolves, then `Ready` with the
    /// fetched data or `Error` with the data untouched.
    ///
    /// Only the most recently issued load may commit. A load that resolves
    /// after a newer one was issued is dropped, success or failure.
    pub(crate) async fn load<F>(&self, fallback: &str, fetch: F) -> bool
    where
        F: Future<Output = Result<C, ApiError>>,
    {
        let ticket = {
            let mut inner = self.inner.lock().await;
            inner.issued += 1;
            inner.state = LoadState::Loading;
            inner.error = None;
            inner.issued
        };

        let result = fetch.await;

        let mut inner = self.inner.lock().await;
        if ticket != inner.issued {
            tracing::debug!(ticket, latest = inner.issued, "dropping superseded load");
            return false;
        }
        match result {
            Ok(data) => {
                inner.data = data;
                inner.state = LoadState::Ready;
                // A write may have failed while the load was in flight.
                inner.error = None;
                true
            }
            Err(err) => {
                tracing::warn!("{fallback}: {err}");
                inner.state = LoadState::Error;
                inner.error = Some(err.message_or(fallback));
                false
            }
        }
    }

    /// Runs a remote write and, once confirmed, applies it with `apply`.
    ///
    /// Clears the error up front but leaves the load state alone unless the
    /// write fails.
    pub(crate) async fn write<R, F>(
        &self,
        fallback: &str,
        request: F,
        apply: impl FnOnce(&mut C, &R),
    ) -> Option<R>
    where
        F: Future<Output = Result<R, ApiError>>,
    {
        self.inner.lock().await.error = None;

        let result = request.await;

        let mut inner = self.inner.lock().await;
        match result {
            Ok(confirmed) => {
                apply(&mut inner.data, &confirmed);
                Some(confirmed)
            }
            Err(err) => {
                tracing::warn!("{fallback}: {err}");
                inner.state = LoadState::Error;
                inner.error = Some(err.message_or(fallback));
                None
            }
        }
    }

    pub(crate) async fn snapshot(&self) -> Snapshot<C> {
        let inner = self.inner.lock().await;
        Snapshot {
            data: inner.data.clone(),
            state: inner.state,
            error: inner.error.clone(),
        }
    }

    pub(crate) async fn data(&self) -> C {
        self.inner.lock().await.data.clone()
    }

    pub(crate) async fn state(&self) -> LoadState {
        self.inner.lock().await.state
    }

    pub(crate) async fn error(&self) -> Option<String> {
        self.inner.lock().await.error.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::StatusCode;
    use tokio::sync::oneshot;

    use super::*;

    #[tokio::test]
    async fn load_moves_idle_to_ready() {
        let slot: Slot<Vec<i64>> = Slot::new();
        assert_eq!(slot.state().await, LoadState::Idle);

        assert!(slot.load("failed", async { Ok(vec![1, 2]) }).await);

        let snapshot = slot.snapshot().await;
        assert_eq!(snapshot.state, LoadState::Ready);
        assert_eq!(snapshot.data, vec![1, 2]);
        assert_eq!(snapshot.error, None);
    }

    #[tokio::test]
    async fn state_is_loading_while_request_is_in_flight() {
        let slot: Slot<Vec<i64>> = Slot::new();
        let (tx, rx) = oneshot::channel::<()>();

        let task = {
            let slot = slot.clone();
            tokio::spawn(async move {
                slot.load("failed", async move {
                    let _ = rx.await;
                    Ok(vec![7])
                })
                .await
            })
        };

        while slot.state().await != LoadState::Loading {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
        assert!(slot.data().await.is_empty());

        let _ = tx.send(());
        assert!(task.await.unwrap());
        assert_eq!(slot.data().await, vec![7]);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_data() {
        let slot: Slot<Vec<i64>> = Slot::new();
        slot.load("failed", async { Ok(vec![1]) }).await;

        let committed = slot
            .load("failed", async {
                Err::<Vec<i64>, _>(ApiError::Server {
                    status: StatusCode::BAD_GATEWAY,
                    message: None,
                })
            })
            .await;

        assert!(!committed);
        let snapshot = slot.snapshot().await;
        assert_eq!(snapshot.state, LoadState::Error);
        assert_eq!(snapshot.error.as_deref(), Some("failed"));
        assert_eq!(snapshot.data, vec![1]);
    }

    #[tokio::test]
    async fn new_load_clears_previous_error() {
        let slot: Slot<Vec<i64>> = Slot::new();
        slot.load("failed", async {
            Err::<Vec<i64>, _>(ApiError::server(StatusCode::CONFLICT, "nope"))
        })
        .await;
        assert_eq!(slot.error().await.as_deref(), Some("nope"));

        slot.load("failed", async { Ok(vec![3]) }).await;
        assert_eq!(slot.error().await, None);
        assert_eq!(slot.state().await, LoadState::Ready);
    }

    #[tokio::test]
    async fn superseded_load_is_dropped() {
        let slot: Slot<Vec<i64>> = Slot::new();
        let (old_tx, old_rx) = oneshot::channel::<()>();

        let old = {
            let slot = slot.clone();
            tokio::spawn(async move {
                slot.load("failed", async move {
                    let _ = old_rx.await;
                    Ok(vec![1])
                })
                .await
            })
        };
        while slot.state().await != LoadState::Loading {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        assert!(slot.load("failed", async { Ok(vec![2]) }).await);

        let _ = old_tx.send(());
        assert!(!old.await.unwrap());

        let snapshot = slot.snapshot().await;
        assert_eq!(snapshot.data, vec![2]);
        assert_eq!(snapshot.state, LoadState::Ready);
    }

    #[tokio::test]
    async fn committed_load_clears_error_from_concurrent_write() {
        let slot: Slot<Vec<i64>> = Slot::new();
        let (tx, rx) = oneshot::channel::<()>();

        let task = {
            let slot = slot.clone();
            tokio::spawn(async move {
                slot.load("failed", async move {
                    let _ = rx.await;
                    Ok(vec![1])
                })
                .await
            })
        };
        while slot.state().await != LoadState::Loading {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }

        let created = slot
            .write(
                "write failed",
                async { Err::<i64, _>(ApiError::server(StatusCode::CONFLICT, "duplicate")) },
                |items, id| items.push(*id),
            )
            .await;
        assert_eq!(created, None);
        assert_eq!(slot.error().await.as_deref(), Some("duplicate"));

        let _ = tx.send(());
        assert!(task.await.unwrap());

        let snapshot = slot.snapshot().await;
        assert_eq!(snapshot.state, LoadState::Ready);
        assert_eq!(snapshot.error, None);
        assert_eq!(snapshot.data, vec![1]);
    }

    #[tokio::test]
    async fn write_leaves_load_state_alone_on_success() {
        let slot: Slot<Vec<i64>> = Slot::new();
        let created = slot
            .write("failed", async { Ok(5) }, |items, id| items.push(*id))
            .await;

        assert_eq!(created, Some(5));
        assert_eq!(slot.state().await, LoadState::Idle);
        assert_eq!(slot.data().await, vec![5]);
    }

    #[tokio::test]
    async fn failed_write_sets_error_without_applying() {
        let slot: Slot<Vec<i64>> = Slot::new();
        slot.load("failed", async { Ok(vec![1]) }).await;

        let created = slot
            .write(
                "write failed",
                async { Err::<i64, _>(ApiError::Endpoint("bad".to_string())) },
                |items, id| items.push(*id),
            )
            .await;

        assert_eq!(created, None);
        let snapshot = slot.snapshot().await;
        assert_eq!(snapshot.state, LoadState::Error);
        assert_eq!(snapshot.error.as_deref(), Some("write failed"));
        assert_eq!(snapshot.data, vec![1]);
    }
}
