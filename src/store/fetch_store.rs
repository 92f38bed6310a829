//! Generic fetch-state container.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::{debug, warn};

use super::fetch_state::FetchState;

/// A caller-issued request driving one fetch-state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent<P> {
    /// Start a load with the given request parameter.
    Load(P),
    /// Replay the last recorded parameter.
    Retry,
}

/// One screen's fetch operation: the request parameter it takes, the
/// payload it produces, and how it maps onto the API.
///
/// Failures come back as the rendered message the store publishes in its
/// error state.
#[async_trait]
pub trait FetchOperation: Send + Sync + 'static {
    type Param: Clone + Send + Sync + 'static;
    type Output: Clone + Send + Sync + 'static;

    /// Screen name used in logs.
    fn name(&self) -> &'static str;

    async fn fetch(&self, param: &Self::Param) -> Result<Self::Output, String>;
}

/// Generic fetch-state store.
///
/// Owns one [`FetchState`] value plus the last request parameter, and turns
/// intents into state transitions. [`FetchStore::send`] flips the state to
/// `Loading` before the fetch task is spawned, so a caller that sends an
/// intent and immediately inspects the state sees `Loading`, never `Idle`.
///
/// Overlapping sends are permitted: nothing is de-duplicated or cancelled,
/// and the last completion to land wins, so a stale completion may
/// overwrite a newer one.
pub struct FetchStore<Op: FetchOperation> {
    op: Arc<Op>,
    state: watch::Sender<FetchState<Op::Output>>,
    current: Mutex<Option<Op::Param>>,
}

impl<Op: FetchOperation> FetchStore<Op> {
    /// Build a store around `op`.
    ///
    /// `initial_param` seeds the replay parameter for screens whose load
    /// takes no caller-supplied value, so `Retry` works before any `Load`.
    pub fn with_operation(op: Op, initial_param: Option<Op::Param>) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            op: Arc::new(op),
            state,
            current: Mutex::new(initial_param),
        }
    }

    /// Current state, readable synchronously.
    pub fn state(&self) -> FetchState<Op::Output> {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<FetchState<Op::Output>> {
        self.state.subscribe()
    }

    /// Last recorded request parameter.
    pub fn current_param(&self) -> Option<Op::Param> {
        self.current.lock().unwrap().clone()
    }

    /// Handle one intent.
    ///
    /// Must be called from within a tokio runtime: the fetch runs on a
    /// spawned task that reports back through the state channel. `Retry`
    /// with no recorded parameter performs no transition.
    pub fn send(&self, intent: Intent<Op::Param>) {
        let param = match intent {
            Intent::Load(param) => param,
            Intent::Retry => match self.current_param() {
                Some(param) => param,
                None => {
                    warn!(screen = self.op.name(), "retry with no recorded parameter");
                    return;
                }
            },
        };

        *self.current.lock().unwrap() = Some(param.clone());
        self.state.send_replace(FetchState::Loading);
        debug!(screen = self.op.name(), "loading");

        let op = Arc::clone(&self.op);
        let state = self.state.clone();
        tokio::spawn(async move {
            let next = match op.fetch(&param).await {
                Ok(payload) => FetchState::Loaded(payload),
                Err(message) => {
                    warn!(screen = op.name(), %message, "load failed");
                    FetchState::Error(message)
                }
            };
            // Last completion wins; no ordering is enforced across
            // overlapping sends.
            state.send_replace(next);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes its parameter after yielding once, or fails on demand.
    struct EchoOp {
        fail: bool,
    }

    #[async_trait]
    impl FetchOperation for EchoOp {
        type Param = String;
        type Output = String;

        fn name(&self) -> &'static str {
            "echo"
        }

        async fn fetch(&self, param: &String) -> Result<String, String> {
            tokio::task::yield_now().await;
            if self.fail {
                Err("echo failed".to_string())
            } else {
                Ok(param.clone())
            }
        }
    }

    impl crate::store::IdentityEq for String {
        fn identity_eq(&self, other: &Self) -> bool {
            self == other
        }
    }

    async fn settled(store: &FetchStore<EchoOp>) -> FetchState<String> {
        let mut rx = store.subscribe();
        loop {
            let state = rx.borrow_and_update().clone();
            if state.is_loaded() || state.is_error() {
                return state;
            }
            rx.changed().await.expect("store dropped");
        }
    }

    #[tokio::test]
    async fn send_flips_to_loading_synchronously() {
        let store = FetchStore::with_operation(EchoOp { fail: false }, None);
        assert!(store.state().is_idle());

        store.send(Intent::Load("hello".to_string()));
        assert!(store.state().is_loading());

        assert_eq!(
            settled(&store).await,
            FetchState::Loaded("hello".to_string())
        );
    }

    #[tokio::test]
    async fn failure_lands_in_error_state() {
        let store = FetchStore::with_operation(EchoOp { fail: true }, None);
        store.send(Intent::Load("hello".to_string()));

        assert_eq!(
            settled(&store).await,
            FetchState::Error("echo failed".to_string())
        );
    }

    #[tokio::test]
    async fn retry_without_recorded_parameter_is_a_no_op() {
        let store = FetchStore::with_operation(EchoOp { fail: false }, None);
        store.send(Intent::Retry);

        assert!(store.state().is_idle());
        assert!(store.current_param().is_none());
    }

    #[tokio::test]
    async fn retry_replays_recorded_parameter() {
        let store = FetchStore::with_operation(EchoOp { fail: false }, None);
        store.send(Intent::Load("first".to_string()));
        settled(&store).await;

        store.send(Intent::Retry);
        assert!(store.state().is_loading());
        assert_eq!(
            settled(&store).await,
            FetchState::Loaded("first".to_string())
        );
    }

    #[tokio::test]
    async fn seeded_parameter_allows_immediate_retry() {
        let store = FetchStore::with_operation(EchoOp { fail: false }, Some("seed".to_string()));
        store.send(Intent::Retry);

        assert!(store.state().is_loading());
        assert_eq!(settled(&store).await, FetchState::Loaded("seed".to_string()));
    }
}
