//! Shared fetch lifecycle for views backed by a remote collection.
//!
//! Every listing view owns exactly one fetch: issued on mount, re-issued
//! only by an explicit retry, and abandoned when the view goes away.
//! `use_resource` provides those guarantees — it drops the in-flight
//! future when the view unmounts or when the retry generation changes, so
//! a stale response can never land on a disposed view and a retry never
//! races an older request.

use std::future::Future;

use api::ApiResult;
use dioxus::prelude::*;

/// The `{loading, error, data}` triple every listing view tracks.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteState<R> {
    Loading,
    Failed(String),
    Ready(R),
}

impl<R> RemoteState<R> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn from_result(result: ApiResult<R>) -> Self {
        match result {
            Ok(payload) => RemoteState::Ready(payload),
            Err(err) => RemoteState::Failed(err.to_string()),
        }
    }
}

/// Handle returned by [`use_remote`]: current state plus a retry control.
pub struct Remote<R: 'static> {
    state: Signal<RemoteState<R>>,
    attempt: Signal<u32>,
}

impl<R: 'static> Clone for Remote<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: 'static> Copy for Remote<R> {}

impl<R: Clone + 'static> Remote<R> {
    pub fn state(&self) -> RemoteState<R> {
        self.state.cloned()
    }

    /// Re-issues the fetch exactly once per call.
    pub fn retry(&mut self) {
        self.attempt += 1;
    }
}

/// Runs `fetch` once per mount / retry / reactive dependency change.
///
/// Signals read inside `fetch` (a page number, a category) become reactive
/// dependencies, so paginated views refetch by simply updating them.
pub fn use_remote<R, F, Fut>(fetch: F) -> Remote<R>
where
    R: Clone + PartialEq + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ApiResult<R>> + 'static,
{
    let mut state = use_signal(|| RemoteState::<R>::Loading);
    let attempt = use_signal(|| 0u32);

    let _task = use_resource(move || {
        let _generation = attempt();
        let pending = fetch();
        async move {
            state.set(RemoteState::Loading);
            state.set(RemoteState::from_result(pending.await));
        }
    });

    Remote { state, attempt }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ApiError;

    #[test]
    fn results_map_onto_states() {
        let ready = RemoteState::from_result(Ok(vec![1, 2]));
        assert_eq!(ready, RemoteState::Ready(vec![1, 2]));
        assert!(!ready.is_loading());
        assert_eq!(ready.error(), None);

        let failed = RemoteState::<Vec<i32>>::from_result(Err(ApiError::Status(503)));
        assert!(matches!(&failed, RemoteState::Failed(msg) if msg.contains("503")));
        assert!(failed.error().is_some());
    }
}
