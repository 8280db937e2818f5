//! Per-view data-fetching state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every data view follows the same contract: it fetches only once the
//! session has confirmed credentials, renders one of loading / error /
//! empty / populated, and re-fetches whenever its refresh counter is bumped
//! (after a mutation succeeds). [`use_authed_query`] wires that contract to
//! Leptos signals so pages only supply the fetch function.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use std::future::Future;

use leptos::prelude::*;
use wire::ApiError;

use crate::state::auth::AuthState;

/// Lifecycle of one fetched resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Query<T> {
    /// Not requested yet (no credentials, or server rendering).
    #[default]
    Idle,
    Loading,
    Failed(String),
    Ready(T),
}

/// What a list view should render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Error(String),
    Empty,
    Populated,
}

impl<T> Query<T> {
    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.summary()),
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    /// Classify for rendering; `is_empty` decides when a ready value counts
    /// as "nothing to show".
    pub fn view_state(&self, is_empty: impl Fn(&T) -> bool) -> ViewState {
        match self {
            Self::Idle | Self::Loading => ViewState::Loading,
            Self::Failed(message) => ViewState::Error(message.clone()),
            Self::Ready(value) if is_empty(value) => ViewState::Empty,
            Self::Ready(_) => ViewState::Populated,
        }
    }

    /// Mutate a ready value in place (optimistic local edits). Returns
    /// whether there was a value to edit.
    pub fn edit(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self {
            Self::Ready(value) => {
                f(value);
                true
            }
            _ => false,
        }
    }
}

/// Bump a refresh counter so dependent queries re-fetch.
pub fn refresh(counter: RwSignal<u64>) {
    counter.update(|n| *n = n.wrapping_add(1));
}

/// Token to fetch with, marking `query` as loading; `None` leaves it untouched.
fn begin_fetch<T>(auth: &AuthState, query: &mut Query<T>) -> Option<String> {
    let token = auth.token()?.to_owned();
    *query = Query::Loading;
    Some(token)
}

/// Fetch `T` with the session token whenever credentials appear or
/// `refresh` changes.
pub fn use_authed_query<T, F, Fut>(auth: RwSignal<AuthState>, refresh: RwSignal<u64>, fetch: F) -> RwSignal<Query<T>>
where
    T: Send + Sync + 'static,
    F: Fn(String) -> Fut + Clone + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let query = RwSignal::new(Query::Idle);
    Effect::new(move || {
        refresh.track();
        let Some(token) = auth.with(|a| query.try_update(|q| begin_fetch(a, q))).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let fetch = fetch.clone();
            leptos::task::spawn_local(async move {
                let result = fetch(token).await;
                if let Err(e) = &result {
                    log::warn!("fetch failed: {e}");
                }
                query.set(Query::from_result(result));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&fetch, token);
        }
    });
    query
}

/// Fetch `T` now and every `every` until the owning view unmounts.
///
/// Failures keep the last good value.
pub fn use_polled<T, F, Fut>(every: std::time::Duration, fetch: F) -> RwSignal<Option<T>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    let latest = RwSignal::new(None);

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            while alive_task.load(Ordering::Relaxed) {
                match fetch().await {
                    Ok(value) if alive_task.load(Ordering::Relaxed) => latest.set(Some(value)),
                    Ok(_) => break,
                    Err(e) => log::warn!("poll failed: {e}"),
                }
                gloo_timers::future::sleep(every).await;
            }
        });
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (every, fetch);
    }
    latest
}

/// Run one mutation: hold `busy` while in flight, toast the outcome, and
/// bump `counter` on success so the affected queries re-fetch.
pub fn run_mutation<T, Fut, S>(
    busy: RwSignal<bool>,
    toasts: RwSignal<crate::state::toast::ToastState>,
    counter: RwSignal<u64>,
    failure_title: &'static str,
    request: Fut,
    on_success: S,
) where
    T: 'static,
    Fut: Future<Output = Result<wire::Reply<T>, ApiError>> + 'static,
    S: FnOnce(wire::Reply<T>) + 'static,
{
    busy.set(true);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match request.await {
            Ok(reply) => finish_mutation(toasts, counter, reply, on_success),
            Err(e) => crate::state::toast::notify_api_error(toasts, failure_title, &e),
        }
        busy.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (toasts, counter, failure_title, request, on_success);
        busy.set(false);
    }
}

/// Success half of [`run_mutation`]: toast, hand the reply over, then bump
/// `counter` so every query tracking it re-fetches.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn finish_mutation<T>(
    toasts: RwSignal<crate::state::toast::ToastState>,
    counter: RwSignal<u64>,
    reply: wire::Reply<T>,
    on_success: impl FnOnce(wire::Reply<T>),
) {
    let description = if reply.message.is_empty() { "Done".to_owned() } else { reply.message.clone() };
    crate::state::toast::notify_success(toasts, "Success", &description);
    on_success(reply);
    refresh(counter);
}
