use super::*;

#[test]
fn idle_and_loading_render_as_loading() {
    assert_eq!(Query::<Vec<u8>>::Idle.view_state(Vec::is_empty), ViewState::Loading);
    assert_eq!(Query::<Vec<u8>>::Loading.view_state(Vec::is_empty), ViewState::Loading);
    assert!(Query::<Vec<u8>>::default().is_loading());
}

#[test]
fn failure_carries_summary_message() {
    let query: Query<Vec<u8>> = Query::from_result(Err(ApiError::Network("boom".to_owned())));
    assert_eq!(
        query.view_state(Vec::is_empty),
        ViewState::Error("Unable to connect to server. Please try again.".to_owned())
    );
}

#[test]
fn ready_splits_empty_and_populated() {
    let empty: Query<Vec<u8>> = Query::from_result(Ok(Vec::new()));
    let full: Query<Vec<u8>> = Query::from_result(Ok(vec![1]));
    assert_eq!(empty.view_state(Vec::is_empty), ViewState::Empty);
    assert_eq!(full.view_state(Vec::is_empty), ViewState::Populated);
    assert_eq!(full.ready(), Some(&vec![1]));
}

#[test]
fn edit_only_touches_ready_values() {
    let mut ready: Query<Vec<u8>> = Query::Ready(vec![1, 2]);
    assert!(ready.edit(|v| v.retain(|x| *x != 1)));
    assert_eq!(ready, Query::Ready(vec![2]));

    let mut loading: Query<Vec<u8>> = Query::Loading;
    assert!(!loading.edit(Vec::clear));
    assert_eq!(loading, Query::Loading);
}

// =============================================================
// Refresh after mutations
// =============================================================

fn signed_in() -> AuthState {
    AuthState::from_session(wire::SessionState::authenticated(wire::Session {
        token: "tok".to_owned(),
        user: wire::User { id: "u1".to_owned(), ..wire::User::default() },
    }))
}

#[test]
fn begin_fetch_without_credentials_stays_idle() {
    let mut query: Query<Vec<u8>> = Query::Idle;
    assert_eq!(begin_fetch(&AuthState::default(), &mut query), None);
    assert_eq!(query, Query::Idle);

    let unauthenticated = AuthState::from_session(wire::SessionState::unauthenticated());
    assert_eq!(begin_fetch(&unauthenticated, &mut query), None);
    assert_eq!(query, Query::Idle);
}

#[test]
fn begin_fetch_with_credentials_marks_loading() {
    let mut query: Query<Vec<u8>> = Query::Ready(vec![1]);
    assert_eq!(begin_fetch(&signed_in(), &mut query), Some("tok".to_owned()));
    assert_eq!(query, Query::Loading);
}

#[test]
fn refresh_bumps_counter() {
    let owner = Owner::new();
    owner.with(|| {
        let counter = RwSignal::new(0_u64);
        refresh(counter);
        refresh(counter);
        assert_eq!(counter.get_untracked(), 2);

        counter.set(u64::MAX);
        refresh(counter);
        assert_eq!(counter.get_untracked(), 0);
    });
}

#[test]
fn tracked_reader_reruns_after_refresh() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let owner = Owner::new();
    owner.with(|| {
        let counter = RwSignal::new(0_u64);
        let runs = Arc::new(AtomicUsize::new(0));
        let seen = {
            let runs = runs.clone();
            Memo::new(move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                counter.get()
            })
        };

        assert_eq!(seen.get_untracked(), 0);
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        refresh(counter);
        assert_eq!(seen.get_untracked(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 2);
    });
}

#[test]
fn finished_mutation_toasts_applies_reply_and_refreshes() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(crate::state::toast::ToastState::default());
        let counter = RwSignal::new(0_u64);
        let list = RwSignal::new(Query::Ready(vec![1_u8, 2, 3]));

        let reply = wire::Reply { message: "Account closed".to_owned(), data: 2_u8 };
        finish_mutation(toasts, counter, reply, move |reply| {
            list.update(|q| {
                q.edit(|items| items.retain(|i| *i != reply.data));
            });
        });

        assert_eq!(list.get_untracked(), Query::Ready(vec![1, 3]));
        assert_eq!(counter.get_untracked(), 1);
        toasts.with_untracked(|t| {
            assert_eq!(t.items.len(), 1);
            assert_eq!(t.items[0].title, "Success");
            assert_eq!(t.items[0].description, "Account closed");
        });
    });
}

#[test]
fn finished_mutation_without_message_says_done() {
    let owner = Owner::new();
    owner.with(|| {
        let toasts = RwSignal::new(crate::state::toast::ToastState::default());
        let counter = RwSignal::new(0_u64);
        finish_mutation(toasts, counter, wire::Reply { message: String::new(), data: () }, |_| {});
        toasts.with_untracked(|t| assert_eq!(t.items[0].description, "Done"));
    });
}
