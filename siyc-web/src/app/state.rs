use crate::config::api_config;
use crate::dom::FetchTransport;
use siyc_core::{
    ErrorBoard, LoadingProgress, PageNavigator, PaymentGate, RegistrationClient, RegistrationDesk,
    RegistrationDraft, SessionState,
};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// State mutated from timers and async tasks as well as from renders.
///
/// The `RefCell` holds the authoritative value so delayed callbacks never act on a stale
/// snapshot; the state handle mirrors it to trigger re-renders.
pub struct SharedState<T> {
    cell: Rc<RefCell<T>>,
    view: UseStateHandle<T>,
}

impl<T> Clone for SharedState<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
            view: self.view.clone(),
        }
    }
}

impl<T: Clone + 'static> SharedState<T> {
    /// Value as of the last render.
    #[must_use]
    pub fn view(&self) -> &T {
        &self.view
    }

    /// Latest value, including changes not yet rendered.
    #[must_use]
    pub fn current(&self) -> T {
        self.cell.borrow().clone()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let (out, snapshot) = {
            let mut value = self.cell.borrow_mut();
            let out = f(&mut value);
            (out, value.clone())
        };
        self.view.set(snapshot);
        out
    }
}

#[hook]
pub fn use_shared_state<T, F>(init: F) -> SharedState<T>
where
    T: Clone + 'static,
    F: FnOnce() -> T,
{
    let cell = use_mut_ref(init);
    let seed = Rc::clone(&cell);
    let view = use_state(move || seed.borrow().clone());
    SharedState { cell, view }
}

pub type Desk = RegistrationDesk<FetchTransport>;

#[derive(Clone)]
pub struct AppState {
    pub navigator: SharedState<PageNavigator>,
    pub session: SharedState<SessionState>,
    pub board: SharedState<ErrorBoard>,
    pub draft: SharedState<RegistrationDraft>,
    pub payment: SharedState<PaymentGate>,
    pub loading: UseStateHandle<LoadingProgress>,
    /// `false` once the loading screen has faded out.
    pub loading_visible: UseStateHandle<bool>,
    pub loading_fading: UseStateHandle<bool>,
    pub submitting: UseStateHandle<bool>,
    pub confirmation_open: UseStateHandle<bool>,
    pub payment_success_open: UseStateHandle<bool>,
    /// Bumped to reset the proof file input after a rejected file.
    pub proof_input_key: UseStateHandle<u32>,
    pub desk: Rc<Desk>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let desk = use_memo((), |()| {
        RegistrationDesk::new(RegistrationClient::new(api_config(), FetchTransport))
    });
    AppState {
        navigator: use_shared_state(PageNavigator::new),
        session: use_shared_state(SessionState::default),
        board: use_shared_state(ErrorBoard::default),
        draft: use_shared_state(RegistrationDraft::default),
        payment: use_shared_state(PaymentGate::default),
        loading: use_state(LoadingProgress::new),
        loading_visible: use_state(|| true),
        loading_fading: use_state(|| false),
        submitting: use_state(|| false),
        confirmation_open: use_state(|| false),
        payment_success_open: use_state(|| false),
        proof_input_key: use_state(|| 0_u32),
        desk,
    }
}

impl AppState {
    #[must_use]
    pub fn booted(&self) -> bool {
        !*self.loading_visible
    }
}
