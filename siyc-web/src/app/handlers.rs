use crate::app::state::AppState;
use crate::dom;
use siyc_core::{
    CONFIRMATION_DELAY_MS, COMPLETION_DELAY_MS, ErrorSlot, Field, GENERAL_ERROR_TTL_MS, NavEffect,
    OFFLINE_MESSAGE, PageId, PaymentError, PaymentProof, SubmitOutcome, Transition,
    validate_field,
};
use yew::prelude::*;

pub const GOOGLE_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSdfuBQlYgeuR8Sf5imMtmNniC41uudNutcf09Vz9dir0VmeGg/viewform?usp=dialog";

pub(crate) fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(task);
    #[cfg(not(target_arch = "wasm32"))]
    {
        drop(task);
        log::debug!("handlers: async task skipped outside the browser");
    }
}

#[allow(clippy::future_not_send)]
pub(crate) async fn delay(ms: u32) {
    if let Err(err) = dom::sleep_ms(ms).await {
        log::error!("timer failed: {err}");
    }
}

/// Show a page by id. Returns `false` when the id is unknown and nothing changed.
pub fn navigate(state: &AppState, target: &str) -> bool {
    match state.navigator.update(|nav| nav.show(target)) {
        Ok(transition) => {
            apply_effects(state, &transition);
            true
        }
        Err(_) => false,
    }
}

fn apply_effects(state: &AppState, transition: &Transition) {
    for effect in &transition.effects {
        match effect {
            NavEffect::ScrollToTop => {
                #[cfg(target_arch = "wasm32")]
                dom::scroll_to_top();
            }
            NavEffect::EnterPayment => {
                let price = state.session.current().price();
                log::debug!("payment: showing price {price:?}");
            }
        }
    }
}

pub fn field_input(state: &AppState, field: Field, value: String) {
    state.draft.update(|draft| draft.set(field, value));
    state.board.update(|board| board.clear(ErrorSlot::Field(field)));
}

pub fn field_blur(state: &AppState, field: Field) {
    let draft = state.draft.current();
    let outcome = validate_field(field, &draft);
    state.board.update(|board| board.apply_field(field, outcome));
}

/// Enter inside a field moves focus onward instead of submitting.
pub fn focus_next(field: Field) {
    if let Some(next) = field.next() {
        dom::focus_element(&crate::components::registration_form::input_id(next));
    }
}

pub fn submit_registration(state: &AppState) {
    if state.desk.is_submitting() {
        log::warn!("registration: submit ignored, a request is already in flight");
        return;
    }
    let state = state.clone();
    spawn(async move {
        let draft = state.draft.current();
        state.submitting.set(true);
        let outcome = state.desk.submit(&draft).await;
        state.submitting.set(state.desk.is_submitting());
        let banner = state.board.update(|board| {
            outcome.present(board);
            board.message(ErrorSlot::General).map(str::to_owned)
        });
        state.session.update(|session| outcome.record_into(session));

        match outcome {
            SubmitOutcome::Registered { .. } => {
                state.confirmation_open.set(true);
                delay(CONFIRMATION_DELAY_MS).await;
                state.confirmation_open.set(false);
                navigate(&state, PageId::Payment.as_str());
            }
            SubmitOutcome::Failed(_) => {
                delay(GENERAL_ERROR_TTL_MS).await;
                if let Some(banner) = banner {
                    state
                        .board
                        .update(|board| board.clear_if_showing(ErrorSlot::General, &banner));
                }
            }
            SubmitOutcome::Invalid(_) | SubmitOutcome::Busy => {}
        }
    });
}

pub fn show_offline(state: &AppState) {
    log::warn!("network: connection lost");
    state
        .board
        .update(|board| board.show(ErrorSlot::General, OFFLINE_MESSAGE));
}

pub fn register_here() {
    dom::open_in_new_tab(GOOGLE_FORM_URL);
}

pub fn proof_change(state: &AppState, proof: Option<PaymentProof>) {
    let Some(proof) = proof else {
        state.payment.update(siyc_core::PaymentGate::clear);
        return;
    };
    if let Err(err) = state.payment.update(|gate| gate.attach(proof)) {
        dom::alert(&err.to_string());
        state.proof_input_key.set(*state.proof_input_key + 1);
    }
}

pub fn complete_payment(state: &AppState) {
    match state.payment.update(siyc_core::PaymentGate::complete) {
        Ok(()) => {
            let state = state.clone();
            state.payment_success_open.set(true);
            spawn(async move {
                delay(COMPLETION_DELAY_MS).await;
                state.payment_success_open.set(false);
                navigate(&state, PageId::Home.as_str());
            });
        }
        Err(PaymentError::MissingProof) => dom::alert(&PaymentError::MissingProof.to_string()),
        Err(PaymentError::AlreadyCompleted) => {
            log::debug!("payment: completion already recorded");
        }
    }
}

/// Callbacks handed down to pages and components.
#[derive(Clone)]
pub struct AppHandlers {
    pub navigate: Callback<String>,
    pub go_home: Callback<()>,
    pub field_input: Callback<(Field, String)>,
    pub field_blur: Callback<Field>,
    pub field_enter: Callback<Field>,
    pub submit: Callback<()>,
    pub register_here: Callback<()>,
    pub proof_change: Callback<Option<PaymentProof>>,
    pub complete_payment: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            navigate: {
                let state = state.clone();
                Callback::from(move |target: String| {
                    navigate(&state, &target);
                })
            },
            go_home: {
                let state = state.clone();
                Callback::from(move |()| {
                    navigate(&state, PageId::Home.as_str());
                })
            },
            field_input: {
                let state = state.clone();
                Callback::from(move |(field, value): (Field, String)| {
                    field_input(&state, field, value);
                })
            },
            field_blur: {
                let state = state.clone();
                Callback::from(move |field: Field| field_blur(&state, field))
            },
            field_enter: Callback::from(focus_next),
            submit: {
                let state = state.clone();
                Callback::from(move |()| submit_registration(&state))
            },
            register_here: Callback::from(|()| register_here()),
            proof_change: {
                let state = state.clone();
                Callback::from(move |proof: Option<PaymentProof>| proof_change(&state, proof))
            },
            complete_payment: {
                let state = state.clone();
                Callback::from(move |()| complete_payment(&state))
            },
        }
    }
}
