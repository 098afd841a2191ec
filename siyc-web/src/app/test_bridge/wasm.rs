use super::shared::BridgeSnapshot;
use crate::app::handlers;
use crate::app::state::AppState;
use crate::dom;
use siyc_core::{Field, PaymentProof};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use yew::prelude::*;

struct BridgeBindings {
    _state: Closure<dyn FnMut() -> JsValue>,
    _show: Closure<dyn FnMut(JsValue) -> JsValue>,
    _fill: Closure<dyn FnMut(JsValue, JsValue)>,
    _submit: Closure<dyn FnMut()>,
    _proof: Closure<dyn FnMut(JsValue, JsValue)>,
}

impl BridgeBindings {
    fn keep(&self) {
        let _ = (
            &self._state,
            &self._show,
            &self._fill,
            &self._submit,
            &self._proof,
        );
    }
}

fn build_bridge(state: &AppState) -> BridgeBindings {
    let state_state = state.clone();
    let state_fn = Closure::wrap(Box::new(move || {
        serde_wasm_bindgen::to_value(&BridgeSnapshot::from_state(&state_state))
            .unwrap_or(JsValue::NULL)
    }) as Box<dyn FnMut() -> JsValue>);

    let show_state = state.clone();
    let show = Closure::wrap(Box::new(move |value: JsValue| {
        let shown = value
            .as_string()
            .is_some_and(|page| handlers::navigate(&show_state, &page));
        JsValue::from_bool(shown)
    }) as Box<dyn FnMut(JsValue) -> JsValue>);

    let fill_state = state.clone();
    let fill = Closure::wrap(Box::new(move |key: JsValue, value: JsValue| {
        let field = key.as_string().as_deref().and_then(Field::from_key);
        if let (Some(field), Some(value)) = (field, value.as_string()) {
            handlers::field_input(&fill_state, field, value);
        }
    }) as Box<dyn FnMut(JsValue, JsValue)>);

    let submit_state = state.clone();
    let submit = Closure::wrap(Box::new(move || {
        handlers::submit_registration(&submit_state);
    }) as Box<dyn FnMut()>);

    let proof_state = state.clone();
    let proof = Closure::wrap(Box::new(move |mime: JsValue, size: JsValue| {
        let proof = mime
            .as_string()
            .zip(size.as_f64())
            .map(|(mime, size)| PaymentProof::new(mime, size.max(0.0) as u64));
        handlers::proof_change(&proof_state, proof);
    }) as Box<dyn FnMut(JsValue, JsValue)>);

    BridgeBindings {
        _state: state_fn,
        _show: show,
        _fill: fill,
        _submit: submit,
        _proof: proof,
    }
}

fn attach_bridge(bindings: &BridgeBindings) {
    let Some(window) = dom::window() else {
        return;
    };
    let bridge = js_sys::Object::new();
    let entries: [(&str, &JsValue); 5] = [
        ("state", bindings._state.as_ref().unchecked_ref()),
        ("show", bindings._show.as_ref().unchecked_ref()),
        ("fill", bindings._fill.as_ref().unchecked_ref()),
        ("submit", bindings._submit.as_ref().unchecked_ref()),
        ("proof", bindings._proof.as_ref().unchecked_ref()),
    ];
    for (name, func) in entries {
        let _ = js_sys::Reflect::set(&bridge, &JsValue::from_str(name), func);
    }
    let _ = js_sys::Reflect::set(&window, &JsValue::from_str("__siycTest"), &bridge);
    log::info!("test bridge: attached");
}

#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let bridge_handle = use_mut_ref(|| None::<BridgeBindings>);
    let installed = use_mut_ref(|| false);
    let state = app_state.clone();

    use_effect_with((), move |()| {
        let cleanup = || {};
        if *installed.borrow() {
            return cleanup;
        }
        *installed.borrow_mut() = true;
        if dom::test_mode_enabled() {
            let bindings = build_bridge(&state);
            attach_bridge(&bindings);
            bindings.keep();
            *bridge_handle.borrow_mut() = Some(bindings);
        }
        cleanup
    });
}
