#[cfg(any(target_arch = "wasm32", test))]
use crate::app::handlers::navigate;
use crate::app::state::AppState;
use crate::router::Route;
use siyc_core::PageId;
#[cfg(target_arch = "wasm32")]
use std::cell::RefCell;
#[cfg(target_arch = "wasm32")]
use std::rc::Rc;
use yew::prelude::*;

/// Page revealed after loading for the URL the visitor arrived on.
///
/// Payment is only reachable through registration, so a deep link to it lands on home,
/// as do unknown paths.
#[must_use]
pub fn landing_page(route: Option<Route>) -> PageId {
    route
        .and_then(Route::to_page)
        .filter(|page| *page != PageId::Payment)
        .unwrap_or(PageId::Home)
}

/// Hide the loading screen and land on the page the URL names.
#[cfg(any(target_arch = "wasm32", test))]
fn reveal(state: &AppState, route: Option<Route>) {
    state.loading_fading.set(false);
    state.loading_visible.set(false);
    let page = landing_page(route);
    navigate(state, page.as_str());
    log::info!("bootstrap: loading finished on {page}");
}

#[cfg(target_arch = "wasm32")]
async fn run_loading(state: AppState, route: Rc<RefCell<Option<Route>>>) {
    use crate::app::handlers::delay;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use siyc_core::LoadingProgress;
    use siyc_core::loading::{REVEAL_MS, SETTLE_MS, TICK_MS};

    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    let mut progress = LoadingProgress::new();
    while !progress.is_complete() {
        delay(TICK_MS).await;
        progress.tick(&mut rng);
        state.loading.set(progress);
    }
    delay(SETTLE_MS).await;
    state.loading_fading.set(true);
    delay(REVEAL_MS).await;
    let route = *route.borrow();
    reveal(&state, route);
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState, route: Option<Route>) {
    let latest = use_mut_ref(|| route);
    *latest.borrow_mut() = route;
    let state = app_state.clone();
    use_effect_with((), move |()| {
        crate::app::handlers::spawn(run_loading(state, latest));
        || {}
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_bootstrap(app_state: &AppState, route: Option<Route>) {
    let _ = (app_state, route);
}

#[cfg(target_arch = "wasm32")]
struct NetworkListeners {
    offline: wasm_bindgen::closure::Closure<dyn FnMut()>,
    online: wasm_bindgen::closure::Closure<dyn FnMut()>,
}

#[cfg(target_arch = "wasm32")]
impl NetworkListeners {
    fn attach(state: AppState) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let win = crate::dom::window()?;
        let offline = Closure::wrap(Box::new(move || {
            crate::app::handlers::show_offline(&state);
        }) as Box<dyn FnMut()>);
        let online = Closure::wrap(Box::new(|| {
            log::info!("network: connection restored");
        }) as Box<dyn FnMut()>);
        win.add_event_listener_with_callback("offline", offline.as_ref().unchecked_ref())
            .ok()?;
        win.add_event_listener_with_callback("online", online.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { offline, online })
    }

    fn detach(&self) {
        use wasm_bindgen::JsCast;

        if let Some(win) = crate::dom::window() {
            let _ = win.remove_event_listener_with_callback(
                "offline",
                self.offline.as_ref().unchecked_ref(),
            );
            let _ = win
                .remove_event_listener_with_callback("online", self.online.as_ref().unchecked_ref());
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_network_status(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        let listeners = NetworkListeners::attach(state);
        if listeners.is_none() {
            log::warn!("network: could not watch connectivity");
        }
        move || {
            if let Some(listeners) = listeners {
                listeners.detach();
            }
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_network_status(app_state: &AppState) {
    let _ = app_state;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::use_app_state;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[derive(Properties, PartialEq)]
    struct RevealProps {
        route: Option<Route>,
    }

    #[function_component(RevealHarness)]
    fn reveal_harness(props: &RevealProps) -> Html {
        let state = use_app_state();
        use_bootstrap(&state, props.route);
        use_network_status(&state);
        let revealed = use_mut_ref(|| false);
        if !*revealed.borrow() {
            *revealed.borrow_mut() = true;
            reveal(&state, props.route);
        }
        let page = state
            .navigator
            .current()
            .active()
            .map_or("none", PageId::as_str);
        html! { <span>{ format!("landed:{page}") }</span> }
    }

    fn landed(route: Option<Route>) -> String {
        block_on(LocalServerRenderer::<RevealHarness>::with_props(RevealProps { route }).render())
    }

    #[test]
    fn reveal_lands_on_home() {
        assert!(landed(Some(Route::Home)).contains("landed:home"));
    }

    #[test]
    fn reveal_keeps_deep_linked_page() {
        assert!(landed(Some(Route::Faq)).contains("landed:faq"));
        assert!(landed(Some(Route::Registration)).contains("landed:registration"));
    }

    #[test]
    fn landing_falls_back_to_home() {
        assert_eq!(landing_page(Some(Route::Activities)), PageId::Activities);
        assert_eq!(landing_page(Some(Route::Payment)), PageId::Home);
        assert_eq!(landing_page(Some(Route::NotFound)), PageId::Home);
        assert_eq!(landing_page(None), PageId::Home);
    }
}
