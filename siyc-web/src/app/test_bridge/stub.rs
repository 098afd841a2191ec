use crate::app::state::AppState;
use yew::prelude::*;

/// Automation hooks exist only in the browser build.
#[hook]
pub fn use_test_bridge(app_state: &AppState) {
    let _ = app_state;
}

#[cfg(test)]
mod tests {
    use super::super::shared::BridgeSnapshot;
    use crate::app::state::use_app_state;
    use crate::app::test_bridge::use_test_bridge;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;
    use yew::prelude::*;

    #[function_component(TestBridgeHarness)]
    fn test_bridge_harness() -> Html {
        let state = use_app_state();
        use_test_bridge(&state);
        let snapshot = BridgeSnapshot::from_state(&state);
        html! {
            <span>{ format!("bridge:{}:{}", snapshot.page.is_none(), snapshot.payment_enabled) }</span>
        }
    }

    #[test]
    fn stub_bridge_leaves_state_untouched() {
        let html = block_on(LocalServerRenderer::<TestBridgeHarness>::new().render());
        assert!(html.contains("bridge:true:false"));
    }
}
