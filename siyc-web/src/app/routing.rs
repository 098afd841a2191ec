#[cfg(target_arch = "wasm32")]
use crate::app::handlers::navigate;
#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(any(target_arch = "wasm32", test))]
use siyc_core::navigator::PageId;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
/// Route to push after the active page changed, if the URL does not already match.
///
/// The first page shown on an unknown path leaves the URL alone so the not-found view stays.
fn next_route_for_page(
    previous: Option<PageId>,
    page: Option<PageId>,
    current_route: Option<&Route>,
) -> Option<Route> {
    let new_route = Route::from_page(page?);
    if previous.is_none() && current_route == Some(&Route::NotFound) {
        return None;
    }
    (Some(&new_route) != current_route).then_some(new_route)
}

#[cfg(any(target_arch = "wasm32", test))]
/// Page to show after the URL changed. Ignored while the loading screen is up.
fn next_page_for_route(active: Option<PageId>, route: Option<Route>) -> Option<PageId> {
    let active = active?;
    let requested = route.and_then(Route::to_page)?;
    (requested != active).then_some(requested)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_page(
    state: &AppState,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let active = state.navigator.view().active();
    let previous = use_mut_ref(|| None::<PageId>);
    // Keyed on the page only, so an unknown URL keeps showing the not-found view.
    use_effect_with(active, move |active| {
        let before = previous.replace(*active);
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_page(before, *active, active_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_page_with_route(state: &AppState, route: Option<Route>) {
    let state = state.clone();
    use_effect_with(route, move |route| {
        if let Some(page) = next_page_for_route(state.navigator.current().active(), *route) {
            navigate(&state, page.as_str());
        }
    });
}
