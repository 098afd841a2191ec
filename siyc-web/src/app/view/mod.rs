use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::loading_screen::LoadingScreen;
use crate::components::popup::{ConfirmationPopup, PaymentSuccess};
use crate::dom;
use crate::pages::PageSection;
use crate::pages::activities::ActivitiesPage;
use crate::pages::faq::FaqPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFound;
use crate::pages::payment::PaymentPage;
use crate::pages::registration::RegistrationPage;
use crate::router::Route;
use siyc_core::PageId;
use yew::prelude::*;
use yew_router::prelude::Navigator;

fn page_body(state: &AppState, handlers: &AppHandlers, page: PageId) -> Html {
    match page {
        PageId::Home => html! { <HomePage /> },
        PageId::Activities => html! { <ActivitiesPage /> },
        PageId::Faq => html! { <FaqPage /> },
        PageId::Registration => html! {
            <RegistrationPage
                draft={state.draft.view().clone()}
                board={state.board.view().clone()}
                submitting={*state.submitting}
                on_input={handlers.field_input.clone()}
                on_blur={handlers.field_blur.clone()}
                on_enter={handlers.field_enter.clone()}
                on_submit={handlers.submit.clone()}
                on_register_here={handlers.register_here.clone()}
            />
        },
        PageId::Payment => html! {
            <PaymentPage
                price={state.session.view().price()}
                enabled={state.payment.view().is_enabled()}
                proof_input_key={*state.proof_input_key}
                on_proof={handlers.proof_change.clone()}
                on_complete={handlers.complete_payment.clone()}
            />
        },
    }
}

fn not_found_view(handlers: &AppHandlers, navigator: Option<Navigator>) -> Html {
    let on_go_home = {
        let go_home = handlers.go_home.clone();
        Callback::from(move |()| {
            if let Some(nav) = navigator.as_ref() {
                nav.push(&Route::Home);
            }
            go_home.emit(());
        })
    };
    html! { <NotFound {on_go_home} /> }
}

pub fn render_app(state: &AppState, route: Option<&Route>, navigator: Option<Navigator>) -> Html {
    let handlers = AppHandlers::new(state);
    let page_nav = *state.navigator.view();

    // The not-found view waits for the loading screen like every other page.
    let off_route = state.booted() && matches!(route, Some(Route::NotFound));

    // Single delegated handler for every `data-page` control.
    let onclick = {
        let navigate = handlers.navigate.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(target) = dom::page_target(&e) else {
                return;
            };
            e.prevent_default();
            if off_route
                && let (Some(nav), Some(page)) = (navigator.as_ref(), PageId::parse(&target))
            {
                nav.push(&Route::from_page(page));
            }
            navigate.emit(target);
        })
    };

    let main_view = if off_route {
        not_found_view(&handlers, navigator)
    } else {
        page_nav
            .visibility()
            .map(|(page, active)| {
                html! {
                    <PageSection key={page.as_str()} {page} {active}>
                        { page_body(state, &handlers, page) }
                    </PageSection>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div id="app" class="app-root" {onclick}>
            <LoadingScreen
                progress={*state.loading}
                visible={*state.loading_visible}
                fading={*state.loading_fading}
            />
            <Header highlighted={page_nav.highlighted()} />
            <main id="main" role="main">
                { main_view }
            </main>
            <ConfirmationPopup open={*state.confirmation_open} />
            <PaymentSuccess
                open={*state.payment_success_open}
                status={state.session.view().last_status()}
            />
            <Footer />
        </div>
    }
}
