use crate::components::daisy_ui::Navbar;
use crate::i18n::t;
use crate::paths::page_href;
use siyc_core::PageId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Pill to highlight; `None` while loading or on the payment page.
    pub highlighted: Option<PageId>,
}

/// Navigation pills. Clicks are resolved by the app root through `data-page`.
#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let pills = PageId::nav_pills().map(|page| {
        let active = p.highlighted == Some(page);
        let class = classes!("nav-pill", "btn", "btn-ghost", active.then_some("active"));
        html! {
            <a
                href={page_href(page)}
                class={class}
                data-page={page.as_str()}
                aria-current={active.then_some("page")}
            >
                { t(&format!("nav.{}", page.as_str())) }
            </a>
        }
    });
    let brand = html! {
        <a href={page_href(PageId::Home)} class="brand text-xl font-bold" data-page={PageId::Home.as_str()}>
            { t("brand.name") }
        </a>
    };
    html! {
        <header role="banner">
            <Navbar
                brand={brand}
                end={html! { <div class="nav-pills flex gap-1">{ for pills }</div> }}
                aria_label={AttrValue::from(t("nav.label"))}
            />
        </header>
    }
}
