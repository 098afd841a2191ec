//! Page sections. Every section stays mounted; only the active one is shown.

pub mod activities;
pub mod faq;
pub mod home;
pub mod not_found;
pub mod payment;
pub mod registration;

use siyc_core::PageId;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PageSectionProps {
    pub page: PageId,
    pub active: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(PageSection)]
pub fn page_section(props: &PageSectionProps) -> Html {
    let class = classes!("page", props.active.then_some("active"));
    html! {
        <section id={props.page.as_str()} class={class} hidden={!props.active}>
            { for props.children.iter() }
        </section>
    }
}
