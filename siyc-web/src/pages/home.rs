use crate::components::countdown::EventCountdown;
use crate::components::daisy_ui::{Button, DaisyColor, Hero};
use crate::i18n::t;
use siyc_core::PageId;
use yew::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let actions = html! {
        <>
            <Button
                variant={Some(DaisyColor::Primary)}
                data_page={AttrValue::from(PageId::Registration.as_str())}
                label={AttrValue::from(t("home.cta_register"))}
            />
            <Button
                variant={Some(DaisyColor::Secondary)}
                outline=true
                data_page={AttrValue::from(PageId::Activities.as_str())}
                label={AttrValue::from(t("home.cta_activities"))}
            />
        </>
    };
    html! {
        <Hero title={t("home.title")} subtitle={AttrValue::from(t("home.subtitle"))} actions={actions}>
            <EventCountdown />
        </Hero>
    }
}
