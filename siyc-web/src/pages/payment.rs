use crate::components::payment_panel::{PaymentPanel, PaymentPanelProps};
use crate::i18n::t;
use yew::prelude::*;

#[function_component(PaymentPage)]
pub fn payment_page(props: &PaymentPanelProps) -> Html {
    let props = props.clone();
    html! {
        <>
            <h2 class="section-title">{ t("payment.title") }</h2>
            <PaymentPanel ..props />
        </>
    }
}
