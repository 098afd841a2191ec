use crate::components::daisy_ui::Modal;
use crate::i18n::{t, tr};
use siyc_core::AttendeeStatus;
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationPopupProps {
    pub open: bool,
}

/// Shown for a moment after a successful registration.
#[function_component(ConfirmationPopup)]
pub fn confirmation_popup(props: &ConfirmationPopupProps) -> Html {
    html! {
        <Modal
            id="success-popup"
            open={props.open}
            title={t("registration.success_title")}
            description={AttrValue::from(t("registration.success_body"))}
        />
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct PaymentSuccessProps {
    pub open: bool,
    pub status: Option<AttendeeStatus>,
}

#[function_component(PaymentSuccess)]
pub fn payment_success(props: &PaymentSuccessProps) -> Html {
    let status = props.status.map_or("", AttendeeStatus::as_str);
    let mut args = BTreeMap::new();
    args.insert("status", status);
    html! {
        <Modal
            id="payment-success"
            open={props.open}
            title={t("payment.success_title")}
            description={AttrValue::from(tr("payment.success_body", Some(&args)))}
        />
    }
}
