use crate::components::daisy_ui::{Button, DaisyColor, FileInput, SelectedFile};
use crate::i18n::t;
use siyc_core::payment::ACCEPTED_MIME_TYPES;
use siyc_core::{PaymentProof, Price};
use yew::prelude::*;

pub const PROOF_INPUT_ID: &str = "transaction-proof";
pub const COMPLETE_ID: &str = "complete-payment";

#[derive(Properties, PartialEq, Clone)]
pub struct PaymentPanelProps {
    pub price: Option<Price>,
    pub enabled: bool,
    /// Changing the key recreates the file input, clearing its selection.
    pub proof_input_key: u32,
    pub on_proof: Callback<Option<PaymentProof>>,
    pub on_complete: Callback<()>,
}

#[function_component(PaymentPanel)]
pub fn payment_panel(props: &PaymentPanelProps) -> Html {
    let on_file = {
        let cb = props.on_proof.clone();
        Callback::from(move |file: Option<SelectedFile>| {
            cb.emit(file.map(|file| PaymentProof::new(file.mime_type, file.size_bytes)));
        })
    };
    let on_complete = {
        let cb = props.on_complete.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let price = props
        .price
        .map_or_else(|| t("payment.default_price"), |price| price.to_string());
    html! {
        <div class="payment-panel flex flex-col gap-4">
            <p class="payment-amount">
                <span>{ t("payment.amount") }</span>{ " " }
                <strong id="price-display">{ price }</strong>
            </p>
            <p>{ t("payment.instructions") }</p>
            <FileInput
                key={props.proof_input_key.to_string()}
                id={AttrValue::from(PROOF_INPUT_ID)}
                label={AttrValue::from(t("payment.proof"))}
                accept={AttrValue::from(ACCEPTED_MIME_TYPES.join(","))}
                on_change={on_file}
            />
            <p class="text-sm">{ t("payment.accepted") }</p>
            <Button
                id={AttrValue::from(COMPLETE_ID)}
                variant={Some(DaisyColor::Success)}
                disabled={!props.enabled}
                onclick={on_complete}
                label={AttrValue::from(t("payment.complete"))}
            />
        </div>
    }
}
