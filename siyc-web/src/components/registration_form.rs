use crate::components::daisy_ui::foundation::TargetCast;
use crate::components::daisy_ui::{Alert, Button, DaisyColor, Validator};
use crate::i18n::t;
use siyc_core::{AttendeeStatus, ErrorBoard, ErrorSlot, Field, RegistrationDraft};
use web_sys::{HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

pub const SUBMIT_ID: &str = "registration-submit";
pub const REGISTER_HERE_ID: &str = "register-here-btn";

/// Id of the focusable control for a field; the status group focuses its first radio.
#[must_use]
pub fn input_id(field: Field) -> String {
    match field {
        Field::Status => status_radio_id(AttendeeStatus::Single),
        other => other.key().to_string(),
    }
}

#[must_use]
pub fn status_radio_id(status: AttendeeStatus) -> String {
    format!("status-{}", status.as_str())
}

#[derive(Properties, PartialEq, Clone)]
pub struct RegistrationFormProps {
    pub draft: RegistrationDraft,
    pub board: ErrorBoard,
    pub submitting: bool,
    pub on_input: Callback<(Field, String)>,
    pub on_blur: Callback<Field>,
    pub on_enter: Callback<Field>,
    pub on_submit: Callback<()>,
    pub on_register_here: Callback<()>,
}

fn message(board: &ErrorBoard, slot: ErrorSlot) -> Option<AttrValue> {
    board.message(slot).map(|msg| AttrValue::from(msg.to_string()))
}

fn text_field(props: &RegistrationFormProps, field: Field, input_type: &'static str) -> Html {
    let id = input_id(field);
    let oninput = {
        let cb = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            cb.emit((field, input.value()));
        })
    };
    let onblur = {
        let cb = props.on_blur.clone();
        Callback::from(move |_e: FocusEvent| cb.emit(field))
    };
    let onkeydown = {
        let cb = props.on_enter.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                cb.emit(field);
            }
        })
    };
    let slot = ErrorSlot::Field(field);
    let invalid = props.board.message(slot).is_some();
    html! {
        <Validator
            label={AttrValue::from(t(&format!("registration.{}", field.key())))}
            for_input={AttrValue::from(id.clone())}
            hint_id={AttrValue::from(slot.element_id())}
            message={message(&props.board, slot)}
        >
            <input
                id={id}
                name={field.key()}
                type={input_type}
                class={classes!("input", "w-full", invalid.then_some("input-error"))}
                value={props.draft.value(field).to_string()}
                aria-invalid={invalid.to_string()}
                {oninput}
                {onblur}
                {onkeydown}
            />
        </Validator>
    }
}

fn status_group(props: &RegistrationFormProps) -> Html {
    let slot = ErrorSlot::Field(Field::Status);
    let selected = props.draft.status.as_deref();
    let radios = AttendeeStatus::ALL.into_iter().map(|status| {
        let id = status_radio_id(status);
        let onchange = {
            let cb = props.on_input.clone();
            Callback::from(move |_e: Event| cb.emit((Field::Status, status.as_str().to_string())))
        };
        html! {
            <label class="status-option flex items-center gap-2" for={id.clone()}>
                <input
                    id={id}
                    type="radio"
                    class="radio"
                    name={Field::Status.key()}
                    value={status.as_str()}
                    checked={selected == Some(status.as_str())}
                    {onchange}
                />
                <span>{ t(&format!("registration.{}", status.as_str())) }</span>
            </label>
        }
    });
    html! {
        <Validator
            label={AttrValue::from(t("registration.status"))}
            for_input={AttrValue::from(input_id(Field::Status))}
            hint_id={AttrValue::from(slot.element_id())}
            message={message(&props.board, slot)}
        >
            <div class="status-options flex gap-4" role="radiogroup">{ for radios }</div>
        </Validator>
    }
}

#[function_component(RegistrationForm)]
pub fn registration_form(props: &RegistrationFormProps) -> Html {
    let onsubmit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };
    let register_here = {
        let cb = props.on_register_here.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    let submit_label = if props.submitting {
        t("registration.submitting")
    } else {
        t("registration.submit")
    };
    html! {
        <form id="registration-form" class="registration-form flex flex-col gap-4" novalidate=true {onsubmit}>
            { text_field(props, Field::Name, "text") }
            { text_field(props, Field::Email, "email") }
            { text_field(props, Field::Phone, "tel") }
            { status_group(props) }
            <Alert
                id={AttrValue::from(ErrorSlot::General.element_id())}
                message={message(&props.board, ErrorSlot::General)}
                variant={Some(DaisyColor::Error)}
            />
            <Button
                id={AttrValue::from(SUBMIT_ID)}
                button_type={AttrValue::from("submit")}
                variant={Some(DaisyColor::Primary)}
                disabled={props.submitting}
                label={AttrValue::from(submit_label)}
            />
            <Button
                id={AttrValue::from(REGISTER_HERE_ID)}
                variant={Some(DaisyColor::Secondary)}
                outline=true
                onclick={register_here}
                label={AttrValue::from(t("registration.register_here"))}
            />
        </form>
    }
}
