use crate::components::registration_form::{RegistrationForm, RegistrationFormProps};
use crate::i18n::t;
use yew::prelude::*;

#[function_component(RegistrationPage)]
pub fn registration_page(props: &RegistrationFormProps) -> Html {
    let props = props.clone();
    html! {
        <>
            <h2 class="section-title">{ t("registration.title") }</h2>
            <RegistrationForm ..props />
        </>
    }
}
