use crate::components::daisy_ui::Button;
use crate::i18n::t;
use yew::prelude::*;

/// Shown for URLs that match no page.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_e: MouseEvent| cb.emit(()))
    };
    html! {
        <section id="not-found" class="page active not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <Button onclick={go_home} label={AttrValue::from(t("not_found.back"))} />
        </section>
    }
}
