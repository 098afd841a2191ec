use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ValidatorProps {
    pub label: f::AttrValue,
    /// Id of the wrapped control, used by the `<label for>`.
    pub for_input: f::AttrValue,
    /// Id of the message element.
    pub hint_id: f::AttrValue,
    #[prop_or_default]
    pub message: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Form control wrapper with an inline error message underneath.
#[f::function_component(Validator)]
pub fn validator(props: &ValidatorProps) -> f::Html {
    let mut class = f::class_list(&["form-group", "validator"], &props.class);
    let hint_class = if props.message.is_some() {
        class.push("input-error");
        "error-message validator-hint text-error show"
    } else {
        "error-message validator-hint"
    };
    f::html! {
        <div class={class}>
            <label class="label" for={props.for_input.clone()}>{ props.label.clone() }</label>
            { for props.children.iter() }
            <p id={props.hint_id.clone()} class={hint_class} aria-live="polite">
                { props.message.clone().unwrap_or_default() }
            </p>
        </div>
    }
}
