use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub outline: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub button_type: Option<f::AttrValue>,
    /// Target page for the delegated navigation handler.
    #[prop_or_default]
    pub data_page: Option<f::AttrValue>,
    #[prop_or_default]
    pub onclick: f::Callback<f::MouseEvent>,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Button)]
pub fn button(props: &ButtonProps) -> f::Html {
    let mut classes = f::class_list(&["btn"], &props.class);
    if let Some(variant) = props.variant {
        classes.push(variant.class("btn"));
    }
    if props.outline {
        classes.push("btn-outline");
    }
    let button_type = props.button_type.clone().unwrap_or_else(|| "button".into());
    f::html! {
        <button
            id={f::attr_value(&props.id)}
            type={button_type}
            class={classes}
            disabled={props.disabled}
            data-page={f::attr_value(&props.data_page)}
            onclick={props.onclick.clone()}
        >
            { if props.children.is_empty() {
                props.label.clone().map(|l| f::html!{ { l } }).unwrap_or_default()
            } else {
                props.children.iter().collect::<f::Html>()
            }}
        </button>
    }
}
