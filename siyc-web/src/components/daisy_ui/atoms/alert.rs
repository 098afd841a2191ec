use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct AlertProps {
    #[prop_or_default]
    pub id: Option<f::AttrValue>,
    #[prop_or_default]
    pub message: Option<f::AttrValue>,
    #[prop_or_default]
    pub variant: Option<f::DaisyColor>,
    #[prop_or_default]
    pub class: f::Classes,
}

/// Message slot that stays in the DOM while empty so it can always be addressed by id.
#[f::function_component(Alert)]
pub fn alert(props: &AlertProps) -> f::Html {
    let mut classes = f::class_list(&["alert"], &props.class);
    if let Some(variant) = props.variant {
        classes.push(variant.class("alert"));
    }
    if props.message.is_none() {
        classes.push("hidden");
    }
    f::html! {
        <div id={f::attr_value(&props.id)} class={classes} role="alert" aria-live="polite">
            { props.message.clone().unwrap_or_default() }
        </div>
    }
}
