use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct ModalProps {
    pub id: f::AttrValue,
    pub open: bool,
    pub title: f::AttrValue,
    #[prop_or_default]
    pub description: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Timed status popup. It has no close control; the owner hides it by flipping `open`.
#[f::function_component(Modal)]
pub fn modal(props: &ModalProps) -> f::Html {
    let mut class = f::class_list(&["modal", "popup"], &props.class);
    if props.open {
        class.push("modal-open");
        class.push("show");
    }
    f::html! {
        <div id={props.id.clone()} class={class} role="dialog" aria-modal="true" aria-hidden={(!props.open).to_string()} aria-label={props.title.clone()}>
            <div class="modal-box text-center">
                <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                { props.description.as_ref().map(|d| f::html!{ <p class="py-2">{ d.clone() }</p> }).unwrap_or_default() }
                { for props.children.iter() }
            </div>
        </div>
    }
}
