use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct AccordionProps {
    pub title: f::AttrValue,
    #[prop_or_default]
    pub open: bool,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

/// Collapsible FAQ entry; the browser owns the open state after the first render.
#[f::function_component(Accordion)]
pub fn accordion(props: &AccordionProps) -> f::Html {
    let class = f::class_list(&["collapse", "collapse-arrow", "faq-item"], &props.class);
    f::html! {
        <details class={class} open={props.open}>
            <summary class="collapse-title faq-question">{ props.title.clone() }</summary>
            <div class="collapse-content faq-answer">
                { for props.children.iter() }
            </div>
        </details>
    }
}
