use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct CardProps {
    #[prop_or_default]
    pub title: Option<f::AttrValue>,
    #[prop_or_default]
    pub icon: Option<f::AttrValue>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Card)]
pub fn card(props: &CardProps) -> f::Html {
    let class = f::class_list(&["card", "bg-base-100", "shadow"], &props.class);
    f::html! {
        <article class={class}>
            <div class="card-body">
                { props.title.as_ref().map(|title| f::html! {
                    <h3 class="card-title">
                        { props.icon.as_ref().map(|icon| f::html! {
                            <span aria-hidden="true">{ icon.clone() }</span>
                        }).unwrap_or_default() }
                        { title.clone() }
                    </h3>
                }).unwrap_or_default() }
                { for props.children.iter() }
            </div>
        </article>
    }
}
