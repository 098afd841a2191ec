use crate::components::daisy_ui::foundation as f;

#[derive(f::Properties, PartialEq, Clone)]
pub struct HeroProps {
    pub title: f::AttrValue,
    #[prop_or_default]
    pub subtitle: Option<f::AttrValue>,
    #[prop_or_default]
    pub actions: Option<f::Html>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub children: f::Children,
}

#[f::function_component(Hero)]
pub fn hero(props: &HeroProps) -> f::Html {
    let class = f::class_list(&["hero", "rounded-box", "p-6"], &props.class);
    f::html! {
        <div class={class}>
            <div class="hero-content flex-col text-center gap-6">
                <h1 class="text-4xl font-bold">{ props.title.clone() }</h1>
                { props.subtitle.as_ref().map(|sub| f::html! { <p class="hero-subtitle">{ sub.clone() }</p> }).unwrap_or_default() }
                { for props.children.iter() }
                { props.actions.clone().map(|actions| f::html! {
                    <div class="hero-actions flex gap-4">{ actions }</div>
                }).unwrap_or_default() }
            </div>
        </div>
    }
}
