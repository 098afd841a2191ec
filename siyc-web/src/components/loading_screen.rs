use crate::i18n::t;
use siyc_core::LoadingProgress;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LoadingScreenProps {
    pub progress: LoadingProgress,
    pub visible: bool,
    #[prop_or_default]
    pub fading: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    if !props.visible {
        return Html::default();
    }
    let class = classes!("loading-screen", props.fading.then_some("fade-out"));
    let width = format!("width: {:.2}%", props.progress.bar_width());
    let dots = props.progress.dots().into_iter().map(|lit| {
        html! { <span class={classes!("dot", lit.then_some("active"))}></span> }
    });
    html! {
        <div id="loading-screen" class={class} role="progressbar" aria-label={t("loading.label")}>
            <h2 class="loading-title">{ t("loading.title") }</h2>
            <div class="loading-bar">
                <div id="loading-bar-fill" class="loading-bar-fill" style={width}></div>
            </div>
            <p id="loading-percentage" class="loading-percentage">{ props.progress.label() }</p>
            <div class="dots">{ for dots }</div>
        </div>
    }
}
