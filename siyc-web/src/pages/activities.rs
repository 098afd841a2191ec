use crate::components::daisy_ui::Card;
use crate::i18n::t;
use yew::prelude::*;

const ITEMS: [(&str, &str); 4] = [
    ("sessions", "🎤"),
    ("sports", "⚽"),
    ("workshops", "📚"),
    ("evening", "🌙"),
];

#[function_component(ActivitiesPage)]
pub fn activities_page() -> Html {
    let cards = ITEMS.iter().map(|(key, icon)| {
        html! {
            <Card
                title={AttrValue::from(t(&format!("activities.items.{key}")))}
                icon={AttrValue::from(*icon)}
                class={classes!("activity-card")}
            />
        }
    });
    html! {
        <>
            <h2 class="section-title">{ t("activities.title") }</h2>
            <div class="activities-grid grid gap-4">{ for cards }</div>
        </>
    }
}
