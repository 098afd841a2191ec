use crate::components::daisy_ui::Accordion;
use crate::i18n::{t, tr};
use siyc_core::AttendeeStatus;
use std::collections::BTreeMap;
use yew::prelude::*;

const QUESTIONS: [&str; 3] = ["who", "cost", "pay"];

fn answer(key: &str) -> String {
    if key != "cost" {
        return t(&format!("faq.{key}.a"));
    }
    let single = AttendeeStatus::Single.price().to_string();
    let couple = AttendeeStatus::Couple.price().to_string();
    let mut args = BTreeMap::new();
    args.insert("single", single.as_str());
    args.insert("couple", couple.as_str());
    tr("faq.cost.a", Some(&args))
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    let items = QUESTIONS.iter().map(|key| {
        html! {
            <Accordion title={t(&format!("faq.{key}.q"))}>
                <p>{ answer(key) }</p>
            </Accordion>
        }
    });
    html! {
        <>
            <h2 class="section-title">{ t("faq.title") }</h2>
            <div class="faq-list flex flex-col gap-2">{ for items }</div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::answer;

    #[test]
    fn cost_answer_lists_both_prices() {
        let text = answer("cost");
        assert!(text.contains("₹799"));
        assert!(text.contains("₹1400"));
    }
}
