use crate::components::daisy_ui::foundation as f;

/// One zero-padded countdown box, addressable by its id.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CountdownUnit {
    pub id: f::AttrValue,
    pub value: String,
    pub label: f::AttrValue,
}

#[derive(f::Properties, PartialEq, Clone)]
pub struct CountdownProps {
    pub units: Vec<CountdownUnit>,
    #[prop_or_default]
    pub class: f::Classes,
    #[prop_or_default]
    pub label: Option<f::AttrValue>,
}

#[f::function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> f::Html {
    let class = f::class_list(&["countdown-grid", "font-mono"], &props.class);
    f::html! {
        <div class={class} role="timer" aria-live="off" aria-label={f::attr_value(&props.label)}>
            { for props.units.iter().map(|unit| f::html! {
                <div class="countdown-unit">
                    <span id={unit.id.clone()} class="countdown-value">{ unit.value.clone() }</span>
                    <span class="countdown-label">{ unit.label.clone() }</span>
                </div>
            }) }
        </div>
    }
}
