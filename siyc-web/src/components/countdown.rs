use crate::components::daisy_ui::{Countdown, CountdownUnit};
use crate::i18n::t;
use siyc_core::{Remaining, remaining};
use yew::prelude::*;

fn now_ms() -> i64 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let now = js_sys::Date::now() as i64;
        now
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
    }
}

#[must_use]
pub fn countdown_units(left: Remaining) -> Vec<CountdownUnit> {
    vec![
        CountdownUnit {
            id: "hours".into(),
            value: left.hours_label(),
            label: t("home.hours").into(),
        },
        CountdownUnit {
            id: "minutes".into(),
            value: left.minutes_label(),
            label: t("home.minutes").into(),
        },
        CountdownUnit {
            id: "seconds".into(),
            value: left.seconds_label(),
            label: t("home.seconds").into(),
        },
    ]
}

/// Live countdown to the event start, refreshed once per second.
#[function_component(EventCountdown)]
pub fn event_countdown() -> Html {
    let left = use_state(|| remaining(now_ms()));
    #[cfg(target_arch = "wasm32")]
    {
        let left = left.clone();
        use_effect_with((), move |()| {
            let ticker = crate::dom::Interval::every(siyc_core::countdown::TICK_MS, move || {
                left.set(remaining(now_ms()));
            });
            if let Err(err) = &ticker {
                log::error!("countdown: {err}");
            }
            move || drop(ticker)
        });
    }
    html! {
        <Countdown units={countdown_units(*left)} label={AttrValue::from(t("home.countdown_label"))} />
    }
}
