use serde_json::Value;
use std::cell::RefCell;

const EN: &str = include_str!("../../i18n/en.json");

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
}

fn load_translations(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::error!("i18n: bundled translations are not valid JSON: {err}");
        Value::Object(serde_json::Map::new())
    })
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(I18nBundle {
        lang: "en".to_string(),
        translations: load_translations(EN),
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Active language code. Only English ships today.
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_bundle_parses() {
        with_bundle(|bundle| {
            assert_eq!(bundle.lang, "en");
            assert!(bundle.translations.get("registration").is_some());
        });
    }
}
