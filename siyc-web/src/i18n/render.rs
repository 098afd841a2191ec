use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();
    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Translate a key without substitution. Unknown keys render as the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, replacing `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key).and_then(|v| render_value(v, args))
    })
    .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_keys_resolve() {
        assert_eq!(t("nav.faq"), "FAQ");
        assert_eq!(t("registration.submitting"), "Submitting...");
    }

    #[test]
    fn missing_keys_fall_back_to_key() {
        assert_eq!(t("nav.pricing"), "nav.pricing");
        assert_eq!(t("nav"), "nav");
    }

    #[test]
    fn interpolation_replaces_placeholders() {
        let mut args = BTreeMap::new();
        args.insert("single", "₹799");
        args.insert("couple", "₹1400");
        assert_eq!(
            tr("faq.cost.a", Some(&args)),
            "₹799 per person, ₹1400 per couple."
        );
    }
}
