use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn lookup<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, part| current.get(part))
}

fn host_plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = Array::new();
        locales.push(&wasm_bindgen::JsValue::from_str(lang));
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        rules
            .select(count)
            .as_string()
            .unwrap_or_else(|| host_plural_category(count).to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = lang;
        host_plural_category(count).to_string()
    }
}

/// Pick the variant of a plural object: the CLDR category for `count`,
/// otherwise the `_` default.
fn pick_variant(
    map: &serde_json::Map<String, Value>,
    lang: &str,
    count: Option<&str>,
) -> Option<String> {
    let by_count = count
        .and_then(|c| c.parse::<f64>().ok())
        .and_then(|n| map.get(&plural_category(lang, n)))
        .and_then(Value::as_str);
    by_count
        .or_else(|| map.get("_").and_then(Value::as_str))
        .map(str::to_string)
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => pick_variant(map, lang, args.and_then(|m| m.get("count")).copied())?,
        _ => return None,
    };

    for (k, v) in args.into_iter().flatten() {
        text = text.replace(&format!("{{{{{k}}}}}"), v);
        text = text.replace(&format!("{{{k}}}"), v);
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        lookup(&bundle.translations, key)
            .and_then(|v| render_value(v, &bundle.lang, args))
            .or_else(|| {
                lookup(&bundle.fallback, key).and_then(|v| render_value(v, &bundle.lang, args))
            })
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, substituting `{name}` (or `{{name}}`) placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| {
        log::debug!("missing translation {key}");
        key.to_string()
    })
}

/// Translate a key carrying a single `{value}` placeholder.
#[must_use]
pub fn tr_value(key: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert("value", value);
    tr(key, Some(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_selection_defaults() {
        let mut map = serde_json::Map::new();
        map.insert("one".into(), Value::String("une randonnée".into()));
        map.insert("other".into(), Value::String("{count} randonnées".into()));
        let value = Value::Object(map);
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        let one = render_value(&value, "fr", Some(&args)).unwrap();
        assert_eq!(one, "une randonnée");
        args.insert("count", "3");
        let many = render_value(&value, "fr", Some(&args)).unwrap();
        assert_eq!(many, "3 randonnées");
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Ville : {name} ({{name}})".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Brest");
        let resolved = render_value(&value, "fr", Some(&args)).unwrap();
        assert_eq!(resolved, "Ville : Brest (Brest)");
    }

    #[test]
    fn missing_keys_fall_back_to_the_key() {
        assert_eq!(t("does.not.exist"), "does.not.exist");
    }
}
