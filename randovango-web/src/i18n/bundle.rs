use crate::i18n::locales::{is_supported, load_translations};
use randovango_core::CalendarNames;
use serde_json::Value;
use std::cell::RefCell;

/// Language used when nothing has been saved.
pub const DEFAULT_LANG: &str = "fr";
/// Bundle consulted for keys the active language lacks.
const FALLBACK_LANG: &str = "en";
/// `localStorage` key holding the chosen language.
pub const LOCALE_STORAGE_KEY: &str = "randovango.locale";

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(FALLBACK_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> I18nBundle {
    let empty = Value::Object(serde_json::Map::new());
    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: empty.clone(),
        fallback: empty,
    }
}

fn saved_lang() -> String {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .unwrap_or_else(|| DEFAULT_LANG.to_string())
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        DEFAULT_LANG.to_string()
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new({
        let initial = saved_lang();
        build_bundle(&initial)
            .or_else(|| build_bundle(DEFAULT_LANG))
            .unwrap_or_else(empty_bundle)
    });
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

fn replace_bundle(bundle: I18nBundle) {
    CURRENT.with(|cell| cell.replace(bundle));
}

/// Set the current language
///
/// Unknown codes are ignored. In the browser the `<html lang>` attribute is
/// updated and the choice is persisted to localStorage.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported language {lang}");
        return;
    };
    replace_bundle(bundle);
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element()) {
            let _ = el.set_attribute("lang", lang);
        }
        if let Some(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, lang);
        }
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

/// Weekday and month names for forecast day labels in the active language.
#[must_use]
pub fn calendar_names() -> CalendarNames {
    with_bundle(|bundle| CalendarNames::for_lang(&bundle.lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("en").expect("bundle should load");
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
    }

    #[test]
    fn unknown_locales_are_rejected() {
        assert!(build_bundle("xx").is_none());
        set_lang("xx");
        assert_eq!(current_lang(), DEFAULT_LANG);
    }

    #[test]
    fn calendar_follows_language() {
        set_lang("en");
        assert_eq!(calendar_names(), CalendarNames::ENGLISH);
        set_lang("fr");
        assert_eq!(calendar_names(), CalendarNames::FRENCH);
    }
}
