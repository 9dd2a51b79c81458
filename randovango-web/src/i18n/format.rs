#[cfg(target_arch = "wasm32")]
use crate::i18n::bundle::with_bundle;
#[cfg(target_arch = "wasm32")]
use js_sys::{Function, Intl, Object, Reflect};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

/// Format a number in the current locale with at most `digits` fractional
/// digits.
#[must_use]
pub fn fmt_decimal(num: f64, digits: u8) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let opts = Object::new();
        let _ = Reflect::set(
            &opts,
            &JsValue::from_str("maximumFractionDigits"),
            &JsValue::from_f64(f64::from(digits)),
        );
        with_bundle(|bundle| intl_format(&bundle.lang, &opts, num))
            .unwrap_or_else(|| host_decimal(num, digits))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        host_decimal(num, digits)
    }
}

fn host_decimal(num: f64, digits: u8) -> String {
    let text = format!("{num:.prec$}", prec = usize::from(digits));
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

#[cfg(target_arch = "wasm32")]
fn intl_format(lang: &str, opts: &Object, num: f64) -> Option<String> {
    let locales = js_sys::Array::new();
    locales.push(&JsValue::from_str(lang));
    let nf = Intl::NumberFormat::new(&locales, opts);
    let format_fn: Function = nf.format();
    format_fn
        .call1(&nf, &JsValue::from_f64(num))
        .ok()
        .and_then(|v| v.as_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn decimal_formatter_trims_trailing_zeros() {
        assert_eq!(fmt_decimal(8.0, 1), "8");
        assert_eq!(fmt_decimal(8.46, 1), "8.5");
        assert_eq!(fmt_decimal(4.25, 0), "4");
    }
}
