//! Translation bundles embedded at compile time.
//!
//! Keys are dotted paths into the JSON bundle (`fork.left`). Lookups fall
//! back to English, then to the key itself.

use serde_json::Value;
use std::cell::RefCell;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LOCALES: &[LocaleMeta] = &[
    LocaleMeta {
        code: "en",
        name: "English",
    },
    LocaleMeta {
        code: "tl",
        name: "Tagalog",
    },
];

fn locale_source(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some(include_str!("../i18n/en.json")),
        "tl" => Some(include_str!("../i18n/tl.json")),
        _ => None,
    }
}

fn load_translations(lang: &str) -> Option<Value> {
    let source = locale_source(lang)?;
    match serde_json::from_str(source) {
        Ok(value) => Some(value),
        Err(err) => {
            log::error!("invalid {lang} translation bundle: {err}");
            None
        }
    }
}

struct Bundle {
    lang: String,
    translations: Value,
    fallback: Value,
}

fn build_bundle(lang: &str) -> Option<Bundle> {
    let fallback = load_translations("en")?;
    let translations = load_translations(lang)?;
    Some(Bundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn empty_bundle() -> Bundle {
    Bundle {
        lang: "en".to_string(),
        translations: Value::Object(serde_json::Map::new()),
        fallback: Value::Object(serde_json::Map::new()),
    }
}

thread_local! {
    static CURRENT: RefCell<Bundle> = RefCell::new(build_bundle("en").unwrap_or_else(empty_bundle));
}

/// Active language code.
#[must_use]
pub fn current_lang() -> String {
    CURRENT.with(|cell| cell.borrow().lang.clone())
}

/// Switch the active language. Unknown codes are ignored.
pub fn set_lang(lang: &str) {
    let Some(bundle) = build_bundle(lang) else {
        log::warn!("unsupported language {lang}");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    #[cfg(target_arch = "wasm32")]
    if let Some(el) = crate::dom::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = el.set_attribute("lang", lang);
    }
}

fn lookup<'a>(obj: &'a Value, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(obj, |current, part| current.get(part))
        .and_then(Value::as_str)
}

/// Translate `key`.
#[must_use]
pub fn t(key: &str) -> String {
    CURRENT.with(|cell| {
        let bundle = cell.borrow();
        lookup(&bundle.translations, key)
            .or_else(|| lookup(&bundle.fallback, key))
            .map_or_else(|| key.to_string(), str::to_string)
    })
}

/// Translate `key`, substituting `{name}` placeholders from `args`.
#[must_use]
pub fn tr(key: &str, args: &BTreeMap<&str, &str>) -> String {
    let mut text = t(key);
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    keys(v, &path, out);
                }
            }
            _ => out.push(prefix.to_string()),
        }
    }

    #[test]
    fn every_locale_covers_english_keys() {
        let en = load_translations("en").expect("english bundle");
        let mut expected = Vec::new();
        keys(&en, "", &mut expected);
        for locale in LOCALES {
            let bundle = load_translations(locale.code).expect("bundle parses");
            for key in &expected {
                assert!(
                    lookup(&bundle, key).is_some(),
                    "{} is missing {key}",
                    locale.code
                );
            }
        }
    }

    #[test]
    fn missing_key_echoes_key() {
        set_lang("en");
        assert_eq!(t("no.such.key"), "no.such.key");
    }

    #[test]
    fn tagalog_falls_back_per_key_and_switches_back() {
        set_lang("tl");
        assert_eq!(current_lang(), "tl");
        assert_eq!(t("fork.left"), "← Kaliwa");
        set_lang("xx");
        assert_eq!(current_lang(), "tl");
        set_lang("en");
        assert_eq!(t("fork.left"), "← Left");
    }

    #[test]
    fn placeholders_are_substituted() {
        set_lang("en");
        let args = BTreeMap::from([("name", "Ana")]);
        assert_eq!(tr("avatar.label", &args), "Avatar of Ana");
    }
}
