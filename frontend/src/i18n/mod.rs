use std::collections::HashMap;

use leptos::*;

type Translations = HashMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    /// Accepts bare codes and browser tags such as `de-AT`. Unknown
    /// languages fall back to English.
    pub fn from_code(code: &str) -> Self {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "de" => Language::De,
            _ => Language::En,
        }
    }

    fn source(self) -> &'static str {
        match self {
            Language::En => include_str!("../../translations/en.json"),
            Language::De => include_str!("../../translations/de.json"),
        }
    }
}

/// Translations for the language picked at startup.
#[derive(Clone, Copy)]
pub struct I18nContext {
    translations: StoredValue<Translations>,
}

impl I18nContext {
    pub fn new(language: Language) -> Self {
        Self {
            translations: store_value(load_translations(language)),
        }
    }

    /// Looks up `key`; a missing key renders as itself.
    pub fn t(self, key: &str) -> String {
        self.translations
            .with_value(|translations| translations.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }
}

fn load_translations(language: Language) -> Translations {
    match serde_json::from_str(language.source()) {
        Ok(translations) => translations,
        Err(err) => {
            tracing::warn!(?language, %err, "translation file is not valid JSON");
            Translations::default()
        }
    }
}

/// Picks the language from `navigator.language` when running in a browser.
pub fn browser_language() -> Language {
    web_sys::window()
        .and_then(|window| window.navigator().language())
        .map(|code| Language::from_code(&code))
        .unwrap_or_default()
}

pub fn provide_i18n(language: Language) {
    provide_context(I18nContext::new(language));
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}
