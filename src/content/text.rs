use serde::{Deserialize, Deserializer, Serialize};

use crate::locale::Locale;

/// A value written once per supported language. Either side may be missing
/// in the source document; a missing side reads as the empty string, and a
/// `null` in place of the whole value reads as both sides missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BilingualText {
    pub en: Option<String>,
    pub ar: Option<String>,
}

impl<'de> Deserialize<'de> for BilingualText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Pair {
            #[serde(default)]
            en: Option<String>,
            #[serde(default)]
            ar: Option<String>,
        }

        Ok(Option::<Pair>::deserialize(deserializer)?
            .map(|Pair { en, ar }| BilingualText { en, ar })
            .unwrap_or_default())
    }
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: Some(en.into()),
            ar: Some(ar.into()),
        }
    }

    pub fn resolve(&self, locale: Locale) -> &str {
        let field = match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        };
        field.as_deref().unwrap_or("")
    }
}

/// Resolves an optional field, so callers never have to special-case a
/// record that omitted it entirely.
pub fn resolve(field: Option<&BilingualText>, locale: Locale) -> &str {
    field.map(|f| f.resolve(locale)).unwrap_or("")
}

/// Text that the source sometimes supplies as one plain string and
/// sometimes as a per-language pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Localized {
    Plain(String),
    Localized(BilingualText),
}

impl Default for Localized {
    fn default() -> Self {
        Localized::Plain(String::new())
    }
}

impl Localized {
    pub fn resolve(&self, locale: Locale) -> &str {
        match self {
            Localized::Plain(value) => value,
            Localized::Localized(text) => text.resolve(locale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_present_fields() {
        let text = BilingualText::new("Hello", "مرحبا");
        assert_eq!(text.resolve(Locale::En), "Hello");
        assert_eq!(text.resolve(Locale::Ar), "مرحبا");
    }

    #[test]
    fn test_missing_alternate_is_empty() {
        let text: BilingualText = serde_json::from_str(r#"{"en": "Hello"}"#).unwrap();
        assert_eq!(text.resolve(Locale::Ar), "");
        assert_eq!(text.resolve(Locale::En), "Hello");
    }

    #[test]
    fn test_null_and_absent_fields() {
        let text: BilingualText = serde_json::from_str(r#"{"en": null}"#).unwrap();
        for locale in Locale::ALL {
            assert_eq!(text.resolve(locale), "");
        }
        assert_eq!(resolve(None, Locale::En), "");
        assert_eq!(resolve(Some(&text), Locale::Ar), "");

        let whole: BilingualText = serde_json::from_str("null").unwrap();
        assert_eq!(whole, BilingualText::default());
        let list: Vec<BilingualText> =
            serde_json::from_str(r#"[null, {"en": "Shipped"}]"#).unwrap();
        assert_eq!(list[0].resolve(Locale::En), "");
        assert_eq!(list[1].resolve(Locale::En), "Shipped");

        let duration: Localized = serde_json::from_str("null").unwrap();
        assert_eq!(duration.resolve(Locale::Ar), "");
    }

    #[test]
    fn test_localized_plain_and_pair() {
        let plain: Localized = serde_json::from_str(r#""2022 - 2024""#).unwrap();
        assert_eq!(plain, Localized::Plain("2022 - 2024".to_string()));
        assert_eq!(plain.resolve(Locale::Ar), "2022 - 2024");

        let pair: Localized =
            serde_json::from_str(r#"{"en": "Two years", "ar": "سنتان"}"#).unwrap();
        assert_eq!(pair.resolve(Locale::En), "Two years");
        assert_eq!(pair.resolve(Locale::Ar), "سنتان");

        let partial: Localized = serde_json::from_str(r#"{"ar": "سنتان"}"#).unwrap();
        assert_eq!(partial.resolve(Locale::En), "");
    }
}
