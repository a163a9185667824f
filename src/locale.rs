use serde::{Deserialize, Serialize};

/// Key the language preference is persisted under in local storage.
pub const LOCALE_STORAGE_KEY: &str = "portfolio.locale";

/// The two languages the site is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// Normalizes a detected or stored language tag (`ar-EG`, `en-US`, `AR`, ...)
    /// to one of the supported locales. Anything not starting with `ar` is English.
    pub fn resolve(tag: &str) -> Self {
        let tag = tag.trim();
        if tag
            .get(..2)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("ar"))
        {
            Locale::Ar
        } else {
            Locale::En
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }

    /// Value for the document's `dir` attribute.
    pub fn dir(self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }
}

/// Picks the locale a visitor starts with: their saved preference if any,
/// then the browser language, then English.
pub fn initial_locale(stored: &str, detected: Option<&str>) -> Locale {
    if !stored.trim().is_empty() {
        return Locale::resolve(stored);
    }
    detected.map(Locale::resolve).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_alternate_prefix() {
        assert_eq!(Locale::resolve("ar"), Locale::Ar);
        assert_eq!(Locale::resolve("ar-EG"), Locale::Ar);
        assert_eq!(Locale::resolve("AR-sa"), Locale::Ar);
        assert_eq!(Locale::resolve("  ar "), Locale::Ar);
    }

    #[test]
    fn test_resolve_defaults_to_english() {
        for tag in ["", "en", "en-US", "fr", "a", "ra", "zh-Hant", "é", "\u{627}\u{644}"] {
            assert_eq!(Locale::resolve(tag), Locale::En, "tag {tag:?}");
        }
    }

    #[test]
    fn test_resolve_always_supported() {
        for tag in ["ar", "arabic", "x", "", "en-GB", "ß", "🙂🙂"] {
            assert!(Locale::ALL.contains(&Locale::resolve(tag)));
        }
    }

    #[test]
    fn test_direction_follows_locale() {
        assert!(Locale::Ar.is_rtl());
        assert!(!Locale::En.is_rtl());
        assert_eq!(Locale::Ar.dir(), "rtl");
        assert_eq!(Locale::En.dir(), "ltr");
        assert_eq!(Locale::En.toggle(), Locale::Ar);
        assert_eq!(Locale::Ar.toggle().toggle(), Locale::Ar);
    }

    #[test]
    fn test_initial_locale_prefers_stored() {
        assert_eq!(initial_locale("ar", Some("en-US")), Locale::Ar);
        assert_eq!(initial_locale("en", Some("ar-EG")), Locale::En);
        assert_eq!(initial_locale("", Some("ar-EG")), Locale::Ar);
        assert_eq!(initial_locale("", None), Locale::En);
    }
}
