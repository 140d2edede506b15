//! Locale resolution for content fields.
//!
//! Content fields are either a single string shared by every locale or a
//! per-locale table. Callers resolve both shapes through [`LocalizedText::resolve`]
//! and never need to know which one a field uses.

use super::locale::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalizedText {
    /// Same string for every locale.
    Plain(&'static str),
    /// One entry per locale. Missing entries fall back to [`Locale::DEFAULT`].
    Localized(&'static [(Locale, &'static str)]),
}

impl LocalizedText {
    /// Resolve for `locale`, falling back to the default locale and finally to
    /// an empty string. Never fails.
    pub fn resolve(&self, locale: Locale) -> &'static str {
        match *self {
            LocalizedText::Plain(text) => text,
            LocalizedText::Localized(entries) => lookup(entries, locale)
                .or_else(|| lookup(entries, Locale::DEFAULT))
                .unwrap_or(""),
        }
    }

    /// Resolution in the default locale; used as a stable identity key.
    pub fn default_text(&self) -> &'static str {
        self.resolve(Locale::DEFAULT)
    }

    /// Whether `locale` resolves without falling back.
    pub fn covers(&self, locale: Locale) -> bool {
        match *self {
            LocalizedText::Plain(text) => !text.is_empty(),
            LocalizedText::Localized(entries) => {
                lookup(entries, locale).is_some_and(|text| !text.is_empty())
            }
        }
    }
}

fn lookup(entries: &[(Locale, &'static str)], locale: Locale) -> Option<&'static str> {
    entries
        .iter()
        .find(|(key, _)| *key == locale)
        .map(|(_, text)| *text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREETING: LocalizedText = LocalizedText::Localized(&[
        (Locale::PtBr, "Olá"),
        (Locale::EnUs, "Hello"),
        (Locale::FrFr, "Salut"),
    ]);

    const PARTIAL: LocalizedText = LocalizedText::Localized(&[(Locale::PtBr, "Só português")]);

    const ORPHAN: LocalizedText = LocalizedText::Localized(&[(Locale::FrFr, "Seulement")]);

    #[test]
    fn resolves_each_locale() {
        assert_eq!(GREETING.resolve(Locale::PtBr), "Olá");
        assert_eq!(GREETING.resolve(Locale::EnUs), "Hello");
        assert_eq!(GREETING.resolve(Locale::FrFr), "Salut");
    }

    #[test]
    fn plain_text_is_returned_unchanged_for_every_locale() {
        let plain = LocalizedText::Plain("Front-end");
        for locale in Locale::ALL {
            assert_eq!(plain.resolve(locale), "Front-end");
        }
    }

    #[test]
    fn missing_entry_falls_back_to_default_locale() {
        assert_eq!(PARTIAL.resolve(Locale::EnUs), "Só português");
        assert!(!PARTIAL.covers(Locale::EnUs));
        assert!(PARTIAL.covers(Locale::PtBr));
    }

    #[test]
    fn missing_default_degrades_to_empty() {
        assert_eq!(ORPHAN.resolve(Locale::EnUs), "");
        assert_eq!(ORPHAN.resolve(Locale::FrFr), "Seulement");
    }
}
