//! Supported display locales.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use unic_langid::LanguageIdentifier;

/// A display language. The set is closed; every localized value is expected
/// to carry an entry for each variant, falling back to [`Locale::DEFAULT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
    FrFr,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::PtBr;

    /// Picker order.
    pub const ALL: [Locale; 3] = [Locale::PtBr, Locale::EnUs, Locale::FrFr];

    /// Lowercase tag used as the content table key (`pt-br`).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-br",
            Locale::EnUs => "en-us",
            Locale::FrFr => "fr-fr",
        }
    }

    /// Short uppercase label shown in the language picker.
    pub fn label(self) -> &'static str {
        match self {
            Locale::PtBr => "PT-BR",
            Locale::EnUs => "EN-US",
            Locale::FrFr => "FR-FR",
        }
    }

    /// BCP-47 identifier of the matching Fluent bundle folder (`pt-BR`).
    pub fn bundle_id(self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
            Locale::FrFr => "fr-FR",
        }
    }

    pub fn language_id(self) -> LanguageIdentifier {
        // Bundle ids are literals above; parsing them cannot fail.
        self.bundle_id()
            .parse()
            .expect("locale bundle id is a valid language identifier")
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Locale::PtBr => 0,
            Locale::EnUs => 1,
            Locale::FrFr => 2,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale `{0}`")]
pub struct ParseLocaleError(pub String);

impl FromStr for Locale {
    type Err = ParseLocaleError;

    /// Accepts `pt-br`, `pt-BR`, `pt_BR` and friends.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().replace('_', "-").to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| locale.tag() == normalized)
            .ok_or_else(|| ParseLocaleError(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_case_insensitively() {
        assert_eq!("pt-br".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("en-US".parse::<Locale>(), Ok(Locale::EnUs));
        assert_eq!(" fr_FR ".parse::<Locale>(), Ok(Locale::FrFr));
    }

    #[test]
    fn rejects_unknown_tags() {
        let err = "de-de".parse::<Locale>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported locale `de-de`");
    }

    #[test]
    fn bundle_ids_parse_as_language_identifiers() {
        for locale in Locale::ALL {
            assert_eq!(locale.language_id().to_string(), locale.bundle_id());
        }
    }

    #[test]
    fn indices_are_dense() {
        let indices: Vec<usize> = Locale::ALL.iter().map(|l| l.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
