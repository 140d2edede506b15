//! Internationalization (i18n) of the page chrome.
//!
//! This module wires together:
//! - `i18n-embed` (bundle selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile-time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   pt-BR/folio-ui.ftl   (fallback/reference)
//!   en-US/folio-ui.ftl
//!   fr-FR/folio-ui.ftl
//! ```
//!
//! Every [`Locale`] gets its own loader, built on first use. Lookups name the
//! locale explicitly, so switching language is just rendering with another
//! `Locale`; there is no process-wide "current language".
//! ```ignore
//! let label = crate::t!(locale, "nav-about");
//! let line = crate::t!(locale, "footer-copyright", year = "2025");
//! ```
//!
//! Per-field portfolio content (hero, about, projects...) is not in here; it
//! lives in [`crate::content`] as `LocalizedText`.
//!
//! To add a new locale:
//! 1. Add the variant to [`Locale`].
//! 2. Copy `pt-BR/folio-ui.ftl` to `i18n/<lang-id>/folio-ui.ftl` and translate
//!    each value (keep IDs and variable placeholders identical).
//! 3. Run tests to ensure completeness.
//!
//! Assets are always embedded on WASM (`debug-embed` is enabled in that
//! target-specific dependency section).

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};

use crate::core::locale::Locale;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Translation macro with an explicit locale.
/// Examples:
///     t!(locale, "nav-hero")
///     t!(locale, "footer-copyright", year = "2025")
///
/// Expands to `fl!` against the loader of `locale`, so keys are still
/// checked against the fallback bundle at compile time.
#[macro_export]
macro_rules! t {
    ($locale:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key)
    };
    ($locale:expr, $key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!($crate::i18n::loader($locale), $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain": the FTL filename and `[fluent] domain` in `i18n.toml`.
const DOMAIN: &str = "folio-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static LOADERS: Lazy<[FluentLanguageLoader; 3]> = Lazy::new(|| Locale::ALL.map(build_loader));

fn build_loader(locale: Locale) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Locale::DEFAULT.language_id());
    match i18n_embed::select(&loader, &Localizations, &[locale.language_id()]) {
        Ok(selected) => debug!(%locale, ?selected, "i18n bundle loaded"),
        Err(err) => warn!(%locale, %err, "failed selecting i18n bundle; using fallback"),
    }
    // Bidi isolation marks would leak into attribute values and tests.
    loader.set_use_isolating(false);
    loader
}

/// Loader for `locale`.
pub fn loader(locale: Locale) -> &'static FluentLanguageLoader {
    &LOADERS[locale.index()]
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_a_bundle() {
        let langs = available_languages();
        for locale in Locale::ALL {
            assert!(
                langs.iter().any(|l| l == locale.bundle_id()),
                "missing bundle for {locale}"
            );
        }
    }

    #[test]
    fn lookups_follow_the_requested_locale() {
        assert_eq!(crate::t!(Locale::PtBr, "nav-hero"), "Início");
        assert_eq!(crate::t!(Locale::EnUs, "nav-hero"), "Home");
        assert_eq!(crate::t!(Locale::FrFr, "nav-hero"), "Accueil");
    }

    #[test]
    fn arguments_are_interpolated_without_isolation_marks() {
        let line = crate::t!(Locale::EnUs, "footer-copyright", year = "2031");
        assert_eq!(line, "© 2031 Luiz Henrique. All rights reserved.");
    }
}
