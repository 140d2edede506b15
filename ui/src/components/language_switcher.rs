use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::core::locale::Locale;
use crate::core::session::PageSession;
use crate::t;

#[component]
pub fn LanguageSwitcher() -> Element {
    let mut session = use_context::<Signal<PageSession>>();
    let current = use_memo(move || session.read().state().locale());

    let on_change = move |evt: FormEvent| {
        let raw = evt.value();
        match raw.parse::<Locale>() {
            Ok(locale) => {
                debug!(%locale, "locale selected");
                session.write().state_mut().set_locale(locale);
            }
            Err(err) => warn!(%err, "ignoring locale selection"),
        }
    };

    rsx! {
        div { class: "language-switcher",
            label {
                class: "visually-hidden",
                r#for: "locale-select",
                {t!(current(), "language-switcher-label")}
            }
            select {
                id: "locale-select",
                value: "{current()}",
                oninput: on_change,
                for locale in Locale::ALL {
                    option {
                        key: "{locale}",
                        value: "{locale}",
                        selected: locale == current(),
                        "{locale.label()}"
                    }
                }
            }
        }
    }
}
