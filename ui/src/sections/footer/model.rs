use crate::core::locale::Locale;
use crate::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterView {
    pub copyright: String,
    pub credits: String,
}

impl FooterView {
    pub fn build(locale: Locale, year: i32) -> Self {
        Self {
            copyright: t!(locale, "footer-copyright", year = year.to_string()),
            credits: t!(locale, "footer-credits"),
        }
    }
}
