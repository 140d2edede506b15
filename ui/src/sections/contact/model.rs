use crate::content::ContactKind;
use crate::core::locale::Locale;
use crate::core::selection::SelectionState;
use crate::t;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub kind: ContactKind,
    pub label: String,
    pub hint: String,
    pub info: &'static str,
    pub href: &'static str,
    pub open_cta: String,
}

impl ContactCard {
    /// Mail links open in place; everything else opens a new tab.
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeCard {
    pub title: String,
    pub subtitle: String,
    pub href: &'static str,
    pub download_cta: String,
    pub view_cta: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TalkCard {
    pub title: String,
    pub subtitle: String,
    pub email_cta: String,
    pub email_href: &'static str,
    pub linkedin_cta: String,
    pub linkedin_href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub label: String,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cards: Vec<ContactCard>,
    pub resume: ResumeCard,
    pub talk: TalkCard,
}

fn channel_copy(locale: Locale, kind: ContactKind) -> (String, String) {
    match kind {
        ContactKind::Email => (
            t!(locale, "contact-card-email-label"),
            t!(locale, "contact-card-email-hint"),
        ),
        ContactKind::Github => (
            t!(locale, "contact-card-github-label"),
            t!(locale, "contact-card-github-hint"),
        ),
        ContactKind::Linkedin => (
            t!(locale, "contact-card-linkedin-label"),
            t!(locale, "contact-card-linkedin-hint"),
        ),
    }
}

impl ContactView {
    pub fn build(state: &SelectionState) -> Self {
        let locale = state.locale();
        let catalog = state.catalog();

        let cards = catalog
            .channels
            .iter()
            .map(|channel| {
                let (label, hint) = channel_copy(locale, channel.kind);
                ContactCard {
                    kind: channel.kind,
                    label,
                    hint,
                    info: channel.info,
                    href: channel.href,
                    open_cta: t!(locale, "contact-open-cta"),
                }
            })
            .collect();

        Self {
            label: t!(locale, "contact-label"),
            title: catalog.contact.title.resolve(locale),
            subtitle: catalog.contact.subtitle.resolve(locale),
            cards,
            resume: ResumeCard {
                title: t!(locale, "contact-resume-title"),
                subtitle: t!(locale, "contact-resume-subtitle"),
                href: catalog.resume_href,
                download_cta: t!(locale, "contact-download-cta"),
                view_cta: t!(locale, "contact-view-cta"),
            },
            talk: TalkCard {
                title: t!(locale, "contact-talk-title"),
                subtitle: t!(locale, "contact-talk-subtitle"),
                email_cta: t!(locale, "contact-talk-email"),
                email_href: catalog.email_href,
                linkedin_cta: t!(locale, "contact-talk-linkedin"),
                linkedin_href: catalog.linkedin_href,
            },
        }
    }
}
