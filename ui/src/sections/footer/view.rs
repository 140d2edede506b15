use dioxus::prelude::*;
use time::OffsetDateTime;

use crate::core::session::PageSession;

use super::model::FooterView;

#[component]
pub fn SiteFooter() -> Element {
    let session = use_context::<Signal<PageSession>>();
    let year = use_hook(|| OffsetDateTime::now_utc().year());
    let locale = use_memo(move || session.read().state().locale());
    let view = use_memo(move || FooterView::build(locale(), year));
    let view = view();

    rsx! {
        footer { class: "site-footer",
            p { "{view.copyright}" }
            p { class: "muted", "{view.credits}" }
        }
    }
}
