#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that the CSS selectors the shared page components render (header, sections,
  cards, decorations) remain present in the unified shared theme:
  ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile-time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    ".light {",
    "body {",
    ".page {",
    ".page-content--loading",
    ".section-card",
    ".section-label",
    // Header & navigation
    ".site-header",
    ".nav-pill--active",
    ".floating-nav",
    ".theme-toggle",
    ".language-switcher",
    ".back-to-top",
    // Buttons & shared UI
    ".button {",
    ".button--primary",
    ".button--ghost",
    ".badge",
    ".tabs__tab--active",
    ".chip--active",
    ".card {",
    ".progress__fill",
    // Sections
    ".highlight--active",
    ".stat-tile",
    ".skill-list--split",
    ".skill-list__item--active",
    ".skill-detail--placeholder",
    ".project__preview",
    ".tech-list__item",
    ".site-footer",
    // Decorations
    ".backdrop",
    ".backdrop__point",
    ".cursor-glow",
    ".loading-screen",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn light_theme_overrides_the_dark_palette() {
    // Both blocks must redefine the same colour tokens.
    let dark = THEME_CSS.find(":root {").expect("dark palette block");
    let light = THEME_CSS.find(".light {").expect("light palette block");
    assert!(dark < light, "light overrides must come after the dark defaults");
    for token in ["--color-bg:", "--color-text:", "--color-muted:"] {
        assert!(
            THEME_CSS.matches(token).count() >= 2,
            "`{token}` is not overridden by the light theme"
        );
    }
}
