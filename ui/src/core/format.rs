//! Formatting helpers for presenting content values.

/// Toolkit level label, e.g. `90%`.
pub fn format_percent(level: u8) -> String {
    format!("{level}%")
}

/// Append a two-digit hex alpha to a `#rrggbb` colour. Anything that is not a
/// six-digit hex colour is returned unchanged.
pub fn accent_with_alpha(color: &str, alpha: &str) -> String {
    let is_rgb = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if is_rgb {
        format!("{color}{alpha}")
    } else {
        color.to_string()
    }
}

/// Inline style value for a point translated in 3D, in pixels.
pub fn translate3d(x: f32, y: f32, z: f32) -> String {
    format!("translate3d({x:.1}px, {y:.1}px, {z:.1}px)")
}
