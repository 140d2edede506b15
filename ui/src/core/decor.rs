//! Decorative background and cursor glow.
//!
//! Nothing in here feeds back into the rest of the page. The point field is
//! generated once from a fixed seed; per frame only the [`Rotation`] changes,
//! computed from the scroll scalar and the elapsed time of a [`FrameClock`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::warn;

use super::config::BackgroundConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// Class carried by the document root element.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Posted by the theme watch at install and on every root `class` mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ThemeSample {
    pub dark: bool,
}

/// Posted by the pointer watch on `mousemove`, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointField {
    points: Vec<Point3>,
}

impl PointField {
    /// Points spread uniformly over a cube of edge `spread` centered on the
    /// origin. The same config always yields the same field. A zero or
    /// non-finite spread collapses every point onto the origin.
    pub fn generate(config: &BackgroundConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let half = (config.spread / 2.0).abs();
        let degenerate = half == 0.0 || !half.is_finite();
        if !half.is_finite() {
            warn!(spread = config.spread, "degenerate background spread");
        }
        let points = (0..config.point_count)
            .map(|_| {
                if degenerate {
                    return Point3 { x: 0.0, y: 0.0, z: 0.0 };
                }
                Point3 {
                    x: rng.gen_range(-half..half),
                    y: rng.gen_range(-half..half),
                    z: rng.gen_range(-half..half),
                }
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Field rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub fn at(progress: f64, elapsed_secs: f64) -> Self {
        Self {
            x: progress * 1.2 + elapsed_secs * 0.02,
            y: progress * 0.9 + elapsed_secs * 0.015,
        }
    }

    pub fn css_transform(&self) -> String {
        format!("rotateX({:.4}rad) rotateY({:.4}rad)", self.x, self.y)
    }
}

/// Wall-clock time of the background animation, advanced once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameClock {
    elapsed_ms: u64,
}

impl FrameClock {
    pub fn advance(&mut self, delta_ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ms as f64 / 1_000.0
    }

    pub fn rotation(&self, progress: f64) -> Rotation {
        Rotation::at(progress, self.elapsed_secs())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub color: &'static str,
    pub opacity: f64,
    /// CSS `mix-blend-mode`.
    pub blend: &'static str,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                color: "#ffffff",
                opacity: 0.3,
                blend: "screen",
            },
            Theme::Light => Palette {
                color: "#334155",
                opacity: 0.22,
                blend: "multiply",
            },
        }
    }
}

/// Radial glow that trails the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorGlow {
    radius: f64,
    position: Option<PointerSample>,
}

impl CursorGlow {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            position: None,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// `false` when the pointer did not move.
    pub fn moves_to(&self, sample: PointerSample) -> bool {
        self.position != Some(sample)
    }

    pub fn follow(&mut self, sample: PointerSample) -> bool {
        if !self.moves_to(sample) {
            return false;
        }
        self.position = Some(sample);
        true
    }

    /// Top-left corner of the glow box, or `None` before the first sample.
    pub fn origin(&self) -> Option<(f64, f64)> {
        self.position
            .map(|p| (p.x - self.radius, p.y - self.radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_field_is_deterministic_and_bounded() {
        let config = BackgroundConfig::default();
        let first = PointField::generate(&config);
        let second = PointField::generate(&config);
        assert_eq!(first, second);
        assert_eq!(first.len(), config.point_count);

        let half = config.spread / 2.0;
        assert!(first.points().iter().all(|p| {
            p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half
        }));
    }

    #[test]
    fn different_seeds_differ() {
        let config = BackgroundConfig::default();
        let other = BackgroundConfig {
            seed: config.seed + 1,
            ..config.clone()
        };
        assert_ne!(PointField::generate(&config), PointField::generate(&other));
    }

    #[test]
    fn zero_spread_collapses_to_origin() {
        let config = BackgroundConfig {
            point_count: 3,
            spread: 0.0,
            ..BackgroundConfig::default()
        };
        let field = PointField::generate(&config);
        assert!(field
            .points()
            .iter()
            .all(|p| *p == Point3 { x: 0.0, y: 0.0, z: 0.0 }));
    }

    #[test]
    fn non_finite_spread_collapses_to_origin() {
        for spread in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let config = BackgroundConfig {
                point_count: 4,
                spread,
                ..BackgroundConfig::default()
            };
            let field = PointField::generate(&config);
            assert_eq!(field.len(), 4);
            assert!(field
                .points()
                .iter()
                .all(|p| *p == Point3 { x: 0.0, y: 0.0, z: 0.0 }));
        }
    }

    #[test]
    fn rotation_combines_scroll_and_time() {
        let rotation = Rotation::at(0.5, 10.0);
        assert!((rotation.x - 0.8).abs() < 1e-9);
        assert!((rotation.y - 0.6).abs() < 1e-9);

        let mut clock = FrameClock::default();
        clock.advance(16);
        clock.advance(984);
        assert_eq!(clock.elapsed_secs(), 1.0);
        assert_eq!(clock.rotation(0.0), Rotation::at(0.0, 1.0));
    }

    #[test]
    fn palette_follows_theme() {
        let dark = Palette::for_theme(Theme::Dark);
        assert_eq!((dark.opacity, dark.blend), (0.3, "screen"));
        let light = Palette::for_theme(Theme::Light);
        assert_eq!((light.opacity, light.blend), (0.22, "multiply"));
        assert_eq!(Theme::default().toggled(), Theme::Light);
    }

    #[test]
    fn glow_is_offset_by_radius() {
        let mut glow = CursorGlow::new(128.0);
        assert_eq!(glow.origin(), None);
        assert!(glow.follow(PointerSample { x: 300.0, y: 200.0 }));
        assert!(!glow.follow(PointerSample { x: 300.0, y: 200.0 }));
        assert_eq!(glow.origin(), Some((172.0, 72.0)));
    }
}
