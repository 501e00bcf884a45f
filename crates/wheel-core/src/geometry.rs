//! Slice geometry for rendering the wheel.
//!
//! All angles are in degrees, measured clockwise from the top of the wheel,
//! where the fixed pointer sits. This matches the default origin of a CSS
//! `conic-gradient` and the direction of a positive CSS `rotate()`.

use serde::{Deserialize, Serialize};

use crate::color::{Color, Palette};

pub const FULL_TURN: f64 = 360.0;

/// Translucent fill used when there are no slices to draw.
pub const EMPTY_WHEEL_BACKGROUND: &str = "rgba(255,255,255,0.2)";

/// Angular span of a single slice, or `None` for an empty wheel.
#[allow(clippy::cast_precision_loss)]
pub fn slice_angle(item_count: usize) -> Option<f64> {
    (item_count > 0).then(|| FULL_TURN / item_count as f64)
}

/// One angular segment of the wheel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    pub color: Color,
}

impl Slice {
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Equal slices for `item_count` items with cyclic colors.
///
/// Boundaries are derived from the index rather than accumulated, so the last
/// slice always ends at exactly 360.
#[allow(clippy::cast_precision_loss)]
pub fn slices(item_count: usize, palette: &Palette) -> Vec<Slice> {
    let n = item_count as f64;
    (0..item_count)
        .map(|index| Slice {
            index,
            start: FULL_TURN * index as f64 / n,
            end: FULL_TURN * (index + 1) as f64 / n,
            color: palette.color_for(index),
        })
        .collect()
}

/// CSS background for the wheel: a `conic-gradient` with a hard stop at every
/// slice boundary, or [`EMPTY_WHEEL_BACKGROUND`] when there are no slices.
pub fn wheel_background(slices: &[Slice]) -> String {
    if slices.is_empty() {
        return EMPTY_WHEEL_BACKGROUND.to_string();
    }
    let stops: Vec<String> = slices
        .iter()
        .map(|s| format!("{} {:.3}deg {:.3}deg", s.color.to_hex(), s.start, s.end))
        .collect();
    format!("conic-gradient({})", stops.join(", "))
}

/// Normalizes any angle into `[0, 360)`.
pub fn normalize_angle(degrees: f64) -> f64 {
    let angle = degrees.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if angle >= FULL_TURN { 0.0 } else { angle }
}

/// Index of the slice under the pointer after rotating clockwise by `rotation`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn index_at_pointer(rotation: f64, item_count: usize) -> Option<usize> {
    let span = slice_angle(item_count)?;
    let under_pointer = normalize_angle(-rotation);
    let index = (under_pointer / span).floor() as usize;
    Some(index.min(item_count - 1))
}

/// How slice labels are laid out on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LabelLayout {
    /// Full-size label box rotated about the wheel center.
    #[default]
    Rotated,
    /// Label centered on explicit sine/cosine coordinates.
    Polar,
}

/// Inline placement of one slice label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LabelPlacement {
    Rotated { rotate_deg: f64 },
    Polar { x: f64, y: f64, rotate_deg: f64 },
}

impl LabelPlacement {
    /// Rotated placement: the label box spans the wheel and turns to the slice middle.
    pub fn rotated(slice: &Slice) -> Self {
        Self::Rotated {
            rotate_deg: slice.mid(),
        }
    }

    /// Polar placement around a wheel of `wheel_radius` pixels.
    ///
    /// `label_radius` is the fraction of the wheel radius at which labels sit.
    pub fn polar(slice: &Slice, wheel_radius: f64, label_radius: f64) -> Self {
        let theta = slice.mid().to_radians();
        let r = wheel_radius * label_radius;
        Self::Polar {
            x: wheel_radius + r * theta.sin(),
            y: wheel_radius - r * theta.cos(),
            rotate_deg: slice.mid(),
        }
    }

    pub fn for_layout(layout: LabelLayout, slice: &Slice, wheel_radius: f64, label_radius: f64) -> Self {
        match layout {
            LabelLayout::Rotated => Self::rotated(slice),
            LabelLayout::Polar => Self::polar(slice, wheel_radius, label_radius),
        }
    }

    /// Inline CSS for the label element.
    pub fn to_style(&self) -> String {
        match self {
            Self::Rotated { rotate_deg } => {
                format!("transform: rotate({rotate_deg:.3}deg);")
            }
            Self::Polar { x, y, rotate_deg } => format!(
                "left: {x:.2}px; top: {y:.2}px; transform: translate(-50%, -50%) rotate({rotate_deg:.3}deg);"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_slice_angle() {
        assert_eq!(slice_angle(0), None);
        assert_eq!(slice_angle(4), Some(90.0));
        assert!((slice_angle(7).unwrap() - 360.0 / 7.0).abs() < EPS);
    }

    #[test]
    fn test_slices_cover_full_turn() {
        let palette = Palette::default();
        for n in 1..=24 {
            let slices = slices(n, &palette);
            let angle = slice_angle(n).unwrap();
            let total: f64 = slices.iter().map(Slice::span).sum();

            assert_eq!(slices.len(), n);
            assert!((total - 360.0).abs() < 1e-6, "n = {n}, total = {total}");
            assert_eq!(slices[0].start, 0.0);
            assert_eq!(slices[n - 1].end, 360.0);
            for s in &slices {
                assert!((s.span() - angle).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_slice_colors_cycle() {
        let palette = Palette::default();
        let slices = slices(10, &palette);
        assert_eq!(slices[7].color, slices[0].color);
        assert_ne!(slices[1].color, slices[0].color);
    }

    #[test]
    fn test_wheel_background() {
        let palette = Palette::new(vec![Color::rgb(1, 2, 3), Color::rgb(4, 5, 6)]).unwrap();
        let css = wheel_background(&slices(2, &palette));
        assert_eq!(
            css,
            "conic-gradient(#010203 0.000deg 180.000deg, #040506 180.000deg 360.000deg)"
        );
        assert_eq!(wheel_background(&[]), "rgba(255,255,255,0.2)");
    }

    #[test]
    fn test_index_at_pointer() {
        // 4 slices of 90 degrees; slice 0 covers the top-right quadrant.
        assert_eq!(index_at_pointer(0.0, 4), Some(0));
        // Rotating clockwise by 45 brings the last slice's middle under the pointer.
        assert_eq!(index_at_pointer(45.0, 4), Some(3));
        assert_eq!(index_at_pointer(270.0 - 45.0, 4), Some(1));
        assert_eq!(index_at_pointer(360.0 * 5.0 + 315.0, 4), Some(0));
        assert_eq!(index_at_pointer(-45.0, 4), Some(0));
        assert_eq!(index_at_pointer(10.0, 0), None);
    }

    #[test]
    fn test_polar_placement() {
        let palette = Palette::default();
        let slices = slices(4, &palette);

        // Slice 0 middle at 45 degrees: up and to the right of center.
        let LabelPlacement::Polar { x, y, rotate_deg } = LabelPlacement::polar(&slices[0], 100.0, 0.5)
        else {
            panic!("expected polar placement");
        };
        let offset = 50.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert!((x - (100.0 + offset)).abs() < 1e-9);
        assert!((y - (100.0 - offset)).abs() < 1e-9);
        assert!((rotate_deg - 45.0).abs() < EPS);

        // Slice 2 middle at 225 degrees: down and to the left.
        let LabelPlacement::Polar { x, y, .. } = LabelPlacement::polar(&slices[2], 100.0, 0.5) else {
            panic!("expected polar placement");
        };
        assert!(x < 100.0 && y > 100.0);
    }

    #[test]
    fn test_placement_style() {
        let rotated = LabelPlacement::Rotated { rotate_deg: 45.0 };
        assert_eq!(rotated.to_style(), "transform: rotate(45.000deg);");

        let polar = LabelPlacement::Polar {
            x: 10.0,
            y: 20.5,
            rotate_deg: 90.0,
        };
        assert_eq!(
            polar.to_style(),
            "left: 10.00px; top: 20.50px; transform: translate(-50%, -50%) rotate(90.000deg);"
        );
    }
}
