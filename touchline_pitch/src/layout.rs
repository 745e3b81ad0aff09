// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::{FIELD_LENGTH, FIELD_WIDTH};

/// Fraction of the surface's minimum dimension reserved as margin on each side.
const MARGIN_FRACTION: f64 = 0.05;

/// Surface-dependent pitch geometry.
///
/// A `PitchLayout` is computed from the drawing surface's current size and
/// holds the centered field rectangle plus the pixel metrics derived from it.
/// It is cheap to copy and intended to be recomputed on every resize; all
/// conversions are pure functions of the stored rectangle.
///
/// The field rectangle always has exactly the metric aspect ratio
/// (105 / 68), so a single uniform scale factor serves both axes and
/// [`PitchLayout::field_to_surface`] / [`PitchLayout::surface_to_field`] are
/// exact inverses of each other.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PitchLayout {
    rect: Rect,
    marker_radius: f64,
    ball_radius: f64,
}

impl PitchLayout {
    /// Computes the layout for a surface of the given size.
    ///
    /// The field rectangle is the largest rectangle with the metric aspect
    /// ratio that fits the surface after subtracting a margin of 5 % of the
    /// smaller surface dimension on every side, centered in the surface.
    ///
    /// Returns `None` when the surface has no positive area (including a
    /// not-yet-laid-out surface reporting zero size). Hit testing and
    /// painting must be skipped until a valid layout exists.
    #[must_use]
    pub fn compute(surface: Size) -> Option<Self> {
        if !(surface.width > 0.0 && surface.height > 0.0) {
            return None;
        }

        let ratio = FIELD_LENGTH / FIELD_WIDTH;
        let margin = surface.width.min(surface.height) * MARGIN_FRACTION;
        let avail_w = surface.width - margin * 2.0;
        let avail_h = surface.height - margin * 2.0;
        if !(avail_w > 0.0 && avail_h > 0.0) {
            return None;
        }

        let (field_w, field_h) = if avail_w / avail_h > ratio {
            (avail_h * ratio, avail_h)
        } else {
            (avail_w, avail_w / ratio)
        };

        let x0 = (surface.width - field_w) / 2.0;
        let y0 = (surface.height - field_h) / 2.0;
        let rect = Rect::new(x0, y0, x0 + field_w, y0 + field_h);

        Some(Self {
            rect,
            marker_radius: (field_w * 0.018).clamp(10.0, 26.0),
            ball_radius: (field_w * 0.010).clamp(6.0, 14.0),
        })
    }

    /// Returns the field rectangle in surface coordinates.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the uniform meters→pixels scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.rect.width() / FIELD_LENGTH
    }

    /// Returns the player marker radius in pixels for this layout.
    #[must_use]
    pub fn marker_radius(&self) -> f64 {
        self.marker_radius
    }

    /// Returns the ball radius in pixels for this layout.
    #[must_use]
    pub fn ball_radius(&self) -> f64 {
        self.ball_radius
    }

    /// Converts a field-metric point (meters) into surface coordinates.
    #[must_use]
    pub fn field_to_surface(&self, pt: Point) -> Point {
        let scale = self.scale();
        Point::new(self.rect.x0 + pt.x * scale, self.rect.y0 + pt.y * scale)
    }

    /// Converts a surface point into field-metric coordinates (meters).
    ///
    /// This is the exact inverse of [`PitchLayout::field_to_surface`]; points
    /// outside the field rectangle map to coordinates outside `[0, 105]` /
    /// `[0, 68]` without clamping.
    #[must_use]
    pub fn surface_to_field(&self, pt: Point) -> Point {
        let scale = self.scale();
        Point::new((pt.x - self.rect.x0) / scale, (pt.y - self.rect.y0) / scale)
    }

    /// Converts a field-metric rectangle into surface coordinates.
    #[must_use]
    pub fn field_rect_to_surface(&self, rect: Rect) -> Rect {
        let p0 = self.field_to_surface(rect.origin());
        let p1 = self.field_to_surface(Point::new(rect.x1, rect.y1));
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// Returns the pixel metrics of the name label drawn below a named marker.
    ///
    /// Both the painter and the hit tester consume these, so the expanded
    /// hit region of a named marker always matches the rendered label.
    #[must_use]
    pub fn name_label_metrics(&self) -> NameLabelMetrics {
        let font_px = (self.marker_radius * 0.8).max(9.0);
        NameLabelMetrics {
            font_px,
            half_width: self.marker_radius * 1.2,
            top_offset: self.marker_radius + 2.0,
            height: font_px * 1.1,
        }
    }
}

/// Pixel metrics of the name label rendered below a named home marker.
///
/// All values derive from the marker radius of the current layout. The label
/// is horizontally centered on the marker; `top_offset` is measured from the
/// marker center down to the top edge of the label box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NameLabelMetrics {
    /// Uniform label font size in pixels.
    pub font_px: f64,
    /// Half of the label box width.
    pub half_width: f64,
    /// Distance from marker center to the top of the label box.
    pub top_offset: f64,
    /// Height of the label box (font size plus leading).
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_surfaces_produce_no_layout() {
        assert!(PitchLayout::compute(Size::new(0.0, 600.0)).is_none());
        assert!(PitchLayout::compute(Size::new(800.0, 0.0)).is_none());
        assert!(PitchLayout::compute(Size::new(-1.0, -1.0)).is_none());
        assert!(PitchLayout::compute(Size::new(f64::NAN, 600.0)).is_none());
    }

    #[test]
    fn field_rect_matches_metric_aspect_ratio() {
        let layout = PitchLayout::compute(Size::new(800.0, 600.0)).unwrap();
        let rect = layout.rect();
        let ratio = rect.width() / rect.height();
        assert!((ratio - FIELD_LENGTH / FIELD_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn field_rect_is_centered_with_margins() {
        let surface = Size::new(1000.0, 700.0);
        let layout = PitchLayout::compute(surface).unwrap();
        let rect = layout.rect();

        // Centered: equal slack on both sides of each axis.
        assert!((rect.x0 - (surface.width - rect.width()) / 2.0).abs() < 1e-9);
        assert!((rect.y0 - (surface.height - rect.height()) / 2.0).abs() < 1e-9);

        // The margin is at least 5% of the min dimension on each side.
        let margin = surface.width.min(surface.height) * 0.05;
        assert!(rect.x0 >= margin - 1e-9);
        assert!(rect.y0 >= margin - 1e-9);
    }

    #[test]
    fn wide_and_tall_surfaces_limit_on_different_axes() {
        // Very wide surface: height is the limiting dimension.
        let wide = PitchLayout::compute(Size::new(4000.0, 400.0)).unwrap();
        let margin = 400.0 * 0.05;
        assert!((wide.rect().height() - (400.0 - 2.0 * margin)).abs() < 1e-9);

        // Very tall surface: width is the limiting dimension.
        let tall = PitchLayout::compute(Size::new(400.0, 4000.0)).unwrap();
        assert!((tall.rect().width() - (400.0 - 2.0 * margin)).abs() < 1e-9);
    }

    #[test]
    fn round_trip_is_exact_within_tolerance() {
        let layout = PitchLayout::compute(Size::new(800.0, 600.0)).unwrap();
        let rect = layout.rect();

        // Sample a grid of surface points inside the field rectangle.
        for i in 0..=10 {
            for j in 0..=10 {
                let pt = Point::new(
                    rect.x0 + rect.width() * f64::from(i) / 10.0,
                    rect.y0 + rect.height() * f64::from(j) / 10.0,
                );
                let back = layout.field_to_surface(layout.surface_to_field(pt));
                assert!((back.x - pt.x).abs() < 1e-9);
                assert!((back.y - pt.y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn scale_is_uniform_across_axes() {
        let layout = PitchLayout::compute(Size::new(800.0, 600.0)).unwrap();
        let rect = layout.rect();
        assert!((rect.width() / FIELD_LENGTH - rect.height() / FIELD_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn known_scale_maps_goalkeeper_spot() {
        // A 600 px wide field rect gives scale 600/105; the goalkeeper spot at
        // (8, 34) lands at roughly (45.7, 194.3) relative to the rect origin.
        let layout = PitchLayout::compute(Size::new(700.0, 700.0)).unwrap();
        let rect = layout.rect();
        let gk = layout.field_to_surface(Point::new(8.0, 34.0));
        let scale = layout.scale();
        assert!((gk.x - rect.x0 - 8.0 * scale).abs() < 1e-9);
        assert!((gk.y - rect.y0 - 34.0 * scale).abs() < 1e-9);
    }

    #[test]
    fn radii_scale_with_rect_width_and_clamp() {
        let small = PitchLayout::compute(Size::new(200.0, 200.0)).unwrap();
        assert_eq!(small.marker_radius(), 10.0);
        assert_eq!(small.ball_radius(), 6.0);

        let large = PitchLayout::compute(Size::new(4000.0, 3000.0)).unwrap();
        assert_eq!(large.marker_radius(), 26.0);
        assert_eq!(large.ball_radius(), 14.0);

        let mid = PitchLayout::compute(Size::new(900.0, 700.0)).unwrap();
        assert!((mid.marker_radius() - mid.rect().width() * 0.018).abs() < 1e-9);
        assert!((mid.ball_radius() - mid.rect().width() * 0.010).abs() < 1e-9);
    }

    #[test]
    fn name_label_metrics_follow_marker_radius() {
        let layout = PitchLayout::compute(Size::new(900.0, 700.0)).unwrap();
        let metrics = layout.name_label_metrics();
        let r = layout.marker_radius();
        assert!((metrics.half_width - r * 1.2).abs() < 1e-9);
        assert!((metrics.top_offset - (r + 2.0)).abs() < 1e-9);
        assert!((metrics.height - metrics.font_px * 1.1).abs() < 1e-9);
        assert!(metrics.font_px >= 9.0);
    }

    #[test]
    fn field_rect_to_surface_maps_corners() {
        let layout = PitchLayout::compute(Size::new(800.0, 600.0)).unwrap();
        let full = layout.field_rect_to_surface(Rect::new(0.0, 0.0, FIELD_LENGTH, FIELD_WIDTH));
        let rect = layout.rect();
        assert!((full.x0 - rect.x0).abs() < 1e-9);
        assert!((full.y0 - rect.y0).abs() < 1e-9);
        assert!((full.x1 - rect.x1).abs() < 1e-9);
        assert!((full.y1 - rect.y1).abs() < 1e-9);
    }
}
