// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed 18-cell annotation grid over the field rectangle.
//!
//! The grid is 3 rows × 6 columns and covers the field rectangle exactly.
//! Cells are numbered 1..=18 column-major, top to bottom:
//! `number = column * 3 + row + 1`, so the left goal-line column holds cells
//! 1–3 and the right one cells 16–18.

use kurbo::{Point, Rect};

use crate::PitchLayout;

/// Number of grid columns along the field length.
pub const ZONE_COLS: u8 = 6;

/// Number of grid rows across the field width.
pub const ZONE_ROWS: u8 = 3;

/// Total number of grid cells.
pub const ZONE_COUNT: u8 = ZONE_COLS * ZONE_ROWS;

/// Identifier of one cell of the annotation grid.
///
/// Wraps the 1-indexed cell number. Construction is validated, so a `ZoneId`
/// always refers to an existing cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ZoneId(u8);

impl ZoneId {
    /// Creates a zone id from a 1-indexed cell number.
    ///
    /// Returns `None` when the number is outside `1..=18`.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        if number >= 1 && number <= ZONE_COUNT {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Creates a zone id from a column (0..6, left to right) and row
    /// (0..3, top to bottom).
    #[must_use]
    pub const fn from_cell(col: u8, row: u8) -> Option<Self> {
        if col < ZONE_COLS && row < ZONE_ROWS {
            Some(Self(col * ZONE_ROWS + row + 1))
        } else {
            None
        }
    }

    /// Returns the 1-indexed cell number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns the zero-based column, left to right.
    #[must_use]
    pub const fn col(self) -> u8 {
        (self.0 - 1) / ZONE_ROWS
    }

    /// Returns the zero-based row, top to bottom.
    #[must_use]
    pub const fn row(self) -> u8 {
        (self.0 - 1) % ZONE_ROWS
    }
}

impl PitchLayout {
    /// Returns the surface-space rectangle of a grid cell.
    #[must_use]
    pub fn zone_rect(&self, zone: ZoneId) -> Rect {
        let rect = self.rect();
        let cell_w = rect.width() / f64::from(ZONE_COLS);
        let cell_h = rect.height() / f64::from(ZONE_ROWS);
        let x0 = rect.x0 + f64::from(zone.col()) * cell_w;
        let y0 = rect.y0 + f64::from(zone.row()) * cell_h;
        Rect::new(x0, y0, x0 + cell_w, y0 + cell_h)
    }

    /// Buckets a surface point into a grid cell.
    ///
    /// Returns `None` for points outside the field rectangle. The caller is
    /// responsible for gating on whether the zone overlay is active.
    #[must_use]
    pub fn zone_at(&self, pt: Point) -> Option<ZoneId> {
        let rect = self.rect();
        // Inclusive on all edges, unlike `Rect::contains`.
        if pt.x < rect.x0 || pt.x > rect.x1 || pt.y < rect.y0 || pt.y > rect.y1 {
            return None;
        }
        let cell_w = rect.width() / f64::from(ZONE_COLS);
        let cell_h = rect.height() / f64::from(ZONE_ROWS);
        // Truncation is floor here because both offsets are non-negative.
        #[expect(clippy::cast_possible_truncation, reason = "bounded by grid size")]
        let col = (((pt.x - rect.x0) / cell_w) as u8).min(ZONE_COLS - 1);
        #[expect(clippy::cast_possible_truncation, reason = "bounded by grid size")]
        let row = (((pt.y - rect.y0) / cell_h) as u8).min(ZONE_ROWS - 1);
        ZoneId::from_cell(col, row)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    fn layout() -> PitchLayout {
        PitchLayout::compute(Size::new(800.0, 600.0)).unwrap()
    }

    #[test]
    fn zone_numbers_are_column_major_top_to_bottom() {
        assert_eq!(ZoneId::from_cell(0, 0).unwrap().number(), 1);
        assert_eq!(ZoneId::from_cell(0, 2).unwrap().number(), 3);
        assert_eq!(ZoneId::from_cell(1, 0).unwrap().number(), 4);
        assert_eq!(ZoneId::from_cell(5, 2).unwrap().number(), 18);
    }

    #[test]
    fn from_number_validates_range() {
        assert!(ZoneId::from_number(0).is_none());
        assert!(ZoneId::from_number(19).is_none());
        let z = ZoneId::from_number(7).unwrap();
        assert_eq!(z.col(), 2);
        assert_eq!(z.row(), 0);
    }

    #[test]
    fn zone_at_buckets_cell_centers() {
        let layout = layout();
        for number in 1..=ZONE_COUNT {
            let zone = ZoneId::from_number(number).unwrap();
            let center = layout.zone_rect(zone).center();
            assert_eq!(layout.zone_at(center), Some(zone));
        }
    }

    #[test]
    fn zone_at_rejects_points_outside_the_field() {
        let layout = layout();
        let rect = layout.rect();
        assert!(layout.zone_at(Point::new(rect.x0 - 1.0, rect.y0)).is_none());
        assert!(
            layout
                .zone_at(Point::new(rect.x1 + 1.0, rect.y1 + 1.0))
                .is_none()
        );
    }

    #[test]
    fn zone_at_handles_the_far_edges() {
        // Points exactly on the max edges still bucket into the last cell.
        let layout = layout();
        let rect = layout.rect();
        let corner = Point::new(rect.x1, rect.y1);
        assert_eq!(layout.zone_at(corner), ZoneId::from_cell(5, 2));
    }

    #[test]
    fn zone_rects_tile_the_field_rect() {
        let layout = layout();
        let rect = layout.rect();
        let mut area = 0.0;
        for number in 1..=ZONE_COUNT {
            area += layout.zone_rect(ZoneId::from_number(number).unwrap()).area();
        }
        assert!((area - rect.area()).abs() < 1e-6);
    }
}
