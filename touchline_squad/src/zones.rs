// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zone annotation state: two independent mark bits per grid cell.

use hashbrown::HashMap;
use touchline_pitch::ZoneId;

bitflags::bitflags! {
    /// Mark bits of one annotation cell.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ZoneMarks: u8 {
        /// The cell is highlighted (plain-click selection).
        const HIGHLIGHT = 0b0000_0001;
        /// The cell is flagged (modifier-click), independent of `HIGHLIGHT`.
        const FLAG = 0b0000_0010;
    }
}

/// Per-cell annotation state for the 18-cell grid.
///
/// Cells are materialized lazily on first toggle and only reset by an
/// explicit toggle back to zero; nothing else clears them (formation changes
/// and overlay toggles leave annotations alone).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ZoneMap {
    cells: HashMap<ZoneId, ZoneMarks>,
}

impl ZoneMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the marks of a cell; untouched cells read as empty.
    #[must_use]
    pub fn marks(&self, zone: ZoneId) -> ZoneMarks {
        self.cells.get(&zone).copied().unwrap_or_default()
    }

    /// Applies a plain click: a cell with any mark set is cleared to zero,
    /// an empty cell gets [`ZoneMarks::HIGHLIGHT`].
    pub fn toggle_primary(&mut self, zone: ZoneId) {
        let entry = self.cells.entry(zone).or_default();
        *entry = if entry.is_empty() {
            ZoneMarks::HIGHLIGHT
        } else {
            ZoneMarks::empty()
        };
    }

    /// Applies a modifier click: toggles [`ZoneMarks::FLAG`] without
    /// disturbing the highlight bit.
    pub fn toggle_flag(&mut self, zone: ZoneId) {
        let entry = self.cells.entry(zone).or_default();
        entry.toggle(ZoneMarks::FLAG);
    }

    /// Iterates over all cells with at least one mark set.
    pub fn marked(&self) -> impl Iterator<Item = (ZoneId, ZoneMarks)> + '_ {
        self.cells
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(z, m)| (*z, *m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone(n: u8) -> ZoneId {
        ZoneId::from_number(n).unwrap()
    }

    #[test]
    fn untouched_cells_read_empty() {
        let map = ZoneMap::new();
        assert!(map.marks(zone(1)).is_empty());
        assert_eq!(map.marked().count(), 0);
    }

    #[test]
    fn plain_click_sets_then_clears() {
        let mut map = ZoneMap::new();
        map.toggle_primary(zone(7));
        assert_eq!(map.marks(zone(7)), ZoneMarks::HIGHLIGHT);

        map.toggle_primary(zone(7));
        assert!(map.marks(zone(7)).is_empty());
    }

    #[test]
    fn modifier_click_toggles_flag_only() {
        let mut map = ZoneMap::new();
        map.toggle_flag(zone(4));
        assert_eq!(map.marks(zone(4)), ZoneMarks::FLAG);

        map.toggle_flag(zone(4));
        assert!(map.marks(zone(4)).is_empty());
    }

    #[test]
    fn flag_is_independent_of_highlight() {
        let mut map = ZoneMap::new();
        map.toggle_primary(zone(12));
        map.toggle_flag(zone(12));
        assert_eq!(
            map.marks(zone(12)),
            ZoneMarks::HIGHLIGHT | ZoneMarks::FLAG
        );

        // A plain click on a marked cell clears everything.
        map.toggle_primary(zone(12));
        assert!(map.marks(zone(12)).is_empty());
    }

    #[test]
    fn marked_skips_cells_cleared_back_to_zero() {
        let mut map = ZoneMap::new();
        map.toggle_primary(zone(1));
        map.toggle_primary(zone(2));
        map.toggle_primary(zone(2));
        let marked: alloc::vec::Vec<_> = map.marked().collect();
        assert_eq!(marked, &[(zone(1), ZoneMarks::HIGHLIGHT)]);
    }
}
