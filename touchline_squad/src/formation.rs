// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static formation presets and the default away-team layout.
//!
//! A formation is a named ordered list of (position, role) slots in
//! field-metric meters. Selecting one replaces the entire home roster; see
//! [`Squad::apply_formation`](crate::Squad::apply_formation).

use crate::squad::Role;

/// One home-roster slot of a formation preset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FormationSlot {
    /// Field-metric x position in meters.
    pub x: f64,
    /// Field-metric y position in meters.
    pub y: f64,
    /// Role played from this slot.
    pub role: Role,
}

const fn slot(x: f64, y: f64, role: Role) -> FormationSlot {
    FormationSlot { x, y, role }
}

/// A named formation preset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Formation {
    /// Display name, e.g. `"3-4-1"`.
    pub name: &'static str,
    /// Ordered roster slots, goalkeeper first.
    pub slots: &'static [FormationSlot],
}

/// Name of the formation a fresh board starts with.
pub const DEFAULT_FORMATION: &str = "3-4-1";

/// All formation presets, in menu order.
pub const FORMATIONS: &[Formation] = &[
    Formation {
        name: "3-3-2",
        slots: &[
            slot(8.0, 34.0, Role::Gk),
            slot(18.0, 17.0, Role::Ld),
            slot(18.0, 34.0, Role::Cd),
            slot(18.0, 51.0, Role::Rd),
            slot(34.0, 20.0, Role::Lm),
            slot(34.0, 34.0, Role::Cm),
            slot(34.0, 48.0, Role::Rm),
            slot(50.0, 26.0, Role::Str),
            slot(50.0, 42.0, Role::Str),
        ],
    },
    Formation {
        name: "3-2-3",
        slots: &[
            slot(8.0, 34.0, Role::Gk),
            slot(18.0, 17.0, Role::Ld),
            slot(18.0, 34.0, Role::Cd),
            slot(18.0, 51.0, Role::Rd),
            slot(34.0, 24.0, Role::Cm),
            slot(34.0, 44.0, Role::Cm),
            slot(46.0, 17.0, Role::Lw),
            slot(46.0, 34.0, Role::Str),
            slot(46.0, 51.0, Role::Rw),
        ],
    },
    Formation {
        name: "2-3-3",
        slots: &[
            slot(8.0, 34.0, Role::Gk),
            slot(18.0, 17.0, Role::Ld),
            slot(18.0, 51.0, Role::Rd),
            slot(34.0, 20.0, Role::Lm),
            slot(34.0, 34.0, Role::Cm),
            slot(34.0, 48.0, Role::Rm),
            slot(46.0, 17.0, Role::Lw),
            slot(46.0, 34.0, Role::Str),
            slot(46.0, 51.0, Role::Rw),
        ],
    },
    Formation {
        name: "4-3-1",
        slots: &[
            slot(8.0, 34.0, Role::Gk),
            slot(18.0, 15.0, Role::Ld),
            slot(18.0, 28.0, Role::Cd),
            slot(18.0, 40.0, Role::Cd),
            slot(18.0, 53.0, Role::Rd),
            slot(34.0, 20.0, Role::Lm),
            slot(34.0, 34.0, Role::Cm),
            slot(34.0, 48.0, Role::Rm),
            slot(50.0, 34.0, Role::Str),
        ],
    },
    Formation {
        name: "3-4-1",
        slots: &[
            slot(8.0, 34.0, Role::Gk),
            slot(18.0, 17.0, Role::Ld),
            slot(18.0, 34.0, Role::Cd),
            slot(18.0, 51.0, Role::Rd),
            slot(34.0, 6.0, Role::Lm),
            slot(34.0, 24.0, Role::Cm),
            slot(34.0, 44.0, Role::Cm),
            slot(34.0, 62.0, Role::Rm),
            slot(46.0, 34.0, Role::Str),
        ],
    },
    Formation {
        name: "2-4-2",
        slots: &[
            slot(8.0, 34.0, Role::Gk),
            slot(18.0, 26.0, Role::Ld),
            slot(18.0, 42.0, Role::Rd),
            slot(34.0, 6.0, Role::Lm),
            slot(34.0, 24.0, Role::Cm),
            slot(34.0, 44.0, Role::Cm),
            slot(34.0, 62.0, Role::Rm),
            slot(50.0, 26.0, Role::Str),
            slot(50.0, 42.0, Role::Str),
        ],
    },
];

/// Looks up a formation preset by name.
#[must_use]
pub fn formation(name: &str) -> Option<&'static Formation> {
    FORMATIONS.iter().find(|f| f.name == name)
}

/// One away-team slot of the default layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AwaySlot {
    /// Field-metric x position in meters.
    pub x: f64,
    /// Field-metric y position in meters.
    pub y: f64,
    /// Optional marker label; only the goalkeeper carries one.
    pub label: Option<&'static str>,
}

const fn away(x: f64, y: f64, label: Option<&'static str>) -> AwaySlot {
    AwaySlot { x, y, label }
}

/// Default away-team layout: a mirrored 3-3-2 on the right half.
pub const AWAY_LAYOUT: &[AwaySlot] = &[
    away(97.0, 34.0, Some("GK")),
    away(87.0, 17.0, None),
    away(87.0, 34.0, None),
    away(87.0, 51.0, None),
    away(71.0, 20.0, None),
    away(71.0, 34.0, None),
    away(71.0, 48.0, None),
    away(60.0, 26.0, None),
    away(60.0, 42.0, None),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_formation_starts_with_a_goalkeeper() {
        for f in FORMATIONS {
            assert_eq!(f.slots[0].role, Role::Gk, "{} lacks a leading GK", f.name);
        }
    }

    #[test]
    fn every_formation_fields_nine() {
        for f in FORMATIONS {
            assert_eq!(f.slots.len(), 9, "{} has wrong roster size", f.name);
        }
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(formation("3-4-1").unwrap().name, "3-4-1");
        assert!(formation("5-5-5").is_none());
        assert!(formation(DEFAULT_FORMATION).is_some());
    }

    #[test]
    fn away_layout_labels_only_the_goalkeeper() {
        let labeled = AWAY_LAYOUT.iter().filter(|s| s.label.is_some()).count();
        assert_eq!(labeled, 1);
        assert_eq!(AWAY_LAYOUT[0].label, Some("GK"));
    }
}
