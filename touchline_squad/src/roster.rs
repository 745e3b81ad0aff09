// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The candidate name catalog.

/// Fixed ordered list of candidate player names.
///
/// The naming affordance offers exactly these choices; names not on the
/// roster never enter the model through the board surface. The complement of
/// the currently assigned set is the substitutes list.
pub const ROSTER: &[&str] = &[
    "Alex",
    "Charlie",
    "Connery",
    "Elijah",
    "Hayden",
    "Kabir",
    "Knox",
    "Levi",
    "Linus",
    "Oliver",
    "Rocket",
    "Sakima",
    "Sebastian",
];
