// Copyright 2026 the Touchline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entity state: players, the ball, and the mutators that keep them coherent.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use touchline_pitch::{FIELD_LENGTH, FIELD_WIDTH};

use crate::formation::{AWAY_LAYOUT, DEFAULT_FORMATION, Formation, formation};
use crate::roster::ROSTER;

/// Home-roster role tags.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    /// Goalkeeper.
    Gk,
    /// Left defender.
    Ld,
    /// Central defender.
    Cd,
    /// Right defender.
    Rd,
    /// Left midfielder.
    Lm,
    /// Central midfielder.
    Cm,
    /// Right midfielder.
    Rm,
    /// Left winger.
    Lw,
    /// Right winger.
    Rw,
    /// Striker.
    Str,
}

impl Role {
    /// Returns the marker label for this role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gk => "GK",
            Self::Ld => "LD",
            Self::Cd => "CD",
            Self::Rd => "RD",
            Self::Lm => "LM",
            Self::Cm => "CM",
            Self::Rm => "RM",
            Self::Lw => "LW",
            Self::Rw => "RW",
            Self::Str => "STR",
        }
    }
}

/// Which team a player reference addresses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Team {
    /// The editable home roster.
    Home,
    /// The opposing markers.
    Away,
}

/// Reference to one player on either team.
///
/// Indices are positions in the respective roster vector. A reference can go
/// stale when a formation change shrinks the home roster; all `Squad`
/// operations treat a stale reference as a no-op.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct PlayerRef {
    /// The team the index refers into.
    pub team: Team,
    /// Index into that team's roster.
    pub index: usize,
}

impl PlayerRef {
    /// Reference to a home player by index.
    #[must_use]
    pub const fn home(index: usize) -> Self {
        Self {
            team: Team::Home,
            index,
        }
    }

    /// Reference to an away player by index.
    #[must_use]
    pub const fn away(index: usize) -> Self {
        Self {
            team: Team::Away,
            index,
        }
    }
}

/// A home-roster player: position, role, optional assigned name.
#[derive(Clone, Debug, PartialEq)]
pub struct HomePlayer {
    position: Point,
    role: Role,
    name: Option<String>,
}

impl HomePlayer {
    /// Current field-metric position in meters (unclamped).
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The role played from this slot.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// The assigned name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// An away-team marker: position and optional static label.
#[derive(Clone, Debug, PartialEq)]
pub struct AwayPlayer {
    position: Point,
    label: Option<&'static str>,
}

impl AwayPlayer {
    /// Current field-metric position in meters (unclamped).
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The marker label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }
}

/// A live binding of the ball to a player at a fixed metric offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Attachment {
    /// The player the ball follows.
    pub player: PlayerRef,
    /// Ball position relative to that player, in meters.
    pub offset: Vec2,
}

/// The ball: a position plus an optional player attachment.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ball {
    position: Point,
    attachment: Option<Attachment>,
}

impl Ball {
    /// Current field-metric position in meters.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The current attachment, if any.
    #[must_use]
    pub fn attachment(&self) -> Option<Attachment> {
        self.attachment
    }
}

/// The complete entity state of the board.
///
/// `Squad` exclusively owns both rosters and the ball. All mutation goes
/// through its methods, which maintain name uniqueness and keep an attached
/// ball glued to its player.
#[derive(Clone, Debug, PartialEq)]
pub struct Squad {
    home: Vec<HomePlayer>,
    away: Vec<AwayPlayer>,
    ball: Ball,
    formation_name: &'static str,
}

impl Squad {
    /// Creates a squad with the default formation, the default away layout,
    /// and the ball on the kickoff spot.
    #[must_use]
    pub fn new() -> Self {
        let mut squad = Self {
            home: Vec::new(),
            away: AWAY_LAYOUT
                .iter()
                .map(|s| AwayPlayer {
                    position: Point::new(s.x, s.y),
                    label: s.label,
                })
                .collect(),
            ball: Ball {
                position: Point::new(FIELD_LENGTH / 2.0, FIELD_WIDTH / 2.0),
                attachment: None,
            },
            formation_name: DEFAULT_FORMATION,
        };
        // The catalog always contains the default formation.
        if let Some(f) = formation(DEFAULT_FORMATION) {
            squad.apply_formation(f);
        }
        squad
    }

    /// The home roster in slot order.
    #[must_use]
    pub fn home(&self) -> &[HomePlayer] {
        &self.home
    }

    /// The away markers in draw order.
    #[must_use]
    pub fn away(&self) -> &[AwayPlayer] {
        &self.away
    }

    /// The ball.
    #[must_use]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Name of the currently applied formation.
    #[must_use]
    pub fn formation_name(&self) -> &'static str {
        self.formation_name
    }

    /// Returns the position of the referenced player, or `None` when the
    /// reference is stale.
    #[must_use]
    pub fn player_position(&self, player: PlayerRef) -> Option<Point> {
        match player.team {
            Team::Home => self.home.get(player.index).map(|p| p.position),
            Team::Away => self.away.get(player.index).map(|p| p.position),
        }
    }

    /// Replaces the entire home roster from a formation preset.
    ///
    /// All name assignments are cleared. A ball attached to a home player is
    /// re-anchored at its old offset against the player now occupying that
    /// slot, or silently detached when the slot no longer exists.
    pub fn apply_formation(&mut self, preset: &Formation) {
        self.formation_name = preset.name;
        self.home = preset
            .slots
            .iter()
            .map(|s| HomePlayer {
                position: Point::new(s.x, s.y),
                role: s.role,
                name: None,
            })
            .collect();

        if let Some(att) = self.ball.attachment {
            if att.player.team == Team::Home {
                match self.home.get(att.player.index) {
                    Some(p) => self.ball.position = p.position + att.offset,
                    None => self.ball.attachment = None,
                }
            }
        }
    }

    /// Assigns or clears a home player's name.
    ///
    /// Passing `None` or an empty string clears the slot. Assigning a
    /// non-empty name first removes it from any other player holding it, so
    /// a name is held at most once. An out-of-range index is a no-op.
    pub fn assign_name(&mut self, index: usize, name: Option<&str>) {
        if index >= self.home.len() {
            return;
        }
        let name = name.filter(|n| !n.is_empty());
        if let Some(new) = name {
            for (i, p) in self.home.iter_mut().enumerate() {
                if i != index && p.name.as_deref() == Some(new) {
                    p.name = None;
                }
            }
        }
        self.home[index].name = name.map(ToString::to_string);
    }

    /// Roster names not currently assigned to any home player, in catalog
    /// order. This is the substitutes list.
    #[must_use]
    pub fn unassigned_names(&self) -> Vec<&'static str> {
        ROSTER
            .iter()
            .copied()
            .filter(|n| !self.home.iter().any(|p| p.name.as_deref() == Some(*n)))
            .collect()
    }

    /// Moves a player to a new field-metric position.
    ///
    /// When the ball is attached to this exact player it is carried along at
    /// its recorded offset. A stale reference is a no-op.
    pub fn move_player(&mut self, player: PlayerRef, to: Point) {
        match player.team {
            Team::Home => {
                let Some(p) = self.home.get_mut(player.index) else {
                    return;
                };
                p.position = to;
            }
            Team::Away => {
                let Some(p) = self.away.get_mut(player.index) else {
                    return;
                };
                p.position = to;
            }
        }
        if let Some(att) = self.ball.attachment {
            if att.player == player {
                self.ball.position = to + att.offset;
            }
        }
    }

    /// Moves the ball directly. Does not touch the attachment; direct ball
    /// control detaches via [`Squad::detach_ball`] before dragging starts.
    pub fn move_ball(&mut self, to: Point) {
        self.ball.position = to;
    }

    /// Clears any ball attachment.
    pub fn detach_ball(&mut self) {
        self.ball.attachment = None;
    }

    /// Attaches the ball to a player at the current relative offset, so the
    /// ball does not jump on attachment. A stale reference is a no-op.
    pub fn attach_ball_to(&mut self, player: PlayerRef) {
        if let Some(pos) = self.player_position(player) {
            self.ball.attachment = Some(Attachment {
                player,
                offset: self.ball.position - pos,
            });
        }
    }
}

impl Default for Squad {
    fn default() -> Self {
        Self::new()
    }
}
