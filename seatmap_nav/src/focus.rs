// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard focus across the two navigable regions of the room view.
//!
//! The kiosk's keypad produces three commands, already routed to a region by
//! the host: previous, next, and confirm. The minimap region walks the
//! enabled sectors; the room region walks the visible seats. Each region
//! keeps its own cursor, an index into the list the host passes along with
//! each command.
//!
//! ## Minimal example
//!
//! ```
//! use seatmap_nav::focus::{FocusController, NavCommand, NavDomain, NavOutcome};
//!
//! let mut focus = FocusController::new();
//! focus.set_active_region(Some(NavDomain::MinimapSector));
//!
//! // Three enabled sectors: the first command lands on the first one.
//! assert_eq!(focus.handle(NavDomain::MinimapSector, NavCommand::Prev, 3), NavOutcome::SectorFocused(0));
//! assert_eq!(focus.handle(NavDomain::MinimapSector, NavCommand::Prev, 3), NavOutcome::SectorFocused(2));
//! assert_eq!(focus.handle(NavDomain::MinimapSector, NavCommand::Confirm, 3), NavOutcome::SectorConfirmed(2));
//!
//! // The room region is not active, so seat commands are ignored.
//! assert_eq!(focus.handle(NavDomain::RoomSeat, NavCommand::Next, 5), NavOutcome::Ignored);
//! ```

/// A navigable region of the room view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavDomain {
    /// The minimap, navigating enabled sectors.
    MinimapSector,
    /// The room view, navigating visible seats.
    RoomSeat,
}

/// A keypad command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavCommand {
    /// Move to the previous item, wrapping to the last.
    Prev,
    /// Move to the next item, wrapping to the first.
    Next,
    /// Act on the focused item.
    Confirm,
}

/// A cursor position in one region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FocusState {
    /// Region the cursor belongs to.
    pub domain: NavDomain,
    /// Index into that region's list.
    pub index: usize,
}

/// Result of handling a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// Nothing changed.
    Ignored,
    /// The minimap cursor moved to this enabled-sector index.
    SectorFocused(usize),
    /// The sector at this enabled-sector index should be shown.
    SectorConfirmed(usize),
    /// The seat cursor moved to this visible-seat index.
    SeatFocused(usize),
    /// The seat at this visible-seat index was chosen.
    SeatActivated(usize),
}

/// Focus cursors for the minimap and the room view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusController {
    active: Option<NavDomain>,
    sector_cursor: Option<usize>,
    seat_cursor: Option<usize>,
}

fn step(cursor: Option<usize>, command: NavCommand, len: usize) -> usize {
    match (cursor, command) {
        (None, _) => 0,
        (Some(i), NavCommand::Next) => (i + 1) % len,
        (Some(i), NavCommand::Prev) => (i + len - 1) % len,
        (Some(i), NavCommand::Confirm) => i,
    }
}

fn clamp_cursor(cursor: &mut Option<usize>, len: usize) -> bool {
    let clamped = match *cursor {
        Some(_) if len == 0 => None,
        Some(i) => Some(i.min(len - 1)),
        None => None,
    };
    let changed = clamped != *cursor;
    *cursor = clamped;
    changed
}

impl FocusController {
    /// Creates a controller with no active region and no cursors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The region currently receiving commands.
    #[must_use]
    pub fn active_region(&self) -> Option<NavDomain> {
        self.active
    }

    /// Sets the region receiving commands. Cursors are kept.
    pub fn set_active_region(&mut self, domain: Option<NavDomain>) {
        self.active = domain;
    }

    /// Cursor of `domain`.
    #[must_use]
    pub fn cursor(&self, domain: NavDomain) -> Option<usize> {
        match domain {
            NavDomain::MinimapSector => self.sector_cursor,
            NavDomain::RoomSeat => self.seat_cursor,
        }
    }

    /// Cursor of the active region.
    #[must_use]
    pub fn focus(&self) -> Option<FocusState> {
        let domain = self.active?;
        let index = self.cursor(domain)?;
        Some(FocusState { domain, index })
    }

    /// Moves the cursor of `domain` without a command, e.g. to follow a
    /// pointer selection.
    pub fn set_cursor(&mut self, domain: NavDomain, index: Option<usize>) {
        match domain {
            NavDomain::MinimapSector => self.sector_cursor = index,
            NavDomain::RoomSeat => self.seat_cursor = index,
        }
    }

    /// Handles `command` for `domain`, whose list currently has `len` items.
    ///
    /// Commands for a region other than the active one, and commands on an
    /// empty list, are ignored. From no cursor, `Prev` and `Next` land on
    /// index 0 and `Confirm` does nothing.
    pub fn handle(&mut self, domain: NavDomain, command: NavCommand, len: usize) -> NavOutcome {
        if self.active != Some(domain) || len == 0 {
            return NavOutcome::Ignored;
        }
        let cursor = match domain {
            NavDomain::MinimapSector => &mut self.sector_cursor,
            NavDomain::RoomSeat => &mut self.seat_cursor,
        };
        clamp_cursor(cursor, len);
        if command == NavCommand::Confirm && cursor.is_none() {
            return NavOutcome::Ignored;
        }
        let index = step(*cursor, command, len);
        *cursor = Some(index);
        match (domain, command) {
            (NavDomain::MinimapSector, NavCommand::Confirm) => NavOutcome::SectorConfirmed(index),
            (NavDomain::MinimapSector, _) => NavOutcome::SectorFocused(index),
            (NavDomain::RoomSeat, NavCommand::Confirm) => NavOutcome::SeatActivated(index),
            (NavDomain::RoomSeat, _) => NavOutcome::SeatFocused(index),
        }
    }

    /// Keeps the cursor of `domain` inside a list that now has `len` items.
    ///
    /// Returns `true` if the cursor moved or was cleared.
    pub fn clamp(&mut self, domain: NavDomain, len: usize) -> bool {
        match domain {
            NavDomain::MinimapSector => clamp_cursor(&mut self.sector_cursor, len),
            NavDomain::RoomSeat => clamp_cursor(&mut self.seat_cursor, len),
        }
    }

    /// Clears both cursors, keeping the active region.
    pub fn reset(&mut self) {
        self.sector_cursor = None;
        self.seat_cursor = None;
    }
}
