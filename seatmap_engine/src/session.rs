// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use seatmap_config::RoomId;

/// Counter bumped on every room switch.
///
/// Work started for one room (an image decode, a seat fetch) carries the
/// generation it was started under; results from an older generation are
/// dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation after this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen {}", self.0)
    }
}

/// Proof that an image load was requested for a particular room visit.
///
/// Returned by [`SeatMapEngine::enter_room`](crate::SeatMapEngine::enter_room)
/// and handed back with the decoded size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageLoadTicket {
    room: RoomId,
    generation: Generation,
}

impl ImageLoadTicket {
    pub(crate) fn new(room: RoomId, generation: Generation) -> Self {
        Self { room, generation }
    }

    /// Room the image belongs to.
    #[must_use]
    pub fn room(&self) -> RoomId {
        self.room
    }

    /// Generation the load was requested under.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }
}

/// What happened to a finished image load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The size was recorded and the layout recomputed.
    Applied,
    /// The ticket belongs to an earlier room visit; nothing changed.
    Discarded,
}
