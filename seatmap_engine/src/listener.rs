// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use seatmap_layout::SeatId;
use seatmap_sectors::SectorId;

/// Receives engine notifications.
///
/// Every method defaults to doing nothing, so hosts implement only what they
/// render or announce. `()` is the silent listener.
pub trait EngineListener {
    /// The number of navigable (enabled) sectors changed.
    fn sector_count_changed(&mut self, count: usize) {
        let _ = count;
    }

    /// The visible seats changed; ids are in focus order.
    fn visible_seats_changed(&mut self, seats: &[SeatId]) {
        let _ = seats;
    }

    /// The minimap cursor moved to another sector, or was cleared.
    fn sector_focus_changed(&mut self, sector: Option<SectorId>) {
        let _ = sector;
    }

    /// The seat cursor moved to another seat, or was cleared.
    fn seat_focus_changed(&mut self, seat: Option<SeatId>) {
        let _ = seat;
    }

    /// A sector was confirmed from the minimap and is now shown.
    fn sector_confirmed(&mut self, sector: SectorId) {
        let _ = sector;
    }

    /// A seat was confirmed; the host should open its booking flow.
    fn seat_activated(&mut self, seat: SeatId) {
        let _ = seat;
    }
}

impl EngineListener for () {}

impl<L: EngineListener + ?Sized> EngineListener for &mut L {
    fn sector_count_changed(&mut self, count: usize) {
        (**self).sector_count_changed(count);
    }

    fn visible_seats_changed(&mut self, seats: &[SeatId]) {
        (**self).visible_seats_changed(seats);
    }

    fn sector_focus_changed(&mut self, sector: Option<SectorId>) {
        (**self).sector_focus_changed(sector);
    }

    fn seat_focus_changed(&mut self, seat: Option<SeatId>) {
        (**self).seat_focus_changed(seat);
    }

    fn sector_confirmed(&mut self, sector: SectorId) {
        (**self).sector_confirmed(sector);
    }

    fn seat_activated(&mut self, seat: SeatId) {
        (**self).seat_activated(seat);
    }
}
