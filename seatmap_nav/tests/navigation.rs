// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `seatmap_nav` crate.
//!
//! These drive the pan and focus controllers together over a real sector
//! grid, the way the room view wires them.

use kurbo::{Rect, Size, Vec2};
use seatmap_layout::SeatBounds;
use seatmap_nav::{FocusController, NavCommand, NavDomain, NavOutcome, PanController};
use seatmap_sectors::{SectorGrid, SectorId};

fn two_by_two() -> SectorGrid {
    let bounds = SeatBounds {
        min_x: 100.0,
        min_y: 50.0,
        max_x: 1900.0,
        max_y: 1450.0,
    };
    // Seats in sectors 2, 3, and 4; sector 1 is empty.
    let seats = [
        Rect::new(1800.0, 100.0, 1840.0, 140.0),
        Rect::new(200.0, 1400.0, 240.0, 1440.0),
        Rect::new(1800.0, 1400.0, 1840.0, 1440.0),
    ];
    SectorGrid::tile(&bounds, Size::new(1000.0, 800.0), &seats).unwrap()
}

#[test]
fn selecting_the_second_sector_pans_to_its_tile() {
    let bounds = SeatBounds {
        min_x: 100.0,
        min_y: 50.0,
        max_x: 1900.0,
        max_y: 850.0,
    };
    let grid = SectorGrid::tile(&bounds, Size::new(1000.0, 800.0), &[]).unwrap();
    let mut pan = PanController::new();
    pan.select(grid.get(SectorId(2)).unwrap());
    assert_eq!(pan.offset(), Vec2::new(-(bounds.min_x + 800.0), -bounds.min_y));
}

#[test]
fn minimap_walk_confirms_enabled_sectors_only() {
    let grid = two_by_two();
    assert_eq!(grid.enabled_len(), 3);

    let mut pan = PanController::new();
    assert_eq!(pan.geometry_changed(Some(&grid)), Some(SectorId(2)));

    let mut focus = FocusController::new();
    focus.set_active_region(Some(NavDomain::MinimapSector));
    let len = grid.enabled_len();
    focus.set_cursor(
        NavDomain::MinimapSector,
        pan.selected().and_then(|id| grid.enabled_index_of(id)),
    );

    assert_eq!(
        focus.handle(NavDomain::MinimapSector, NavCommand::Next, len),
        NavOutcome::SectorFocused(1)
    );
    assert_eq!(
        focus.handle(NavDomain::MinimapSector, NavCommand::Next, len),
        NavOutcome::SectorFocused(2)
    );
    let NavOutcome::SectorConfirmed(index) =
        focus.handle(NavDomain::MinimapSector, NavCommand::Confirm, len)
    else {
        panic!("confirm should commit the focused sector");
    };
    let sector = grid.enabled_sector(index).unwrap();
    assert_eq!(sector.id, SectorId(4));
    pan.select(sector);
    assert_eq!(pan.offset(), Vec2::new(-sector.tile.x0, -sector.tile.y0));

    // Wrap back to the first enabled sector.
    assert_eq!(
        focus.handle(NavDomain::MinimapSector, NavCommand::Next, len),
        NavOutcome::SectorFocused(0)
    );
}

#[test]
fn seat_navigation_never_pans() {
    let grid = two_by_two();
    let mut pan = PanController::new();
    pan.geometry_changed(Some(&grid));
    let before = pan;

    let mut focus = FocusController::new();
    focus.set_active_region(Some(NavDomain::RoomSeat));
    focus.handle(NavDomain::RoomSeat, NavCommand::Prev, 4);
    focus.handle(NavDomain::RoomSeat, NavCommand::Prev, 4);
    assert_eq!(focus.cursor(NavDomain::RoomSeat), Some(3));
    assert_eq!(pan, before);
}
