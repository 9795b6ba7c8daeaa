// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap as text.
//!
//! Runs the layout pipeline by hand (display size, seat bounds, sector grid,
//! pan) and draws the resulting minimap in the terminal, then explains why
//! each seat is or is not shown.
//!
//! Run:
//! - `cargo run -p seatmap_demos --example minimap_ascii`

use kurbo::{Point, Size};
use seatmap_layout::{
    BoundsOptions, ImageSize, ScaleOptions, Seat, SeatId, SeatScale, compute_seat_bounds,
    resolve_display_dimensions,
};
use seatmap_nav::PanController;
use seatmap_sectors::SectorGrid;
use seatmap_sectors::minimap::{MinimapLayout, SectorMarkState};
use seatmap_visibility::{DEFAULT_OVERLAP_THRESHOLD, VisibilityParams};

/// Minimap pixels per character cell.
const CELL: f64 = 5.0;

fn main() {
    let viewport = Size::new(1000.0, 600.0);
    let Some(natural) = ImageSize::new(2400.0, 1300.0) else {
        return;
    };
    let seats = vec![
        Seat::new(SeatId(1), "A1", 150.0, 150.0, 40.0, 40.0),
        Seat::new(SeatId(2), "A2", 700.0, 400.0, 40.0, 40.0),
        Seat::new(SeatId(3), "B1", 1300.0, 420.0, 40.0, 40.0),
        Seat::new(SeatId(4), "C1", 2100.0, 1050.0, 40.0, 40.0),
        Seat::new(SeatId(5), "C2", 300.0, 1050.0, 40.0, 40.0),
    ];

    let display = resolve_display_dimensions(natural, viewport, ScaleOptions::default());
    let Some(scale) = SeatScale::new(display, natural.size()) else {
        return;
    };
    let Some(bounds) = compute_seat_bounds(&seats, display, scale, BoundsOptions::new(20.0))
    else {
        return;
    };
    let Some(grid) = SectorGrid::tile(&bounds, viewport, &scale.seat_rects(&seats)) else {
        return;
    };
    let mut pan = PanController::new();
    pan.auto_select(&grid);

    println!(
        "display {}x{}, bounds {:?}, grid {}x{} ({} enabled)",
        display.width,
        display.height,
        bounds.rect(),
        grid.cols(),
        grid.rows(),
        grid.enabled_len()
    );

    let minimap = MinimapLayout::new(Some(display), 0.1, Point::new(8.0, 8.0));
    let dead = minimap.dead_areas(display, &bounds);
    let marks = minimap.sector_marks(&grid, pan.selected(), None);

    // Selected sector as '#', other enabled sectors by number, seatless
    // sectors as ' ', and shaded image areas as '.'.
    let size = minimap.size();
    let mut y = CELL / 2.0;
    while y < size.height {
        let mut line = String::new();
        let mut x = CELL / 2.0;
        while x < size.width {
            let p = Point::new(x, y);
            let c = if dead.iter().any(|r| r.contains(p)) {
                '.'
            } else {
                match marks.iter().find(|m| m.rect.contains(p)) {
                    Some(m) if m.state == SectorMarkState::Selected => '#',
                    Some(m) if m.state == SectorMarkState::Enabled => {
                        char::from_digit(m.id.0 % 10, 10).unwrap_or('?')
                    }
                    _ => ' ',
                }
            };
            line.push(c);
            x += CELL;
        }
        println!("|{line}|");
        y += CELL;
    }

    let params = VisibilityParams::new(viewport, pan.offset())
        .with_active_tile(pan.selected().and_then(|id| grid.get(id)).map(|s| s.tile))
        .with_minimap(Some(minimap.screen_rect()))
        .with_threshold(DEFAULT_OVERLAP_THRESHOLD);
    println!("showing {:?} at offset {:?}", pan.selected(), pan.offset());
    for seat in &seats {
        println!("  {:>3}: {:?}", seat.name, params.classify(scale.seat_rect(seat)));
    }
}
