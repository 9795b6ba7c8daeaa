// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless kiosk session.
//!
//! Loads room settings from `rooms.toml`, enters a room, feeds it a seat list
//! and an image size, walks the minimap and the seats with keypad commands,
//! resizes the view, and switches rooms. Engine notifications are printed;
//! engine logs go to stderr.
//!
//! Run:
//! - `cargo run -p seatmap_demos --example room_walkthrough`
//! - `RUST_LOG=seatmap_engine=debug cargo run -p seatmap_demos --example room_walkthrough`

use kurbo::Size;
use seatmap_config::{RoomConfigTable, RoomId};
use seatmap_engine::{EngineListener, NavCommand, NavDomain, SeatMapEngine};
use seatmap_layout::{ImageSize, Seat, SeatId};
use seatmap_sectors::SectorId;
use tracing_subscriber::EnvFilter;

/// Prints every notification, as a kiosk shell would announce it.
#[derive(Debug, Default)]
struct Announcer;

impl EngineListener for Announcer {
    fn sector_count_changed(&mut self, count: usize) {
        println!("  sectors: {count}");
    }

    fn visible_seats_changed(&mut self, seats: &[SeatId]) {
        let ids: Vec<String> = seats.iter().map(|s| s.0.to_string()).collect();
        println!("  visible: [{}]", ids.join(", "));
    }

    fn sector_focus_changed(&mut self, sector: Option<SectorId>) {
        match sector {
            Some(sector) => println!("  minimap cursor: {sector}"),
            None => println!("  minimap cursor cleared"),
        }
    }

    fn seat_focus_changed(&mut self, seat: Option<SeatId>) {
        match seat {
            Some(seat) => println!("  seat cursor: {seat}"),
            None => println!("  seat cursor cleared"),
        }
    }

    fn sector_confirmed(&mut self, sector: SectorId) {
        println!("  showing {sector}");
    }

    fn seat_activated(&mut self, seat: SeatId) {
        println!("  open booking for {seat}");
    }
}

/// The seat feed for room 1, as the booking backend sends it.
const ROOM_1_SEATS: &str = r#"[
    {"id": 101, "x": 120, "y": 640, "w": 40, "h": 40, "status": 1, "iconType": 1, "name": "C1"},
    {"id": 102, "x": 420, "y": 300, "w": 40, "h": 40, "status": 1, "iconType": 1, "name": "A10"},
    {"id": 103, "x": 480, "y": 300, "w": 40, "h": 40, "status": 2, "iconType": 1, "name": "A2"},
    {"id": 104, "x": 540, "y": 300, "w": 40, "h": 40, "status": 1, "iconType": 1, "name": "A1", "useCount": 1},
    {"id": 105, "x": 1400, "y": 100, "w": 40, "h": 40, "status": 1, "iconType": 3, "name": "B1"},
    {"id": 106, "x": 1860, "y": 500, "w": 40, "h": 40, "status": 9, "iconType": 1, "name": "B2"}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let rooms = RoomConfigTable::load(concat!(env!("CARGO_MANIFEST_DIR"), "/rooms.toml"))?;
    println!("Loaded settings for {} rooms", rooms.len());

    let mut engine = SeatMapEngine::new(Announcer);

    println!("Mount a 1000x800 room view");
    engine.mount_container(Size::new(1000.0, 800.0));

    println!("Enter room 1");
    let ticket = engine.enter_room_with(&rooms, RoomId(1));
    let seats: Vec<Seat> = serde_json::from_str(ROOM_1_SEATS)?;
    engine.set_seats(seats);

    println!("Room image decoded at 2000x1000");
    let natural = ImageSize::new(2000.0, 1000.0).ok_or("bad image size")?;
    engine.image_loaded(ticket, natural);
    if let Some(grid) = engine.grid() {
        println!(
            "Grid {}x{}, step {:?}, showing {:?}",
            grid.cols(),
            grid.rows(),
            grid.step(),
            engine.selected_sector()
        );
    }
    for seat in engine.visible_seats() {
        println!("  {} {:?}", seat.name, seat.state());
    }

    println!("Walk the minimap");
    engine.set_active_region(Some(NavDomain::MinimapSector));
    engine.handle_command(NavDomain::MinimapSector, NavCommand::Next);
    engine.handle_command(NavDomain::MinimapSector, NavCommand::Next);
    engine.handle_command(NavDomain::MinimapSector, NavCommand::Confirm);
    println!("Pan offset is now {:?}", engine.pan_offset());

    println!("Walk the seats");
    engine.set_active_region(Some(NavDomain::RoomSeat));
    engine.handle_command(NavDomain::RoomSeat, NavCommand::Next);
    engine.handle_command(NavDomain::RoomSeat, NavCommand::Next);
    engine.handle_command(NavDomain::RoomSeat, NavCommand::Confirm);

    println!("Minimap keys while seats are active are ignored");
    let outcome = engine.handle_command(NavDomain::MinimapSector, NavCommand::Next);
    println!("  {outcome:?}");

    println!("Resize twice within one frame");
    engine.container_resized(Size::new(900.0, 700.0));
    engine.container_resized(Size::new(1200.0, 900.0));
    let ran = engine.animation_frame();
    println!("  recomputed: {ran}, container {:?}", engine.container());

    println!("Enter room 2 before room 1's image finishes loading");
    let stale = engine.enter_room_with(&rooms, RoomId(1));
    let current = engine.enter_room_with(&rooms, RoomId(2));
    println!("  late load: {:?}", engine.image_loaded(stale, natural));
    engine.set_seats(vec![
        Seat::new(SeatId(201), "D1", 60.0, 60.0, 30.0, 30.0),
        Seat::new(SeatId(202), "D2", 300.0, 200.0, 30.0, 30.0),
    ]);
    let small = ImageSize::new(500.0, 350.0).ok_or("bad image size")?;
    println!("  current load: {:?}", engine.image_loaded(current, small));
    if let Some(display) = engine.display() {
        println!("  displayed at {}x{}", display.width, display.height);
    }

    Ok(())
}
