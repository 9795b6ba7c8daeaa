// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Engine: the room view's state machine.
//!
//! [`SeatMapEngine`] ties the Seatmap crates together for one kiosk screen.
//! The host feeds it inputs as they arrive, in any order:
//!
//! - [`SeatMapEngine::enter_room`] when the visitor picks a room. This
//!   returns an [`ImageLoadTicket`] for the room image.
//! - [`SeatMapEngine::set_seats`] when the seat list arrives.
//! - [`SeatMapEngine::mount_container`] once the room view is laid out, then
//!   [`SeatMapEngine::container_resized`] and
//!   [`SeatMapEngine::animation_frame`] as it changes size.
//! - [`SeatMapEngine::image_loaded`] with the ticket once the image decodes.
//!   Tickets from an earlier room are discarded.
//!
//! Each input triggers a recompute cycle: display size, seat bounds, and the
//! sector grid are rebuilt. When the geometry changes, the initial sector is
//! selected and panned into view. The visible seats are then refreshed.
//! Until every input is present the engine simply has no layout.
//!
//! Keypad input arrives pre-routed as a region plus a command
//! ([`SeatMapEngine::handle_command`]). Changes are reported through an
//! [`EngineListener`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use seatmap_config::{RoomConfig, RoomId};
//! use seatmap_engine::{LoadOutcome, SeatMapEngine};
//! use seatmap_layout::{ImageSize, Seat, SeatId};
//! use seatmap_sectors::SectorId;
//!
//! let mut engine = SeatMapEngine::default();
//! engine.mount_container(Size::new(1000.0, 800.0));
//! let ticket = engine.enter_room(RoomId(1), RoomConfig { seat_bounds_margin: 0.0, ..RoomConfig::default() });
//! engine.set_seats(vec![
//!     Seat::new(SeatId(1), "A1", 400.0, 100.0, 40.0, 40.0),
//!     Seat::new(SeatId(2), "A2", 1860.0, 100.0, 40.0, 40.0),
//!     Seat::new(SeatId(3), "B1", 100.0, 700.0, 40.0, 40.0),
//! ]);
//! let natural = ImageSize::new(2000.0, 800.0).unwrap();
//! assert_eq!(engine.image_loaded(ticket, natural), LoadOutcome::Applied);
//!
//! assert_eq!(engine.grid().unwrap().enabled_len(), 2);
//! assert_eq!(engine.selected_sector(), Some(SectorId(1)));
//! assert_eq!(engine.visible_seat_ids(), [SeatId(1), SeatId(3)]);
//!
//! engine.select_sector(SectorId(2)).unwrap();
//! assert_eq!(engine.pan_offset(), Vec2::new(-900.0, -100.0));
//! assert_eq!(engine.visible_seat_ids(), [SeatId(2)]);
//! ```

mod engine;
mod error;
mod listener;
mod session;

pub use engine::{Layout, SeatMapEngine};
pub use error::EngineError;
pub use listener::EngineListener;
pub use session::{Generation, ImageLoadTicket, LoadOutcome};

pub use seatmap_nav::{NavCommand, NavDomain, NavOutcome};
