// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Visibility: which seats the room view shows, and in what order.
//!
//! After each pan or selection change the room view filters its seats down
//! to the ones a visitor can actually see and focus. A seat is visible when
//! all of these hold:
//! - **In the viewport**: its display rectangle intersects the panned
//!   viewport.
//! - **In the active sector**: at least `1 - threshold` of its area lies in
//!   the selected sector's tile. With no selected sector this always holds.
//! - **Not under the minimap**: no more than `threshold` of its area (after
//!   panning into viewport space) is covered by the minimap overlay.
//!
//! Visible seats are returned in natural name order (see [`vname`]), which is
//! also the order keyboard focus walks through them.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size, Vec2};
//! use seatmap_layout::{Seat, SeatId, SeatScale};
//! use seatmap_visibility::{VisibilityParams, visible_seats};
//!
//! let seats = [
//!     Seat::new(SeatId(1), "A10", 100.0, 100.0, 40.0, 40.0),
//!     Seat::new(SeatId(2), "A2", 200.0, 100.0, 40.0, 40.0),
//!     Seat::new(SeatId(3), "A1", 1500.0, 100.0, 40.0, 40.0),
//! ];
//! let params = VisibilityParams::new(Size::new(1000.0, 800.0), Vec2::ZERO)
//!     .with_active_tile(Some(Rect::new(0.0, 0.0, 1000.0, 800.0)))
//!     .with_minimap(Some(Rect::new(8.0, 8.0, 108.0, 58.0)));
//!
//! let names: Vec<_> = visible_seats(&seats, &SeatScale::IDENTITY, &params)
//!     .iter()
//!     .map(|s| s.name.as_str())
//!     .collect();
//! assert_eq!(names, ["A2", "A10"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod filter;
pub mod vname;

pub use filter::{DEFAULT_OVERLAP_THRESHOLD, Visibility, VisibilityParams, visible_seats};
