// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Layout: display sizing and seat bounds for floor-plan images.
//!
//! A kiosk floor plan is an image whose natural size rarely matches the
//! container it is shown in. Seats are supplied as rectangles in a
//! *reference* coordinate space (usually the image's natural pixels). This
//! crate answers the first questions every later stage needs:
//! - How large is the image once it is shown? See
//!   [`resolve_display_dimensions`].
//! - Where does each seat land on the displayed image? See [`SeatScale`].
//! - Which part of the displayed image actually contains seats? See
//!   [`compute_seat_bounds`].
//!
//! It also carries the [`Seat`] record shared by the other Seatmap crates and
//! the small rectangle-overlap helpers in [`overlap`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use seatmap_layout::{
//!     BoundsOptions, ImageSize, ScaleOptions, Seat, SeatId, SeatScale, compute_seat_bounds,
//!     resolve_display_dimensions,
//! };
//!
//! let natural = ImageSize::new(2000.0, 1000.0).unwrap();
//! let container = Size::new(1000.0, 800.0);
//! let display = resolve_display_dimensions(natural, container, ScaleOptions::default());
//! assert_eq!((display.width, display.height), (2000.0, 1000.0));
//!
//! let seats = [Seat::new(SeatId(1), "A1", 100.0, 100.0, 40.0, 40.0)];
//! let scale = SeatScale::new(display, natural.size()).unwrap();
//! let bounds = compute_seat_bounds(&seats, display, scale, BoundsOptions::new(10.0)).unwrap();
//! assert_eq!(bounds.min_x, 90.0);
//! assert_eq!(bounds.max_x, 150.0);
//! ```
//!
//! Zero or missing dimensions are a normal "not ready yet" state rather than
//! an error: constructors return `None` and callers simply wait for the next
//! measurement.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod dimensions;
pub mod overlap;
mod seat;

pub use bounds::{BoundsOptions, SeatBounds, SeatScale, compute_seat_bounds};
pub use dimensions::{
    DisplayDimensions, ImageSize, ScaleOptions, resolve_display_dimensions, resolve_display_scale,
};
pub use seat::{Seat, SeatIcon, SeatId, SeatState};
