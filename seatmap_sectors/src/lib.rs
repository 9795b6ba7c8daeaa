// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatmap Sectors: sliding-window tiling of a seat map into viewport-sized sectors.
//!
//! A floor plan is usually much larger than the kiosk screen. Instead of free
//! panning, the navigable region ([`SeatBounds`](seatmap_layout::SeatBounds))
//! is cut into a grid of *sectors*, each exactly one viewport in size, so a
//! visitor can step through the plan with a handful of keys.
//!
//! [`SectorGrid::tile`] builds that grid:
//! - Tiles are evenly spaced and the first and last tile of each axis sit
//!   flush with the bounds edges, so neighbouring tiles overlap whenever the
//!   bounds are not an exact multiple of the viewport.
//! - Each sector also gets a *unique region*: the tiles are split at the
//!   midpoint of their overlap so that the unique regions partition the bounds.
//!   The minimap draws these instead of the overlapping tiles.
//! - A sector is *enabled* when at least one seat overlaps its tile. Only
//!   enabled sectors take part in keyboard navigation, so the grid exposes
//!   both the full grid and the enabled subset, with pure index translation
//!   between them.
//!
//! The [`minimap`] module projects the grid into minimap space.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use seatmap_layout::SeatBounds;
//! use seatmap_sectors::{SectorGrid, SectorId};
//!
//! let bounds = SeatBounds { min_x: 100.0, min_y: 0.0, max_x: 1900.0, max_y: 800.0 };
//! let seats = [Rect::new(150.0, 100.0, 190.0, 140.0)];
//! let grid = SectorGrid::tile(&bounds, Size::new(1000.0, 800.0), &seats).unwrap();
//!
//! assert_eq!((grid.cols(), grid.rows()), (2, 1));
//! let second = grid.get(SectorId(2)).unwrap();
//! assert_eq!(second.tile.x0, 900.0);
//! assert_eq!(second.unique.x0, 1000.0);
//!
//! // Only the first sector holds a seat.
//! assert_eq!(grid.enabled_len(), 1);
//! assert_eq!(grid.enabled_index_of(SectorId(1)), Some(0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod grid;
pub mod minimap;

pub use grid::{Sector, SectorGrid, SectorId};
