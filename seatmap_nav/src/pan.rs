// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan controller: which sector the room view shows.
//!
//! ## Usage
//!
//! 1) After every recompute in which the tile grid, bounds, or display size
//!    changed, call [`PanController::geometry_changed`]. It drops the old
//!    selection and opens the grid's initial sector.
//! 2) When the visitor picks a sector, call [`PanController::select`].
//! 3) On a room switch, call [`PanController::reset`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Rect, Size, Vec2};
//! use seatmap_layout::SeatBounds;
//! use seatmap_nav::pan::PanController;
//! use seatmap_sectors::{SectorGrid, SectorId};
//!
//! let bounds = SeatBounds { min_x: 100.0, min_y: 50.0, max_x: 1900.0, max_y: 850.0 };
//! let seats = [Rect::new(200.0, 100.0, 240.0, 140.0), Rect::new(1800.0, 100.0, 1840.0, 140.0)];
//! let grid = SectorGrid::tile(&bounds, Size::new(1000.0, 800.0), &seats).unwrap();
//!
//! let mut pan = PanController::default();
//! assert_eq!(pan.geometry_changed(Some(&grid)), Some(SectorId(1)));
//! assert_eq!(pan.offset(), Vec2::new(-100.0, -50.0));
//!
//! pan.select(grid.get(SectorId(2)).unwrap());
//! assert_eq!(pan.offset(), Vec2::new(-900.0, -50.0));
//! ```

use kurbo::Vec2;
use seatmap_sectors::{Sector, SectorGrid, SectorId};

/// Tracks the selected sector and the pan offset that brings it into view.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanController {
    offset: Vec2,
    selected: Option<SectorId>,
}

impl PanController {
    /// Creates a controller with no selection and zero offset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Translation to apply to the displayed image.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Currently selected sector.
    #[must_use]
    pub fn selected(&self) -> Option<SectorId> {
        self.selected
    }

    /// Selects `sector` and pans its tile's top-left corner to the viewport
    /// origin. Returns the new offset.
    pub fn select(&mut self, sector: &Sector) -> Vec2 {
        self.selected = Some(sector.id);
        self.offset = Vec2::new(-sector.tile.x0, -sector.tile.y0);
        self.offset
    }

    /// Selects the grid's initial sector if nothing is selected yet.
    ///
    /// Returns the sector selected by this call, if any.
    pub fn auto_select(&mut self, grid: &SectorGrid) -> Option<SectorId> {
        if self.selected.is_some() {
            return None;
        }
        let sector = grid.initial_sector()?;
        self.select(sector);
        Some(sector.id)
    }

    /// Handles new geometry: the previous selection is dropped, the offset
    /// returns to zero, and the initial sector of `grid` (if any) is selected.
    pub fn geometry_changed(&mut self, grid: Option<&SectorGrid>) -> Option<SectorId> {
        self.reset();
        grid.and_then(|g| self.auto_select(g))
    }

    /// Clears the selection and the offset.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
