// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimap projection: where the minimap sits on screen and what it draws.
//!
//! The minimap is a scaled-down copy of the displayed floor plan overlaid on
//! the room view. It shows the unique region of every sector, shades the
//! parts of the image outside the seat bounds, and labels the selected
//! sector. Its on-screen rectangle is also what hides seats underneath it
//! (see `seatmap_visibility`).
//!
//! All rectangles returned here are in *minimap-local* coordinates, with the
//! origin at the minimap's top-left corner, except [`MinimapLayout::screen_rect`]
//! which is in viewport coordinates.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use seatmap_layout::{DisplayDimensions, SeatBounds};
//! use seatmap_sectors::minimap::{MinimapLayout, SectorMarkState};
//! use seatmap_sectors::{SectorGrid, SectorId};
//!
//! let display = DisplayDimensions::new(2000.0, 1000.0);
//! let bounds = SeatBounds { min_x: 0.0, min_y: 0.0, max_x: 2000.0, max_y: 1000.0 };
//! let grid = SectorGrid::tile(&bounds, Size::new(1000.0, 1000.0), &[]).unwrap();
//!
//! let minimap = MinimapLayout::new(Some(display), 0.1, Point::new(8.0, 8.0));
//! assert_eq!(minimap.size(), Size::new(200.0, 100.0));
//!
//! let marks = minimap.sector_marks(&grid, Some(SectorId(2)), None);
//! assert_eq!(marks[1].state, SectorMarkState::Selected);
//! assert_eq!(marks[1].rect.x0, 100.0);
//! ```

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect, Size};
use seatmap_layout::{DisplayDimensions, SeatBounds};
use smallvec::SmallVec;

use crate::grid::{SectorGrid, SectorId};

/// Minimap size used before the floor plan has been measured.
pub const FALLBACK_MINIMAP_SIZE: Size = Size::new(250.0, 110.0);

/// Ratio of a label's font size to the smaller side of its sector mark.
pub const LABEL_FONT_RATIO: f64 = 0.3;

/// Outset of the focus ring drawn around the sector under the minimap cursor.
pub const FOCUS_RING_OUTSET: f64 = 3.0;

/// How a sector is drawn on the minimap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectorMarkState {
    /// The sector currently shown in the room view.
    Selected,
    /// A sector that can be navigated to.
    Enabled,
    /// A sector without seats.
    Disabled,
}

/// The sector number drawn on the selected sector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorLabel {
    /// Center of the label, in minimap-local coordinates.
    pub anchor: Point,
    /// Font size in pixels.
    pub font_size: f64,
}

/// One sector as drawn on the minimap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectorMark {
    /// The sector this mark belongs to.
    pub id: SectorId,
    /// The sector's unique region in minimap-local coordinates.
    pub rect: Rect,
    /// Draw state.
    pub state: SectorMarkState,
    /// Label, present only for the selected sector.
    pub label: Option<SectorLabel>,
    /// Focus ring, present only for the sector under the minimap cursor.
    pub focus_ring: Option<Rect>,
}

/// Placement and scale of the minimap overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinimapLayout {
    scale: f64,
    size: Size,
    origin: Point,
}

impl MinimapLayout {
    /// Creates a minimap `scale_factor` times the size of `display`, placed
    /// with its top-left corner at `origin` in viewport coordinates.
    ///
    /// Without usable display dimensions the minimap falls back to
    /// [`FALLBACK_MINIMAP_SIZE`].
    #[must_use]
    pub fn new(display: Option<DisplayDimensions>, scale_factor: f64, origin: Point) -> Self {
        let size = match display.filter(|d| !d.is_empty()) {
            Some(d) => Size::new(
                (d.width * scale_factor).round(),
                (d.height * scale_factor).round(),
            ),
            None => FALLBACK_MINIMAP_SIZE,
        };
        Self {
            scale: scale_factor,
            size,
            origin,
        }
    }

    /// Display-to-minimap scale factor.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Size of the minimap in pixels.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The minimap's rectangle in viewport coordinates.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Maps a display-space rectangle into minimap-local coordinates.
    #[must_use]
    pub fn project(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 * self.scale,
            rect.y0 * self.scale,
            rect.x1 * self.scale,
            rect.y1 * self.scale,
        )
    }

    /// Shaded areas of the image that lie outside the seat bounds.
    ///
    /// Up to four rectangles: a full-width band above and below the bounds,
    /// and a strip to the left and right spanning the bounds' height. Empty
    /// areas are omitted.
    #[must_use]
    pub fn dead_areas(&self, display: DisplayDimensions, bounds: &SeatBounds) -> SmallVec<[Rect; 4]> {
        let image = self.project(display.rect());
        let live = self.project(bounds.rect());
        let mut out = SmallVec::new();
        if live.y0 > image.y0 {
            out.push(Rect::new(image.x0, image.y0, image.x1, live.y0));
        }
        if live.y1 < image.y1 {
            out.push(Rect::new(image.x0, live.y1, image.x1, image.y1));
        }
        if live.x0 > image.x0 {
            out.push(Rect::new(image.x0, live.y0, live.x0, live.y1));
        }
        if live.x1 < image.x1 {
            out.push(Rect::new(live.x1, live.y0, image.x1, live.y1));
        }
        out
    }

    /// Builds the draw list for every sector in `grid`.
    ///
    /// `focused` is the minimap cursor as an index into the enabled sectors.
    #[must_use]
    pub fn sector_marks(
        &self,
        grid: &SectorGrid,
        selected: Option<SectorId>,
        focused: Option<usize>,
    ) -> Vec<SectorMark> {
        let focused_index = focused.and_then(|i| grid.enabled_to_all(i));
        grid.all()
            .iter()
            .enumerate()
            .map(|(index, sector)| {
                let rect = self.project(sector.unique);
                let state = if Some(sector.id) == selected {
                    SectorMarkState::Selected
                } else if sector.enabled {
                    SectorMarkState::Enabled
                } else {
                    SectorMarkState::Disabled
                };
                let label = (state == SectorMarkState::Selected).then(|| SectorLabel {
                    anchor: Point::new(sector.center.x * self.scale, sector.center.y * self.scale),
                    font_size: rect.width().min(rect.height()) * LABEL_FONT_RATIO,
                });
                let focus_ring = (focused_index == Some(index))
                    .then(|| rect.inflate(FOCUS_RING_OUTSET, FOCUS_RING_OUTSET));
                SectorMark {
                    id: sector.id,
                    rect,
                    state,
                    label,
                    focus_ring,
                }
            })
            .collect()
    }

    /// Finds the enabled sector under a point given in minimap-local
    /// coordinates, for pointer selection on the minimap.
    #[must_use]
    pub fn sector_at(&self, grid: &SectorGrid, point: Point) -> Option<SectorId> {
        grid.enabled()
            .find(|s| self.project(s.unique).contains(point))
            .map(|s| s.id)
    }
}
