// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};
use seatmap_layout::overlap::{covered_fraction, overlaps};
use seatmap_layout::{Seat, SeatScale};

use crate::vname::compare_vnames;

/// Default share of a seat that may fall outside its sector, or under the
/// minimap, before it is hidden.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.1;

/// Everything the visibility tests depend on, captured for one pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityParams {
    /// Size of the viewport (the room view container).
    pub viewport: Size,
    /// Current pan offset applied to the displayed image.
    pub pan: Vec2,
    /// Tile of the selected sector, in display space.
    pub active_tile: Option<Rect>,
    /// Minimap rectangle, in viewport space.
    pub minimap: Option<Rect>,
    /// Overlap threshold in `0.0..=1.0`.
    pub threshold: f64,
}

/// Outcome of classifying a single seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// The seat is shown and focusable.
    Visible,
    /// The seat does not intersect the panned viewport.
    OutsideViewport,
    /// Too little of the seat lies inside the selected sector.
    OutsideSector,
    /// Too much of the seat is covered by the minimap.
    UnderMinimap,
}

impl VisibilityParams {
    /// Creates parameters with no active sector, no minimap, and the default
    /// threshold.
    #[must_use]
    pub fn new(viewport: Size, pan: Vec2) -> Self {
        Self {
            viewport,
            pan,
            active_tile: None,
            minimap: None,
            threshold: DEFAULT_OVERLAP_THRESHOLD,
        }
    }

    /// Sets the active sector tile.
    #[must_use]
    pub fn with_active_tile(mut self, tile: Option<Rect>) -> Self {
        self.active_tile = tile;
        self
    }

    /// Sets the minimap rectangle.
    #[must_use]
    pub fn with_minimap(mut self, minimap: Option<Rect>) -> Self {
        self.minimap = minimap;
        self
    }

    /// Sets the overlap threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The part of the displayed image currently inside the viewport, in
    /// display space.
    #[must_use]
    pub fn visible_area(&self) -> Rect {
        Rect::from_origin_size((-self.pan).to_point(), self.viewport)
    }

    /// `seat` (display space) intersects the panned viewport.
    #[must_use]
    pub fn in_viewport(&self, seat: Rect) -> bool {
        overlaps(seat, self.visible_area())
    }

    /// At least `1 - threshold` of `seat` lies inside the active tile.
    ///
    /// Always `true` without an active sector; always `false` for seats with
    /// no area while a sector is active.
    #[must_use]
    pub fn in_active_sector(&self, seat: Rect) -> bool {
        match self.active_tile {
            None => true,
            Some(tile) => covered_fraction(seat, tile).is_some_and(|f| f >= 1.0 - self.threshold),
        }
    }

    /// More than `threshold` of `seat`, once panned into viewport space, lies
    /// under the minimap.
    #[must_use]
    pub fn hidden_by_minimap(&self, seat: Rect) -> bool {
        self.minimap
            .and_then(|minimap| covered_fraction(seat + self.pan, minimap))
            .is_some_and(|f| f > self.threshold)
    }

    /// Classifies a display-space seat rectangle.
    #[must_use]
    pub fn classify(&self, seat: Rect) -> Visibility {
        if !self.in_viewport(seat) {
            Visibility::OutsideViewport
        } else if !self.in_active_sector(seat) {
            Visibility::OutsideSector
        } else if self.hidden_by_minimap(seat) {
            Visibility::UnderMinimap
        } else {
            Visibility::Visible
        }
    }

    /// Returns `true` if the display-space seat rectangle passes every test.
    #[must_use]
    pub fn is_visible(&self, seat: Rect) -> bool {
        self.classify(seat) == Visibility::Visible
    }
}

/// Filters `seats` down to those visible under `params`, in natural name
/// order.
///
/// `scale` maps seats from reference space onto the displayed image. Seats
/// with equal sort keys keep their input order.
#[must_use]
pub fn visible_seats<'a>(
    seats: &'a [Seat],
    scale: &SeatScale,
    params: &VisibilityParams,
) -> Vec<&'a Seat> {
    let mut visible: Vec<&Seat> = seats
        .iter()
        .filter(|seat| params.is_visible(scale.seat_rect(seat)))
        .collect();
    visible.sort_by(|a, b| compare_vnames(&a.name, &b.name));
    visible
}
