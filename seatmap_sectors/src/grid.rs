// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `ceil`
use kurbo::{Point, Rect, Size, Vec2};
use seatmap_layout::SeatBounds;
use seatmap_layout::overlap::overlaps;

/// Identifier of a sector, assigned in row-major order starting at 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectorId(pub u32);

impl SectorId {
    /// The top-left sector; always the first candidate for auto-selection.
    pub const FIRST: Self = Self(1);
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sector {}", self.0)
    }
}

/// One viewport-sized tile of the seat map.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    /// Row-major identifier, starting at 1.
    pub id: SectorId,
    /// Grid row.
    pub row: u32,
    /// Grid column.
    pub col: u32,
    /// The tile itself, exactly one viewport in size. Neighbouring tiles may
    /// overlap.
    pub tile: Rect,
    /// Non-overlapping part of the tile used for minimap labelling.
    pub unique: Rect,
    /// Center of [`Sector::unique`].
    pub center: Point,
    /// `true` if at least one seat overlaps [`Sector::tile`].
    pub enabled: bool,
}

/// A tiled seat map: every sector plus the enabled subset used for navigation.
///
/// Two index spaces exist: *grid* indices into [`SectorGrid::all`] and
/// *enabled* indices into the navigation order. The `*_to_*` and `*_index_of`
/// methods translate between them without side effects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectorGrid {
    sectors: Vec<Sector>,
    enabled: Vec<usize>,
    rows: u32,
    cols: u32,
    tile_size: Size,
    step: Vec2,
}

/// Placement of one tile along a single axis.
#[derive(Clone, Copy, Debug)]
struct AxisSpan {
    start: f64,
    end: f64,
    unique_start: f64,
    unique_end: f64,
}

/// Number of tiles needed to cover `length` with windows of `extent`; at least one.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the count is a positive whole number; huge values saturate"
)]
fn tile_count(length: f64, extent: f64) -> u32 {
    let n = (length / extent).ceil();
    if n.is_finite() && n >= 1.0 { n as u32 } else { 1 }
}

/// Lays tiles of `extent` over `min..max` and splits their overlaps.
///
/// The first tile starts at `min` and the last ends at `max` (a single tile
/// that is longer than the span is cut back to `max` for its unique part).
/// Neighbours share the boundary halfway through their overlap.
fn axis_spans(min: f64, max: f64, extent: f64) -> Vec<AxisSpan> {
    let count = tile_count(max - min, extent);
    let step = if count > 1 {
        (max - min - extent) / f64::from(count - 1)
    } else {
        0.0
    };
    let start_of = |i: u32| min + f64::from(i) * step;
    let boundary = |i: u32| (start_of(i) + start_of(i + 1)) / 2.0 + extent / 2.0;

    (0..count)
        .map(|i| {
            let start = start_of(i);
            AxisSpan {
                start,
                end: start + extent,
                unique_start: if i == 0 { min } else { boundary(i - 1) },
                unique_end: if i + 1 == count { max } else { boundary(i) },
            }
        })
        .collect()
}

impl SectorGrid {
    /// Tiles `bounds` with viewport-sized sectors.
    ///
    /// `seat_rects` are the seats in display space; a sector is enabled when
    /// any of them overlaps its tile with positive area. Seats only partly
    /// inside a tile still enable it.
    ///
    /// Returns `None` if `viewport` has a zero, negative, or non-finite side.
    #[must_use]
    pub fn tile(bounds: &SeatBounds, viewport: Size, seat_rects: &[Rect]) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(viewport.width) || !valid(viewport.height) {
            return None;
        }

        let columns = axis_spans(bounds.min_x, bounds.max_x, viewport.width);
        let rows = axis_spans(bounds.min_y, bounds.max_y, viewport.height);
        let step = Vec2::new(
            columns.get(1).map_or(0.0, |c| c.start - columns[0].start),
            rows.get(1).map_or(0.0, |r| r.start - rows[0].start),
        );

        let mut sectors = Vec::with_capacity(columns.len() * rows.len());
        let mut enabled = Vec::new();
        let mut next_id = 1_u32;
        for (row, ry) in (0_u32..).zip(&rows) {
            for (col, cx) in (0_u32..).zip(&columns) {
                let tile = Rect::new(cx.start, ry.start, cx.end, ry.end);
                let unique =
                    Rect::new(cx.unique_start, ry.unique_start, cx.unique_end, ry.unique_end);
                let is_enabled = seat_rects.iter().any(|seat| overlaps(*seat, tile));
                if is_enabled {
                    enabled.push(sectors.len());
                }
                sectors.push(Sector {
                    id: SectorId(next_id),
                    row,
                    col,
                    tile,
                    unique,
                    center: unique.center(),
                    enabled: is_enabled,
                });
                next_id += 1;
            }
        }

        #[expect(
            clippy::cast_possible_truncation,
            reason = "span counts come from tile_count, which returns u32"
        )]
        let (rows, cols) = (rows.len() as u32, columns.len() as u32);
        Some(Self {
            sectors,
            enabled,
            rows,
            cols,
            tile_size: viewport,
            step,
        })
    }

    /// Number of grid rows.
    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of grid columns.
    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Size of every tile (the viewport size the grid was built for).
    #[must_use]
    pub fn tile_size(&self) -> Size {
        self.tile_size
    }

    /// Distance between the origins of neighbouring tiles on each axis
    /// (zero on an axis with a single tile).
    #[must_use]
    pub fn step(&self) -> Vec2 {
        self.step
    }

    /// Every sector in row-major order.
    #[must_use]
    pub fn all(&self) -> &[Sector] {
        &self.sectors
    }

    /// Returns `true` if the grid has no sectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    /// Iterates enabled sectors in navigation order.
    pub fn enabled(&self) -> impl Iterator<Item = &Sector> {
        self.enabled.iter().map(|&i| &self.sectors[i])
    }

    /// Number of enabled sectors.
    #[must_use]
    pub fn enabled_len(&self) -> usize {
        self.enabled.len()
    }

    /// Returns the enabled sector at navigation index `index`.
    #[must_use]
    pub fn enabled_sector(&self, index: usize) -> Option<&Sector> {
        self.enabled_to_all(index).map(|i| &self.sectors[i])
    }

    /// Looks up a sector by id.
    #[must_use]
    pub fn get(&self, id: SectorId) -> Option<&Sector> {
        self.all_index_of(id).map(|i| &self.sectors[i])
    }

    /// Grid index of the sector with `id`.
    #[must_use]
    pub fn all_index_of(&self, id: SectorId) -> Option<usize> {
        let index = usize::try_from(id.0.checked_sub(1)?).ok()?;
        self.sectors
            .get(index)
            .filter(|s| s.id == id)
            .map(|_| index)
    }

    /// Navigation index of the sector with `id`, if it is enabled.
    #[must_use]
    pub fn enabled_index_of(&self, id: SectorId) -> Option<usize> {
        self.all_index_of(id).and_then(|i| self.all_to_enabled(i))
    }

    /// Translates a navigation index into a grid index.
    #[must_use]
    pub fn enabled_to_all(&self, index: usize) -> Option<usize> {
        self.enabled.get(index).copied()
    }

    /// Translates a grid index into a navigation index, if that sector is enabled.
    #[must_use]
    pub fn all_to_enabled(&self, index: usize) -> Option<usize> {
        self.enabled.binary_search(&index).ok()
    }

    /// The sector a freshly tiled grid should open on: [`SectorId::FIRST`]
    /// when it is enabled, otherwise the first enabled sector.
    #[must_use]
    pub fn initial_sector(&self) -> Option<&Sector> {
        self.get(SectorId::FIRST)
            .filter(|s| s.enabled)
            .or_else(|| self.enabled().next())
    }
}
