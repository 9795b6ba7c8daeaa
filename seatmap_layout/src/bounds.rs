// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Rect, Size};

use crate::dimensions::DisplayDimensions;
use crate::seat::Seat;

/// Per-axis factors mapping seat rectangles from reference space onto the
/// displayed image.
///
/// The reference space is normally the image's natural pixel size. Some rooms
/// were digitized against an older, fixed-size image; for those the caller
/// passes that legacy reference size instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatScale {
    /// Horizontal factor (`display width / reference width`).
    pub x: f64,
    /// Vertical factor (`display height / reference height`).
    pub y: f64,
}

impl SeatScale {
    /// Identity scale: reference space equals display space.
    pub const IDENTITY: Self = Self { x: 1.0, y: 1.0 };

    /// Derives the scale from display dimensions and a reference size.
    ///
    /// Returns `None` if the reference size has a zero, negative, or
    /// non-finite side.
    #[must_use]
    pub fn new(display: DisplayDimensions, reference: Size) -> Option<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(reference.width) || !valid(reference.height) {
            return None;
        }
        Some(Self {
            x: display.width / reference.width,
            y: display.height / reference.height,
        })
    }

    /// Maps a reference-space rectangle into display space.
    #[must_use]
    pub fn apply(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.x0 * self.x,
            rect.y0 * self.y,
            rect.x1 * self.x,
            rect.y1 * self.y,
        )
    }

    /// Returns the display-space rectangle of `seat`.
    #[must_use]
    pub fn seat_rect(&self, seat: &Seat) -> Rect {
        self.apply(seat.source_rect())
    }

    /// Returns the display-space rectangles of `seats`, in input order.
    #[must_use]
    pub fn seat_rects(&self, seats: &[Seat]) -> Vec<Rect> {
        seats.iter().map(|s| self.seat_rect(s)).collect()
    }
}

/// Knobs for [`compute_seat_bounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsOptions {
    /// Restrict navigation to the area around seats. When `false` the whole
    /// displayed image is navigable.
    pub use_seat_bounds: bool,
    /// Padding added around the seats before clamping to the image.
    pub margin: f64,
}

impl BoundsOptions {
    /// Seat-restricted bounds with the given margin.
    #[must_use]
    pub const fn new(margin: f64) -> Self {
        Self {
            use_seat_bounds: true,
            margin,
        }
    }

    /// Unrestricted bounds covering the whole displayed image.
    #[must_use]
    pub const fn full_image() -> Self {
        Self {
            use_seat_bounds: false,
            margin: 0.0,
        }
    }
}

/// Navigable region of the displayed image, in display space.
///
/// Always satisfies `0 <= min_x <= max_x <= display width` (and likewise
/// vertically).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeatBounds {
    /// Left edge.
    pub min_x: f64,
    /// Top edge.
    pub min_y: f64,
    /// Right edge.
    pub max_x: f64,
    /// Bottom edge.
    pub max_y: f64,
}

impl SeatBounds {
    /// Bounds covering the whole displayed image.
    #[must_use]
    pub fn full(display: DisplayDimensions) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: display.width,
            max_y: display.height,
        }
    }

    /// Horizontal extent.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Returns the bounds as a kurbo [`Rect`].
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.min_x, self.min_y, self.max_x, self.max_y)
    }
}

/// Computes the navigable bounds of the displayed image.
///
/// With [`BoundsOptions::use_seat_bounds`] off this is the full display
/// rectangle. Otherwise every seat is mapped through `scale`, the union of
/// their rectangles is padded by the margin and clamped to the image.
///
/// Returns `None` while the display is empty, or when seat bounds are
/// requested but there are no seats yet.
#[must_use]
pub fn compute_seat_bounds(
    seats: &[Seat],
    display: DisplayDimensions,
    scale: SeatScale,
    options: BoundsOptions,
) -> Option<SeatBounds> {
    if display.is_empty() {
        return None;
    }
    if !options.use_seat_bounds {
        return Some(SeatBounds::full(display));
    }

    let union = seats
        .iter()
        .map(|s| scale.seat_rect(s))
        .filter(Rect::is_finite)
        .reduce(|acc, r| acc.union(r))?;

    // Clamp each edge into the image, then keep the max edge from crossing
    // the min edge when every seat lies outside the image.
    let min_x = (union.x0 - options.margin).clamp(0.0, display.width);
    let min_y = (union.y0 - options.margin).clamp(0.0, display.height);
    let max_x = (union.x1 + options.margin).clamp(min_x, display.width);
    let max_y = (union.y1 + options.margin).clamp(min_y, display.height);

    Some(SeatBounds {
        min_x,
        min_y,
        max_x,
        max_y,
    })
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{BoundsOptions, SeatBounds, SeatScale, compute_seat_bounds};
    use crate::dimensions::DisplayDimensions;
    use crate::seat::{Seat, SeatId};

    fn seat(id: u32, x: f64, y: f64, w: f64, h: f64) -> Seat {
        Seat::new(SeatId(id), "A1", x, y, w, h)
    }

    #[test]
    fn scale_is_display_over_reference() {
        let display = DisplayDimensions::new(1000.0, 500.0);
        let scale = SeatScale::new(display, Size::new(2000.0, 2000.0)).unwrap();
        assert_eq!(scale, SeatScale { x: 0.5, y: 0.25 });
        assert!(SeatScale::new(display, Size::new(0.0, 10.0)).is_none());
    }

    #[test]
    fn bounds_enclose_all_seats_with_margin() {
        let display = DisplayDimensions::new(3000.0, 2000.0);
        let seats = [
            seat(1, 100.0, 200.0, 50.0, 50.0),
            seat(2, 900.0, 150.0, 50.0, 50.0),
            seat(3, 400.0, 700.0, 50.0, 60.0),
        ];
        let bounds =
            compute_seat_bounds(&seats, display, SeatScale::IDENTITY, BoundsOptions::new(20.0))
                .unwrap();
        assert_eq!(
            bounds,
            SeatBounds {
                min_x: 80.0,
                min_y: 130.0,
                max_x: 970.0,
                max_y: 780.0,
            }
        );
        assert_eq!(bounds.width(), 890.0);
        assert_eq!(bounds.height(), 650.0);
    }

    #[test]
    fn margin_is_clamped_to_the_image() {
        let display = DisplayDimensions::new(500.0, 400.0);
        let seats = [seat(1, 5.0, 5.0, 490.0, 390.0)];
        let bounds =
            compute_seat_bounds(&seats, display, SeatScale::IDENTITY, BoundsOptions::new(50.0))
                .unwrap();
        assert_eq!(bounds, SeatBounds::full(display));
    }

    #[test]
    fn seats_outside_the_image_keep_bounds_ordered() {
        let display = DisplayDimensions::new(500.0, 400.0);
        let seats = [seat(1, 900.0, 900.0, 10.0, 10.0)];
        let bounds =
            compute_seat_bounds(&seats, display, SeatScale::IDENTITY, BoundsOptions::new(0.0))
                .unwrap();
        assert!(bounds.min_x <= bounds.max_x && bounds.max_x <= display.width);
        assert!(bounds.min_y <= bounds.max_y && bounds.max_y <= display.height);
    }

    #[test]
    fn empty_seats_defer_only_when_restricted() {
        let display = DisplayDimensions::new(500.0, 400.0);
        let scale = SeatScale::IDENTITY;
        assert_eq!(
            compute_seat_bounds(&[], display, scale, BoundsOptions::new(10.0)),
            None
        );
        assert_eq!(
            compute_seat_bounds(&[], display, scale, BoundsOptions::full_image()),
            Some(SeatBounds::full(display))
        );
    }

    #[test]
    fn empty_display_defers() {
        let seats = [seat(1, 0.0, 0.0, 10.0, 10.0)];
        let bounds = compute_seat_bounds(
            &seats,
            DisplayDimensions::default(),
            SeatScale::IDENTITY,
            BoundsOptions::full_image(),
        );
        assert_eq!(bounds, None);
    }
}
