// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle overlap helpers shared by tiling and visibility.
//!
//! Rectangles that only touch along an edge do not overlap: every test here
//! is based on the area of the intersection.

use kurbo::Rect;

/// Area of the intersection of `a` and `b` (zero when they are disjoint).
#[must_use]
pub fn overlap_area(a: Rect, b: Rect) -> f64 {
    a.intersect(b).area()
}

/// Returns `true` if `a` and `b` share a region of positive area.
#[must_use]
pub fn overlaps(a: Rect, b: Rect) -> bool {
    overlap_area(a, b) > 0.0
}

/// Fraction of `subject`'s area that lies inside `cover`, in `0.0..=1.0`.
///
/// Returns `None` when `subject` has no area, since no meaningful fraction
/// exists.
#[must_use]
pub fn covered_fraction(subject: Rect, cover: Rect) -> Option<f64> {
    let area = subject.area();
    if area.is_nan() || area <= 0.0 {
        return None;
    }
    Some(overlap_area(subject, cover) / area)
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::{covered_fraction, overlap_area, overlaps};

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(overlap_area(a, b), 0.0);
        assert!(!overlaps(a, b));
    }

    #[test]
    fn partial_cover_fraction() {
        let seat = Rect::new(0.0, 0.0, 10.0, 10.0);
        let tile = Rect::new(5.0, -100.0, 100.0, 100.0);
        assert_eq!(covered_fraction(seat, tile), Some(0.5));
        assert!(overlaps(seat, tile));
    }

    #[test]
    fn zero_area_subject_has_no_fraction() {
        let line = Rect::new(0.0, 0.0, 10.0, 0.0);
        assert_eq!(covered_fraction(line, Rect::new(-5.0, -5.0, 5.0, 5.0)), None);
    }
}
