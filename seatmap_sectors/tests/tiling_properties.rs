// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for sector tiling.
//!
//! Random seat bounds and viewports are tiled and the grid is checked for
//! coverage of the bounds, a gap-free partition by the unique regions, the
//! enabled-sector rule, and determinism.

use kurbo::{Rect, Size};
use proptest::prelude::*;
use seatmap_layout::SeatBounds;
use seatmap_layout::overlap::overlaps;
use seatmap_sectors::SectorGrid;

const EPS: f64 = 1e-6;

fn bounds_strategy() -> impl Strategy<Value = SeatBounds> {
    (0_u32..2000, 0_u32..2000, 0_u32..6000, 0_u32..6000).prop_map(|(x, y, w, h)| SeatBounds {
        min_x: f64::from(x),
        min_y: f64::from(y),
        max_x: f64::from(x + w),
        max_y: f64::from(y + h),
    })
}

fn viewport_strategy() -> impl Strategy<Value = Size> {
    (50_u32..1500, 50_u32..1500).prop_map(|(w, h)| Size::new(f64::from(w), f64::from(h)))
}

fn seats_strategy() -> impl Strategy<Value = Vec<Rect>> {
    prop::collection::vec((0_u32..8000, 0_u32..8000, 1_u32..60, 1_u32..60), 0..40).prop_map(
        |seats| {
            seats
                .into_iter()
                .map(|(x, y, w, h)| {
                    Rect::new(
                        f64::from(x),
                        f64::from(y),
                        f64::from(x + w),
                        f64::from(y + h),
                    )
                })
                .collect()
        },
    )
}

fn contains_rect(outer: Rect, inner: Rect) -> bool {
    inner.x0 >= outer.x0 - EPS
        && inner.y0 >= outer.y0 - EPS
        && inner.x1 <= outer.x1 + EPS
        && inner.y1 <= outer.y1 + EPS
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn tiles_cover_the_bounds(bounds in bounds_strategy(), viewport in viewport_strategy()) {
        let grid = SectorGrid::tile(&bounds, viewport, &[]).unwrap();
        let all = grid.all();
        prop_assert_eq!(all.len(), (grid.rows() * grid.cols()) as usize);

        let covered = all.iter().fold(all[0].tile, |acc, s| acc.union(s.tile));
        prop_assert!(contains_rect(covered, bounds.rect()));

        for s in all {
            prop_assert!((s.tile.width() - viewport.width).abs() < EPS);
            prop_assert!((s.tile.height() - viewport.height).abs() < EPS);
        }
    }

    #[test]
    fn unique_regions_partition_the_bounds(
        bounds in bounds_strategy(),
        viewport in viewport_strategy(),
    ) {
        let grid = SectorGrid::tile(&bounds, viewport, &[]).unwrap();
        let cols = grid.cols() as usize;
        let all = grid.all();

        let area: f64 = all.iter().map(|s| s.unique.area()).sum();
        prop_assert!((area - bounds.rect().area()).abs() <= EPS * bounds.rect().area().max(1.0));

        for (i, s) in all.iter().enumerate() {
            prop_assert!(contains_rect(s.tile, s.unique));
            prop_assert!(contains_rect(bounds.rect(), s.unique));
            prop_assert_eq!(s.center, s.unique.center());
            // Horizontal and vertical neighbours share an edge exactly.
            if (i + 1) % cols != 0 {
                prop_assert_eq!(s.unique.x1, all[i + 1].unique.x0);
            }
            if let Some(below) = all.get(i + cols) {
                prop_assert_eq!(s.unique.y1, below.unique.y0);
            }
        }
    }

    #[test]
    fn enabled_sectors_are_exactly_those_touching_a_seat(
        bounds in bounds_strategy(),
        viewport in viewport_strategy(),
        seats in seats_strategy(),
    ) {
        let grid = SectorGrid::tile(&bounds, viewport, &seats).unwrap();
        for (i, s) in grid.all().iter().enumerate() {
            let expected = seats.iter().any(|seat| overlaps(*seat, s.tile));
            prop_assert_eq!(s.enabled, expected);
            prop_assert_eq!(grid.all_to_enabled(i).is_some(), expected);
        }
        for (n, s) in grid.enabled().enumerate() {
            prop_assert_eq!(grid.enabled_index_of(s.id), Some(n));
        }
    }

    #[test]
    fn tiling_is_deterministic(
        bounds in bounds_strategy(),
        viewport in viewport_strategy(),
        seats in seats_strategy(),
    ) {
        let first = SectorGrid::tile(&bounds, viewport, &seats);
        let second = SectorGrid::tile(&bounds, viewport, &seats);
        prop_assert_eq!(first, second);
    }
}

#[test]
fn scenario_two_columns_one_row() {
    // A 1000x800 viewport over bounds 1800 wide and 800 tall.
    let bounds = SeatBounds {
        min_x: 40.0,
        min_y: 60.0,
        max_x: 1840.0,
        max_y: 860.0,
    };
    let grid = SectorGrid::tile(&bounds, Size::new(1000.0, 800.0), &[]).unwrap();
    assert_eq!((grid.cols(), grid.rows()), (2, 1));
    assert_eq!(grid.step().x, 800.0);
    assert_eq!(grid.all()[0].unique.x1, bounds.min_x + 900.0);
    assert_eq!(grid.all()[1].unique.x0, bounds.min_x + 900.0);
}
