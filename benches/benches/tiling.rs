// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use seatmap_layout::SeatBounds;
use seatmap_sectors::SectorGrid;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 11) as f64) / ((1_u64 << 53) as f64)
    }
}

fn seat_rects(n: usize, extent: Size, seed: u64) -> Vec<Rect> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|_| {
            let x = rng.next_f64() * (extent.width - 40.0);
            let y = rng.next_f64() * (extent.height - 40.0);
            Rect::new(x, y, x + 40.0, y + 40.0)
        })
        .collect()
}

fn bench_tile(c: &mut Criterion) {
    let mut group = c.benchmark_group("sectors/tile");
    let viewport = Size::new(1000.0, 800.0);

    // Plans from a single sector up to a large hall.
    for (w, h) in [(900.0, 700.0), (4000.0, 3000.0), (12000.0, 8000.0)] {
        let bounds = SeatBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: w,
            max_y: h,
        };
        let seats = seat_rects(2_000, Size::new(w, h), 0xC0FFEE);
        group.throughput(Throughput::Elements(seats.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("bounds", format!("{w}x{h}")),
            &seats,
            |b, seats| {
                b.iter(|| black_box(SectorGrid::tile(black_box(&bounds), viewport, seats)));
            },
        );
    }

    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("sectors/lookup");
    let bounds = SeatBounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 12000.0,
        max_y: 8000.0,
    };
    let seats = seat_rects(500, Size::new(12000.0, 8000.0), 7);
    let Some(grid) = SectorGrid::tile(&bounds, Size::new(1000.0, 800.0), &seats) else {
        return;
    };
    let ids: Vec<_> = grid.all().iter().map(|s| s.id).collect();

    group.bench_function("enabled_index_of", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for id in &ids {
                hits += usize::from(grid.enabled_index_of(*id).is_some());
            }
            black_box(hits)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_tile, bench_lookup);
criterion_main!(benches);
