// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size, Vec2};
use seatmap_layout::{DisplayDimensions, Seat, SeatId, SeatScale};
use seatmap_visibility::vname::compare_vnames;
use seatmap_visibility::{VisibilityParams, visible_seats};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }
}

/// Rows of seats named `A1`, `A2`, ... `B1`, ... spread over a 4000x3000 plan,
/// fed in shuffled order.
fn hall(n: usize, seed: u64) -> Vec<Seat> {
    let mut rng = Lcg(seed);
    let mut seats: Vec<Seat> = (0..n)
        .map(|i| {
            let row = (i / 80) as u8;
            let col = i % 80;
            let prefix = char::from(b'A' + row % 26);
            Seat::new(
                SeatId(i as u32),
                format!("{prefix}{}", col + 1),
                50.0 * col as f64,
                60.0 * f64::from(row),
                40.0,
                40.0,
            )
        })
        .collect();
    for i in (1..seats.len()).rev() {
        let j = rng.next_u32() as usize % (i + 1);
        seats.swap(i, j);
    }
    seats
}

fn bench_visible_seats(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/visible_seats");
    let Some(scale) = SeatScale::new(
        DisplayDimensions::new(4000.0, 3000.0),
        Size::new(4000.0, 3000.0),
    ) else {
        return;
    };

    for n in [100_usize, 1_000, 4_000] {
        let seats = hall(n, 42);
        let params = VisibilityParams::new(Size::new(1000.0, 800.0), Vec2::new(-500.0, -200.0))
            .with_active_tile(Some(Rect::new(500.0, 200.0, 1500.0, 1000.0)))
            .with_minimap(Some(Rect::new(8.0, 8.0, 408.0, 308.0)));
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &seats, |b, seats| {
            b.iter(|| black_box(visible_seats(seats, &scale, &params).len()));
        });
    }

    group.finish();
}

fn bench_vname_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("visibility/vname_sort");
    let seats = hall(4_000, 3);
    let names: Vec<&str> = seats.iter().map(|s| s.name.as_str()).collect();
    group.throughput(Throughput::Elements(names.len() as u64));

    group.bench_function("stable_sort", |b| {
        b.iter(|| {
            let mut sorted = names.clone();
            sorted.sort_by(|a, b| compare_vnames(a, b));
            black_box(sorted)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_visible_seats, bench_vname_sort);
criterion_main!(benches);
