// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use seatmap_config::{RoomConfig, RoomId};
use seatmap_engine::SeatMapEngine;
use seatmap_layout::{ImageSize, Seat, SeatId};

fn seats(n: u32) -> Vec<Seat> {
    (0..n)
        .map(|i| {
            let (row, col) = (i / 60, i % 60);
            Seat::new(
                SeatId(i),
                format!("R{}", i + 1),
                100.0 + 50.0 * f64::from(col),
                100.0 + 60.0 * f64::from(row),
                40.0,
                40.0,
            )
        })
        .collect()
}

fn loaded_engine(seats: Vec<Seat>) -> SeatMapEngine {
    let mut engine = SeatMapEngine::default();
    engine.mount_container(Size::new(1000.0, 800.0));
    let ticket = engine.enter_room(RoomId(1), RoomConfig::default());
    engine.set_seats(seats);
    if let Some(natural) = ImageSize::new(3200.0, 2400.0) {
        engine.image_loaded(ticket, natural);
    }
    engine
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/recompute");
    let feed = seats(2_400);

    group.bench_function("room_load", |b| {
        b.iter_batched(
            || feed.clone(),
            |seats| black_box(loaded_engine(seats)),
            BatchSize::LargeInput,
        );
    });

    // Alternating sizes so every frame recomputes.
    group.bench_function("resize_frame", |b| {
        let mut engine = loaded_engine(feed.clone());
        let sizes = [Size::new(1000.0, 800.0), Size::new(1280.0, 720.0)];
        let mut i = 0;
        b.iter(|| {
            i ^= 1;
            engine.container_resized(sizes[i]);
            black_box(engine.animation_frame())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);
