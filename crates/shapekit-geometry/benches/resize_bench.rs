use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use shapekit_geometry::{resize_rect, rotate_point, Handle, Point, Rectangle};

fn bench_rotate_point(c: &mut Criterion) {
    let p = Point::new(12.5, -4.0);
    let origin = Point::new(3.0, 3.0);
    c.bench_function("rotate_point", |b| {
        b.iter(|| rotate_point(black_box(p), black_box(origin), black_box(37.5)))
    });
}

fn bench_resize_rect(c: &mut Criterion) {
    let rect = Rectangle::new(0.0, 0.0, 120.0, 80.0);
    let target = Point::new(150.0, 95.0);
    c.bench_function("resize_rect_corner", |b| {
        b.iter(|| {
            resize_rect(
                black_box(&rect),
                black_box(target),
                black_box(30.0),
                Handle::TopRight,
            )
        })
    });
    c.bench_function("resize_rect_edge", |b| {
        b.iter(|| {
            resize_rect(
                black_box(&rect),
                black_box(target),
                black_box(30.0),
                Handle::MiddleRight,
            )
        })
    });
}

criterion_group!(benches, bench_rotate_point, bench_resize_rect);
criterion_main!(benches);
