use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tui_fireworks::core::{spawn, Frame, Simulation};
use tui_fireworks::term::{FireworksView, FrameBuffer};

fn bench_advance(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let mut sim = Simulation::new(Frame::new(200, 60), &mut rng);

    c.bench_function("advance_one_tick", |b| {
        b.iter(|| {
            sim.advance();
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("spawn_burst", |b| {
        b.iter(|| black_box(spawn(black_box(200), black_box(60), &mut rng)))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    let sim = Simulation::new(Frame::new(200, 60), &mut rng);
    let view = FireworksView::default();
    let mut fb = FrameBuffer::new(200, 60);

    c.bench_function("render_into_200x60", |b| {
        b.iter(|| view.render_into(black_box(&sim), &mut fb))
    });

    c.bench_function("render_string_200x60", |b| {
        b.iter(|| black_box(view.render_string(&sim)))
    });
}

criterion_group!(benches, bench_advance, bench_spawn, bench_render);
criterion_main!(benches);
