use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bubble_pop::input::PointerState;
use bubble_pop::picking::{LinearPicker, Picker};
use bubble_pop::scene::{BubblePool, SpawnVolume};
use bubble_pop::Camera;

fn bench_linear_picker(c: &mut Criterion) {
    let camera = Camera::new(75.0, 16.0 / 9.0, 1.0, 15.0);
    let picker = LinearPicker;
    let mut rng = StdRng::seed_from_u64(1234);

    let mut group = c.benchmark_group("linear_picker");
    for count in [50, 500, 5000] {
        let pool = BubblePool::new(count, 0.1, SpawnVolume::glass(), &mut rng);
        group.bench_function(format!("{}_bubbles", count), |b| {
            let pointer = PointerState {
                normalized: Vec2::new(0.05, -0.1),
            };
            b.iter(|| black_box(picker.pick(black_box(pointer), &camera, &pool)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_linear_picker);
criterion_main!(benches);
