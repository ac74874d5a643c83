use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec3;

use voxforge_bake::{count_occluders_brute, Baker, OcclusionIndex};
use voxforge_core::Palette;
use voxforge_gen::Archetype;

fn palette() -> Palette {
    Palette::parse("#4a4a5a", "#3a3a4a", "#00ffff").unwrap()
}

fn bench_bake_mech_boss(c: &mut Criterion) {
    let mut group = c.benchmark_group("bake");
    let model = Archetype::MechBoss.generate(1.0);
    let palette = palette();
    let baker = Baker::default();
    group.bench_function("mech_boss", |b| {
        b.iter(|| black_box(baker.bake(black_box(&model), &palette).unwrap()));
    });
    group.finish();
}

fn bench_occlusion(c: &mut Criterion) {
    let mut group = c.benchmark_group("occlusion");
    let centers: Vec<Vec3> = Archetype::MechBoss
        .generate(1.0)
        .boxes
        .iter()
        .map(|b| b.position)
        .collect();
    group.bench_function("grid", |b| {
        b.iter(|| {
            let index = OcclusionIndex::new(centers.iter().copied(), 0.3);
            black_box((0..centers.len()).map(|i| index.count_occluders(i)).sum::<usize>())
        });
    });
    group.bench_function("brute_force", |b| {
        b.iter(|| {
            black_box(
                (0..centers.len())
                    .map(|i| count_occluders_brute(&centers, i, 0.3))
                    .sum::<usize>(),
            )
        });
    });
    group.finish();
}

criterion_group!(benches, bench_bake_mech_boss, bench_occlusion);
criterion_main!(benches);
