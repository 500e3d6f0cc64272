use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cyclist::mesh::{generate_cone, generate_cube, generate_sphere, MeshLibrary};
use cyclist::render::RecordingRenderer;
use cyclist::scene::Scene;

/// Benchmark: fixed 36-vertex cube generation
fn bench_cube_generation(c: &mut Criterion) {
    c.bench_function("cube_generation", |b| {
        b.iter(|| black_box(generate_cube()))
    });
}

/// Benchmark: cone fan generation across tessellation levels
fn bench_cone_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("cone_generation");
    for slices in [10, 20, 40, 80] {
        group.bench_with_input(BenchmarkId::from_parameter(slices), &slices, |b, &slices| {
            b.iter(|| black_box(generate_cone(black_box(slices))))
        });
    }
    group.finish();
}

/// Benchmark: sphere cap-band-cap generation across tessellation levels
fn bench_sphere_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sphere_generation");
    for n in [10, 20, 40, 80] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(generate_sphere(black_box(n), black_box(n))))
        });
    }
    group.finish();
}

/// Benchmark: the three default primitives generated together, as at startup
fn bench_library_generation(c: &mut Criterion) {
    c.bench_function("library_generation", |b| {
        b.iter(|| black_box(MeshLibrary::generate()))
    });
}

/// Benchmark: one full frame of scene logic against the recording renderer
fn bench_frame_assembly(c: &mut Criterion) {
    let mut scene = Scene::new();
    let mut recorder = RecordingRenderer::new();

    c.bench_function("frame_assembly", |b| {
        b.iter(|| {
            scene.tick();
            scene.update();
            recorder.clear();
            scene.render(&mut recorder);
            black_box(recorder.calls.len())
        })
    });
}

criterion_group!(
    benches,
    bench_cube_generation,
    bench_cone_generation,
    bench_sphere_generation,
    bench_library_generation,
    bench_frame_assembly
);
criterion_main!(benches);
