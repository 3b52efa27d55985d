use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::{Mat4, Quat, Vec3};
use std::hint::black_box;

use skelanim::animation::{AnimationClip, AnimationEvaluator, KeyframeTrack, NodeAnimTrack};
use skelanim::scene::Hierarchy;
use skelanim::skeleton::BoneTable;

/// A single chain of `len` bones, each offset one unit along Y.
fn build_chain(len: usize) -> (Hierarchy, BoneTable) {
    let mut hierarchy = Hierarchy::new("root", Mat4::IDENTITY);
    let mut bones = BoneTable::default();

    let mut parent = hierarchy.root();
    for i in 0..len {
        let name = format!("bone_{i}");
        parent = hierarchy
            .add_child(parent, name.as_str(), Mat4::from_translation(Vec3::Y))
            .unwrap();
        bones
            .get_or_create_bone_id(&name, Mat4::from_translation(Vec3::new(0.0, -(i as f32), 0.0)))
            .unwrap();
    }

    (hierarchy, bones)
}

fn build_clip(name: &str, len: usize, keys: usize, angle: f32) -> AnimationClip {
    let times: Vec<f32> = (0..keys).map(|k| k as f32).collect();
    let mut clip = AnimationClip::new(name, 30.0, (keys - 1) as f32);

    for i in 0..len {
        let rotations: Vec<Quat> = (0..keys)
            .map(|k| Quat::from_rotation_z(angle * (k as f32).sin()))
            .collect();
        let positions: Vec<Vec3> = (0..keys)
            .map(|k| Vec3::new(0.0, 1.0 + 0.01 * k as f32, 0.0))
            .collect();

        clip.insert_channel(
            format!("bone_{i}"),
            NodeAnimTrack::new(
                KeyframeTrack::new(times.clone(), positions).unwrap(),
                KeyframeTrack::new(times.clone(), rotations).unwrap(),
                KeyframeTrack::constant(Vec3::ONE),
            ),
        );
    }

    clip
}

fn evaluate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_clip");
    for len in [16, 64, 200] {
        let (hierarchy, mut bones) = build_chain(len);
        let clip = build_clip("walk", len, 60, 0.3);
        let evaluator = AnimationEvaluator::default();

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                black_box(evaluator.evaluate_clip(&hierarchy, &mut bones, &clip, black_box(1.37)));
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("evaluate_blended");
    for len in [16, 64, 200] {
        let (hierarchy, mut bones) = build_chain(len);
        let walk = build_clip("walk", len, 60, 0.3);
        let run = build_clip("run", len, 40, 0.8);
        let evaluator = AnimationEvaluator::default();

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| {
                black_box(
                    evaluator
                        .evaluate_blended(&hierarchy, &mut bones, &walk, &run, black_box(1.37), 0.4)
                        .unwrap(),
                );
            });
        });
    }
    group.finish();
}

fn sample_benchmark(c: &mut Criterion) {
    let keys = 240;
    let times: Vec<f32> = (0..keys).map(|k| k as f32).collect();
    let values: Vec<Quat> = (0..keys).map(|k| Quat::from_rotation_y(k as f32 * 0.05)).collect();
    let track = KeyframeTrack::new(times, values).unwrap();

    c.bench_function("sample_rotation_240_keys", |b| {
        b.iter(|| black_box(track.sample(black_box(187.5))));
    });
}

criterion_group!(benches, evaluate_benchmark, sample_benchmark);
criterion_main!(benches);
