//! Benchmarks for the storyboard editor and export pipeline.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use storyreel::export::scenes_to_csv;
use storyreel::{Scene, ScenePatch, StoryboardEditor};

fn editor_with(n: usize) -> StoryboardEditor {
    let mut editor = StoryboardEditor::new();
    for i in 0..n {
        let id = editor.add_scene();
        editor.update_scene(
            &id,
            ScenePatch::new()
                .with_title(format!("Scene {}", i))
                .with_prompt("A beautiful sunset over the ocean with golden light"),
        );
    }
    editor
}

fn bench_add_scene(c: &mut Criterion) {
    c.bench_function("add_scene", |b| {
        let mut editor = StoryboardEditor::new();
        b.iter(|| {
            black_box(editor.add_scene());
        })
    });
}

fn bench_commit_with_sequence_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_scene");
    for size in [10usize, 50, 200] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut editor = editor_with(size);
            let id = editor.scenes()[size / 2].id.clone();
            b.iter(|| {
                editor.update_scene(&id, ScenePatch::new().with_duration(7));
            })
        });
    }
    group.finish();
}

fn bench_undo_redo(c: &mut Criterion) {
    c.bench_function("undo_redo_pair", |b| {
        let mut editor = editor_with(40);
        b.iter(|| {
            editor.undo();
            editor.redo();
        })
    });
}

fn bench_filtered_scenes(c: &mut Criterion) {
    c.bench_function("filtered_scenes", |b| {
        let mut editor = editor_with(200);
        editor.set_search_query("sunset");
        b.iter(|| {
            black_box(editor.filtered_scenes().len());
        })
    });
}

fn bench_scenes_to_csv(c: &mut Criterion) {
    c.bench_function("scenes_to_csv_200", |b| {
        let scenes: Vec<Scene> = (0..200)
            .map(|i| {
                Scene::new()
                    .with_title(format!("Scene {}, take 2", i))
                    .with_prompt("Explain \"why\" this matters")
            })
            .collect();
        b.iter(|| {
            black_box(scenes_to_csv(&scenes).unwrap());
        })
    });
}

criterion_group!(
    benches,
    bench_add_scene,
    bench_commit_with_sequence_size,
    bench_undo_redo,
    bench_filtered_scenes,
    bench_scenes_to_csv
);
criterion_main!(benches);
