//! Benchmarks for the visibility recomputation
//!
//! Run with: cargo bench filter

use goto_marker::model::{Marker, PickerState};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn picker_with_markers(count: usize) -> PickerState {
    let markers = (1..=count)
        .map(|i| Marker::new(i * 3, format!("let binding_{} = compute({});", i, i)))
        .collect();
    PickerState::open(markers)
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn visible_rows_unfiltered(bencher: divan::Bencher, count: usize) {
    let picker = picker_with_markers(count);
    bencher.bench_local(|| divan::black_box(picker.visible().len()));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn visible_rows_text_filter(bencher: divan::Bencher, count: usize) {
    let mut picker = picker_with_markers(count);
    picker.set_filter("binding_7".to_string());
    bencher.bench_local(|| divan::black_box(picker.visible().len()));
}

#[divan::bench(args = [100, 1_000, 10_000])]
fn visible_rows_line_number_filter(bencher: divan::Bencher, count: usize) {
    let mut picker = picker_with_markers(count);
    picker.set_filter("42".to_string());
    bencher.bench_local(|| divan::black_box(picker.visible().len()));
}

#[divan::bench(args = [1_000, 10_000])]
fn set_filter_reselects(bencher: divan::Bencher, count: usize) {
    bencher
        .with_inputs(|| picker_with_markers(count))
        .bench_local_values(|mut picker| {
            picker.set_filter("compute".to_string());
            divan::black_box(picker.selected)
        });
}
