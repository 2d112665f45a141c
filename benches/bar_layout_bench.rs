use bar_layout::api::{BarChartConfig, BarChartEngine};
use bar_layout::core::{
    AnimationPhase, BarBuffer, BarChartDataSet, BarData, BarEntry, BarLayoutParams, LinearScale,
    Transformer, ViewPortHandler, Viewport, prepare_buffer,
};
use bar_layout::render::NullRenderer;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn stacked_entries(count: usize) -> Vec<BarEntry> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let values = vec![1.0 + t % 7.0, -(t % 3.0), 0.0, 2.5];
            BarEntry::stacked(t, values).expect("valid generated entry")
        })
        .collect()
}

fn bench_prepare_stacked_10k(c: &mut Criterion) {
    let set = BarChartDataSet::new("bench", stacked_entries(10_000));
    let view_port = ViewPortHandler::new(Viewport::new(1920, 1080)).expect("view port");
    let transformer = Transformer::new(
        LinearScale::new(-1.0, 10_001.0).expect("x scale"),
        LinearScale::new(-5.0, 15.0).expect("y scale"),
        view_port,
        false,
    );
    let params = BarLayoutParams::new(0.85, false, AnimationPhase::COMPLETE).expect("params");
    let mut buffer = BarBuffer::with_size(set.buffer_size());

    c.bench_function("prepare_stacked_10k", |b| {
        b.iter(|| {
            prepare_buffer(black_box(&mut buffer), black_box(&set), params)
                .expect("prepare should succeed");
            buffer.transform_to_pixels(&transformer);
        })
    });
}

fn bench_engine_frame_2k(c: &mut Criterion) {
    let config = BarChartConfig::new(Viewport::new(1600, 900), -1.0, 2_001.0)
        .with_y_domain(-5.0, 15.0)
        .with_max_visible_value_count(10_000);
    let mut engine = BarChartEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .set_data(BarData::from_bar_sets(vec![BarChartDataSet::new(
            "bench",
            stacked_entries(2_000),
        )]))
        .expect("set data");

    c.bench_function("engine_frame_2k", |b| {
        b.iter(|| {
            let _ = black_box(engine.build_frame().expect("frame should build"));
        })
    });
}

criterion_group!(benches, bench_prepare_stacked_10k, bench_engine_frame_2k);
criterion_main!(benches);
