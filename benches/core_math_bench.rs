use criterion::{Criterion, criterion_group, criterion_main};
use line_graph::api::{LineGraph, LineGraphConfig};
use line_graph::core::{GraphFrame, GraphValue, PlotGeometry, layout_graph, scale_steps};
use line_graph::render::NullRenderer;
use std::hint::black_box;

fn weight_series(count: usize) -> Vec<GraphValue> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            let label = format!("{}.{:02}", 1 + i % 12, 1 + i % 28);
            GraphValue::with_label(55.0 + (t * 0.7).sin() * 4.0, label)
        })
        .collect()
}

fn bench_scale_steps_20(c: &mut Criterion) {
    let values: Vec<f64> = weight_series(20).iter().map(|entry| entry.value).collect();

    c.bench_function("scale_steps_20", |b| {
        b.iter(|| {
            let _ = scale_steps(black_box(&values), black_box(200.0));
        })
    });
}

fn bench_layout_graph_10k(c: &mut Criterion) {
    let series = weight_series(10_000);
    let geometry = PlotGeometry::new(GraphFrame::new(1920.0, 1080.0));

    c.bench_function("layout_graph_10k", |b| {
        b.iter(|| {
            let _ = layout_graph(black_box(&series), black_box(&geometry));
        })
    });
}

fn bench_render_pass_20(c: &mut Criterion) {
    let mut graph = LineGraph::new(NullRenderer::default(), LineGraphConfig::default())
        .expect("graph init");
    graph.set_values(weight_series(20));

    c.bench_function("render_pass_20", |b| {
        b.iter(|| {
            graph
                .render(black_box(400.0))
                .expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_scale_steps_20,
    bench_layout_graph_10k,
    bench_render_pass_20
);
criterion_main!(benches);
