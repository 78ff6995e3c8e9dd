use criterion::{black_box, criterion_group, criterion_main, Criterion};
use xychart_core::{Chart, ChartKind, Dataset, RecordingSurface, RendererConfig, Series};

fn build_chart(kind: ChartKind, n: usize) -> Chart {
    let data = (0..n).map(|i| {
        let x = i as f64;
        (x, (x * 0.01).sin() * 10.0 + x * 0.0001)
    });
    let ds: Dataset = [Series::with_data("xy", data)].into_iter().collect();
    Chart::new(kind, ds, RendererConfig::default())
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_pass");
    for &n in &[10_000usize, 50_000usize] {
        for kind in [ChartKind::Line, ChartKind::Bar] {
            group.bench_function(format!("{}_{n}", kind.name().to_lowercase()), |b| {
                let mut chart = build_chart(kind, n);
                let mut surface = RecordingSurface::new();
                b.iter(|| {
                    surface.clear();
                    chart.draw(&mut surface, 0, 0, 800, 500);
                    black_box(surface.commands.len());
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
