// File: crates/xychart-core/tests/doughnut.rs
// Purpose: Doughnut rings, wedge sweeps, labels and legend through RecordingSurface.

use xychart_core::{DoughnutChart, DrawCommand, MultipleCategorySeries, RecordingSurface, RendererConfig};

fn data() -> MultipleCategorySeries {
    let mut d = MultipleCategorySeries::new("fruit");
    d.add("2023", &["Apples", "Pears", "Plums"], &[50.0, 30.0, 20.0]);
    d.add("2024", &["Apples", "Pears"], &[1.0, 3.0]);
    d
}

fn arcs(surface: &RecordingSurface) -> Vec<(f32, f32, f32)> {
    surface
        .commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Arc { oval, start_deg, sweep_deg, .. } => Some((oval.width() / 2.0, *start_deg, *sweep_deg)),
            _ => None,
        })
        .collect()
}

#[test]
fn rings_shrink_and_sweeps_sum_to_full_circle() {
    let chart = DoughnutChart::new(data(), RendererConfig::default());
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 800, 600);

    let arcs = arcs(&surface);
    // three wedges + hole, two wedges + hole
    assert_eq!(arcs.len(), 7);
    let outer: f32 = arcs[..3].iter().map(|a| a.2).sum();
    assert!((outer - 360.0).abs() < 1e-3);
    assert_eq!((arcs[1].1, arcs[1].2), (180.0, 108.0));
    assert!(arcs[4].0 < arcs[0].0, "second ring is smaller");
    assert_eq!(arcs[3].2, 360.0, "hole covers the whole circle");
}

#[test]
fn labels_and_legend_are_drawn() {
    let chart = DoughnutChart::new(data(), RendererConfig::default());
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 800, 600);
    let texts: Vec<&str> = surface.texts().collect();
    for want in ["Apples", "Pears", "Plums", "2023", "2024"] {
        assert!(texts.contains(&want), "missing {want:?} in {texts:?}");
    }
    let circles = surface.commands.iter().filter(|c| matches!(c, DrawCommand::Circle { .. })).count();
    assert_eq!(circles, 2, "one legend circle per category");
}

#[test]
fn empty_doughnut_draws_background_only() {
    let chart = DoughnutChart::new(MultipleCategorySeries::new("none"), RendererConfig::default());
    let mut surface = RecordingSurface::new();
    chart.draw(&mut surface, 0, 0, 300, 300);
    assert!(arcs(&surface).is_empty());
    assert_eq!(surface.rects().count(), 1);
}
