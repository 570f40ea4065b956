use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use flextree_svg::bind::bind;
use flextree_svg::bounds::BoundingBox;
use flextree_svg::config::RenderConfig;
use flextree_svg::flatten::flatten;
use flextree_svg::identity::IdAssigner;
use flextree_svg::render::render_svg;
use flextree_svg::theme::Theme;
use flextree_svg::tree::TreeNode;
use std::hint::black_box;

// Complete tree with `fanout` children per node, laid out on a simple grid.
fn wide_tree(depth: usize, fanout: usize) -> TreeNode {
    fn build(level: usize, depth: usize, fanout: usize, x: f64) -> TreeNode {
        let node = TreeNode::new(x, level as f64 * 40.0, 30.0, 20.0);
        if level + 1 == depth {
            return node;
        }
        let span = (fanout.pow((depth - level - 1) as u32) as f64) * 40.0;
        let children = (0..fanout)
            .map(|i| {
                let offset = (i as f64 - (fanout as f64 - 1.0) / 2.0) * span;
                build(level + 1, depth, fanout, x + offset)
            })
            .collect();
        node.with_children(children)
    }
    build(0, depth, fanout, 0.0)
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("flatten");
    for (depth, fanout) in [(4, 4), (6, 4), (8, 3)] {
        let tree = wide_tree(depth, fanout);
        group.bench_with_input(BenchmarkId::from_parameter(tree.size()), &tree, |b, tree| {
            b.iter(|| black_box(flatten(black_box(tree)).len()));
        });
    }
    group.finish();
}

fn bench_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounds");
    for (depth, fanout) in [(4, 4), (6, 4), (8, 3)] {
        let tree = wide_tree(depth, fanout);
        group.bench_with_input(BenchmarkId::from_parameter(tree.size()), &tree, |b, tree| {
            b.iter(|| black_box(BoundingBox::of(black_box(tree))));
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let theme = Theme::classic();
    let config = RenderConfig::default();
    let mut group = c.benchmark_group("end_to_end");
    for (depth, fanout) in [(4, 4), (6, 4), (8, 3)] {
        let tree = wide_tree(depth, fanout);
        group.bench_with_input(BenchmarkId::from_parameter(tree.size()), &tree, |b, tree| {
            b.iter(|| {
                let records = bind(tree, &mut IdAssigner::new());
                let canvas = BoundingBox::of(tree).canvas(config.align_top);
                let svg = render_svg(&records, &canvas, &theme, &config);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_flatten, bench_bounds, bench_end_to_end
);
criterion_main!(benches);
