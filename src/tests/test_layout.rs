use approx::assert_abs_diff_eq;

use crate::catalog::{all_pairs, saltire_pair};
use crate::graph::Graph;
use crate::layout::*;

use crate::tests::init;

fn assert_in_frame(points: &[Point]) {
    for p in points {
        assert!(p.x.is_finite() && p.y.is_finite(), "{:?}", p);
        assert!(p.x.abs() <= 1.0 + 1e-12 && p.y.abs() <= 1.0 + 1e-12, "{:?}", p);
    }
}

#[test]
fn test_circular_layout() {
    let points = layout(&Graph::cycle(4), &Layout::Circular);
    assert_eq!(points.len(), 4);
    assert_abs_diff_eq!(points[0].x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[0].y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[1].y, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[2].x, -1.0, epsilon = 1e-12);
    assert_in_frame(&points);
}

#[test]
fn test_degenerate_orders() {
    assert!(layout(&Graph::new(0), &Layout::Circular).is_empty());
    let single = layout(&Graph::new(1), &Layout::Spring { iterations: 10, seed: 1 });
    assert_eq!(single, vec![Point { x: 0.0, y: 0.0 }]);
}

#[test]
fn test_spring_layout_is_seeded_and_bounded() {
    init();
    let g = Graph::star(4);
    let config = Layout::Spring { iterations: 50, seed: 7 };
    let a = layout(&g, &config);
    let b = layout(&g, &config);
    assert_eq!(a, b);
    assert_eq!(a.len(), 5);
    assert_in_frame(&a);

    let max_extent = a.iter().map(|p| p.x.abs().max(p.y.abs())).fold(0.0, f64::max);
    assert_abs_diff_eq!(max_extent, 1.0, epsilon = 1e-9);
}

#[test]
fn test_spring_layout_handles_isolated_vertex() {
    let pair = saltire_pair();
    let points = layout(&pair.right, &Layout::Spring { iterations: 30, seed: 3 });
    assert_eq!(points.len(), 5);
    assert_in_frame(&points);
}

#[test]
fn test_render_request_positions() {
    init();
    for pair in all_pairs() {
        let request = pair
            .render_request()
            .with_layout(Layout::Spring { iterations: 20, seed: 11 });
        assert_eq!(request.titles, ("G1".to_string(), "G2".to_string()));
        let (left, right) = request.positions();
        assert_eq!(left.len(), pair.left.order());
        assert_eq!(right.len(), pair.right.order());
        assert_in_frame(&left);
        assert_in_frame(&right);
    }
}
