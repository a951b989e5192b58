//! 2D vertex layouts and the render request handed to a drawing backend.
//!
//! Nothing here draws. A [`RenderRequest`] bundles two graphs, their titles and
//! a [`Layout`]; [`RenderRequest::positions`] computes coordinates in `[-1, 1]²`
//! that a plotting collaborator can consume.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use log::{debug, trace};

use crate::graph::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Layout {
    /// Vertex `i` at angle `2πi/n` on the unit circle.
    #[default]
    Circular,
    /// Fruchterman–Reingold force-directed placement from a seeded start.
    Spring { iterations: usize, seed: u64 },
}

/// Position of every vertex, indexed by vertex.
pub fn layout(graph: &Graph, layout: &Layout) -> Vec<Point> {
    let n = graph.order();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![Point { x: 0.0, y: 0.0 }];
    }
    match layout {
        Layout::Circular => circular(n),
        Layout::Spring { iterations, seed } => spring(graph, *iterations, *seed),
    }
}

fn circular(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / n as f64;
            Point { x: theta.cos(), y: theta.sin() }
        })
        .collect()
}

fn spring(graph: &Graph, iterations: usize, seed: u64) -> Vec<Point> {
    let n = graph.order();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pos: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
        .collect();

    // optimal pairwise distance for a [-1, 1]² frame
    let k = (4.0 / n as f64).sqrt();
    let initial_temperature = 0.2;
    debug!("Spring layout: n={}, iterations={}, k={:.4}", n, iterations, k);

    for step in 0..iterations {
        let temperature = initial_temperature * (1.0 - step as f64 / iterations as f64);
        let mut disp = vec![(0.0f64, 0.0f64); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
                let force = k * k / dist;
                disp[i].0 += dx / dist * force;
                disp[i].1 += dy / dist * force;
                disp[j].0 -= dx / dist * force;
                disp[j].1 -= dy / dist * force;
            }
        }

        for &(u, v) in graph.edges() {
            let dx = pos[u].0 - pos[v].0;
            let dy = pos[u].1 - pos[v].1;
            let dist = (dx * dx + dy * dy).sqrt().max(1e-9);
            let force = dist * dist / k;
            disp[u].0 -= dx / dist * force;
            disp[u].1 -= dy / dist * force;
            disp[v].0 += dx / dist * force;
            disp[v].1 += dy / dist * force;
        }

        for (p, d) in pos.iter_mut().zip(disp.iter()) {
            let len = (d.0 * d.0 + d.1 * d.1).sqrt();
            if len > 0.0 {
                let step_len = len.min(temperature);
                p.0 += d.0 / len * step_len;
                p.1 += d.1 / len * step_len;
            }
        }
        trace!("Spring step {} at temperature {:.4}", step, temperature);
    }

    rescale(pos)
}

/// Centre on the mean and scale so the largest coordinate is 1.
fn rescale(pos: Vec<(f64, f64)>) -> Vec<Point> {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;
    let extent = pos
        .iter()
        .map(|p| (p.0 - cx).abs().max((p.1 - cy).abs()))
        .fold(0.0, f64::max);
    let scale = if extent > 0.0 { 1.0 / extent } else { 1.0 };
    pos.into_iter()
        .map(|(x, y)| Point { x: (x - cx) * scale, y: (y - cy) * scale })
        .collect()
}

/// Side-by-side drawing request for a rendering backend.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub left: Graph,
    pub right: Graph,
    pub titles: (String, String),
    pub layout: Layout,
}

impl RenderRequest {
    pub fn new(left: Graph, right: Graph, left_title: &str, right_title: &str) -> Self {
        Self {
            left,
            right,
            titles: (left_title.to_string(), right_title.to_string()),
            layout: Layout::default(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn positions(&self) -> (Vec<Point>, Vec<Point>) {
        (layout(&self.left, &self.layout), layout(&self.right, &self.layout))
    }
}
