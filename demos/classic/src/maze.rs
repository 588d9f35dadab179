//! The demo maze: a 3×3 block of junctions above a wrap-around tunnel.
//!
//! ```text
//!   n00 ── n01 ── n02
//!    │      │      │
//!   n10 ── n11 ── n12
//!    │      │      │
//!   n20 ── n21 ── n22
//!           │
//! tl ────── m ────── tr      tl ⇄ tr by portal
//! ```

use mz_core::{Direction, NodeId, Vector2};
use mz_graph::{GraphResult, MazeGraph, MazeGraphBuilder};

const T: f32 = mz_core::TILE_WIDTH;

/// Named places the demo needs besides the graph itself.
pub struct Layout {
    pub player_start: NodeId,
    /// Where the ghosts start (the centre junction).
    pub pen:          NodeId,
    /// Scatter corners: top-left, top-right, bottom-left, bottom-right.
    pub corners:      [Vector2; 4],
}

pub fn build_maze() -> GraphResult<(MazeGraph, Layout)> {
    let mut b = MazeGraphBuilder::with_capacity(12);

    let mut n = [[NodeId::INVALID; 3]; 3];
    for (r, row) in n.iter_mut().enumerate() {
        for (c, id) in row.iter_mut().enumerate() {
            *id = b.add_node(Vector2::new(T + c as f32 * 4.0 * T, T + r as f32 * 4.0 * T));
        }
    }
    for r in 0..3 {
        for c in 0..3 {
            if c + 1 < 3 { b.connect(n[r][c], Direction::Right, n[r][c + 1]); }
            if r + 1 < 3 { b.connect(n[r][c], Direction::Down, n[r + 1][c]); }
        }
    }

    let tunnel_y = 13.0 * T;
    let tl = b.add_node(Vector2::new(0.0, tunnel_y));
    let m  = b.add_node(Vector2::new(5.0 * T, tunnel_y));
    let tr = b.add_node(Vector2::new(10.0 * T, tunnel_y));
    b.connect(tl, Direction::Right, m);
    b.connect(m, Direction::Right, tr);
    b.connect(n[2][1], Direction::Down, m);
    b.add_portal_pair(tl, tr);

    let graph = b.build()?;
    let layout = Layout {
        player_start: m,
        pen:          n[1][1],
        corners: [
            Vector2::new(-2.0 * T, -2.0 * T),
            Vector2::new(12.0 * T, -2.0 * T),
            Vector2::new(-2.0 * T, 16.0 * T),
            Vector2::new(12.0 * T, 16.0 * T),
        ],
    };
    Ok((graph, layout))
}
