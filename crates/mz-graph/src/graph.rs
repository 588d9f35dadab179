//! Maze graph representation and builder.
//!
//! # Data layout
//!
//! Nodes live in a flat arena indexed by `NodeId`.  Every node carries a
//! fixed five-slot neighbor array indexed by [`Link`]:
//!
//! ```text
//! neighbors[Link::Up | Down | Left | Right | Portal] -> Option<NodeId>
//! ```
//!
//! All five slots always exist, so a lookup is a bounds-checked array read
//! with no hashing.  An absent slot means "no edge that way".
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `[x, y]` to the nearest `NodeId`.  Hosts use
//! it to snap spawn points and click positions onto the graph.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use tracing::debug;

use mz_core::{Direction, Link, NodeId, Vector2};

use crate::{GraphError, GraphResult};

// ── R-tree node entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct NodeEntry {
    point: [f32; 2], // [x, y]
    id: NodeId,
}

impl RTreeObject for NodeEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for NodeEntry {
    fn distance_2(&self, point: &[f32; 2]) -> f32 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── MazeNode ──────────────────────────────────────────────────────────────────

/// A graph vertex: a position and five optional neighbor links.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeNode {
    pub position: Vector2,
    pub neighbors: [Option<NodeId>; Link::COUNT],
}

impl MazeNode {
    pub fn new(position: Vector2) -> Self {
        Self { position, neighbors: [None; Link::COUNT] }
    }

    #[inline]
    pub fn neighbor(&self, link: Link) -> Option<NodeId> {
        self.neighbors[link.index()]
    }

    /// Neighbor reached by travelling `direction`.  Always `None` for `Stop`.
    #[inline]
    pub fn neighbor_toward(&self, direction: Direction) -> Option<NodeId> {
        direction.link().and_then(|l| self.neighbor(l))
    }

    #[inline]
    pub fn portal(&self) -> Option<NodeId> {
        self.neighbor(Link::Portal)
    }
}

// ── MazeGraph ─────────────────────────────────────────────────────────────────

/// Read-only maze graph plus a spatial index for node snapping.
///
/// Do not construct directly; use [`MazeGraphBuilder`].
pub struct MazeGraph {
    nodes: Vec<MazeNode>,
    spatial_idx: RTree<NodeEntry>,
}

impl MazeGraph {
    /// A graph with no nodes.  Every lookup against it returns `None`.
    pub fn empty() -> Self {
        Self { nodes: Vec::new(), spatial_idx: RTree::new() }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// `true` if `id` names a node in this graph.  `NodeId::INVALID` never does.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    // ── Node access ───────────────────────────────────────────────────────

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&MazeNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn position(&self, id: NodeId) -> Option<Vector2> {
        self.node(id).map(|n| n.position)
    }

    #[inline]
    pub fn neighbor(&self, id: NodeId, link: Link) -> Option<NodeId> {
        self.node(id).and_then(|n| n.neighbor(link))
    }

    /// Iterate `(NodeId, &MazeNode)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MazeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId(i as u32), n))
    }

    /// Every `(from, to)` portal link in the graph.
    pub fn portals(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.iter().filter_map(|(id, n)| n.portal().map(|to| (id, to)))
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The node closest to `pos`.  `None` only if the graph has no nodes.
    pub fn nearest_node(&self, pos: Vector2) -> Option<NodeId> {
        self.spatial_idx
            .nearest_neighbor(&[pos.x, pos.y])
            .map(|e| e.id)
    }
}

// ── MazeGraphBuilder ──────────────────────────────────────────────────────────

/// Construct a [`MazeGraph`] incrementally, then call [`build`](Self::build).
///
/// Nodes and links may be added in any order.  `build()` resolves the links
/// into per-node slot arrays and rejects any link that points outside the
/// graph, so a built graph never holds a dangling reference.
///
/// # Example
///
/// ```
/// use mz_core::{Direction, Vector2};
/// use mz_graph::MazeGraphBuilder;
///
/// let mut b = MazeGraphBuilder::new();
/// let a = b.add_node(Vector2::new(0.0, 0.0));
/// let c = b.add_node(Vector2::new(32.0, 0.0));
/// b.connect(a, Direction::Right, c);
/// let graph = b.build().unwrap();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.node(a).unwrap().neighbor_toward(Direction::Right), Some(c));
/// assert_eq!(graph.node(c).unwrap().neighbor_toward(Direction::Left), Some(a));
/// ```
pub struct MazeGraphBuilder {
    positions: Vec<Vector2>,
    raw_links: Vec<RawLink>,
}

struct RawLink {
    from: NodeId,
    link: Link,
    to:   NodeId,
}

impl MazeGraphBuilder {
    pub fn new() -> Self {
        Self { positions: Vec::new(), raw_links: Vec::new() }
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            positions: Vec::with_capacity(nodes),
            raw_links: Vec::with_capacity(nodes * 4),
        }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, pos: Vector2) -> NodeId {
        let id = NodeId(self.positions.len() as u32);
        self.positions.push(pos);
        id
    }

    /// Set a single **directed** slot: `from.neighbors[link] = to`.
    ///
    /// A later call for the same `(from, link)` replaces the earlier one.
    pub fn link(&mut self, from: NodeId, link: Link, to: NodeId) {
        self.raw_links.push(RawLink { from, link, to });
    }

    /// Convenience: a corridor travelled both ways.  Sets `a` → `b` along
    /// `direction` and `b` → `a` along its opposite.  `Stop` adds nothing.
    pub fn connect(&mut self, a: NodeId, direction: Direction, b: NodeId) {
        if let (Some(there), Some(back)) = (direction.link(), direction.opposite().link()) {
            self.link(a, there, b);
            self.link(b, back, a);
        }
    }

    /// Mutual portal between `a` and `b`.
    pub fn add_portal_pair(&mut self, a: NodeId, b: NodeId) {
        self.link(a, Link::Portal, b);
        self.link(b, Link::Portal, a);
    }

    pub fn node_count(&self) -> usize { self.positions.len() }
    pub fn link_count(&self) -> usize { self.raw_links.len() }

    /// Consume the builder and produce a [`MazeGraph`].
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if a link starts at a node never added.
    /// - [`GraphError::DanglingLink`] if a link points at a node never added.
    pub fn build(self) -> GraphResult<MazeGraph> {
        let node_count = self.positions.len();
        let mut nodes: Vec<MazeNode> = self.positions.iter().map(|&p| MazeNode::new(p)).collect();

        for raw in &self.raw_links {
            if raw.from.index() >= node_count {
                return Err(GraphError::UnknownNode(raw.from));
            }
            if raw.to.index() >= node_count {
                return Err(GraphError::DanglingLink {
                    from: raw.from,
                    link: raw.link,
                    to:   raw.to,
                });
            }
            nodes[raw.from.index()].neighbors[raw.link.index()] = Some(raw.to);
        }

        let entries: Vec<NodeEntry> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| NodeEntry {
                point: [n.position.x, n.position.y],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        debug!(nodes = node_count, links = self.raw_links.len(), "maze graph built");

        Ok(MazeGraph { nodes, spatial_idx })
    }
}

impl Default for MazeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
