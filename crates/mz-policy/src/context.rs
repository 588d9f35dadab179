//! Read-only state passed to every policy decision.

use mz_core::{Direction, NodeId, Tick, Vector2};
use mz_graph::MazeGraph;

/// Global ghost behavior, switched by the host on a timer or by power pellets.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GhostMode {
    /// Head for a fixed home corner.
    #[default]
    Scatter,
    /// Head for a goal derived from the player.
    Chase,
    /// Wander randomly.
    Frightened,
}

/// A per-tick snapshot of host state that policies may consult.
///
/// Built once per tick by the host and shared immutably across every
/// entity's update.  `WorldView::default()` is a quiet world: no player,
/// no input, scatter mode.
#[derive(Clone, Debug, Default)]
pub struct WorldView {
    pub tick: Tick,

    /// Where the player is, if there is one.
    pub player_position: Option<Vector2>,

    /// The player's current heading.
    pub player_direction: Direction,

    pub ghost_mode: GhostMode,

    /// Latest direction requested by the input handler.  `Stop` = no input.
    pub input: Direction,
}

/// Everything a policy needs to choose at one node.
///
/// `valid` is the navigator's candidate list for this node, in fixed
/// cardinal order and never empty.
pub struct Decision<'a> {
    pub graph: &'a MazeGraph,

    /// The node the entity just reached.
    pub node: NodeId,

    pub position: Vector2,

    /// Heading on arrival.
    pub direction: Direction,

    pub valid: &'a [Direction],

    pub world: &'a WorldView,
}

impl<'a> Decision<'a> {
    #[inline]
    pub fn is_valid(&self, direction: Direction) -> bool {
        self.valid.contains(&direction)
    }

    /// Position of the neighbor reached by leaving `node` toward `direction`.
    pub fn neighbor_position(&self, direction: Direction) -> Option<Vector2> {
        let node = self.graph.node(self.node)?;
        let next = node.neighbor_toward(direction)?;
        self.graph.position(next)
    }

    /// First candidate in cardinal order.  `Stop` only if `valid` is empty,
    /// which the navigator never produces.
    #[inline]
    pub fn first_valid(&self) -> Direction {
        self.valid.first().copied().unwrap_or(Direction::Stop)
    }
}
