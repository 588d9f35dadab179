//! Per-entity travel state and the arrival/decision step.

use tracing::trace;

use mz_core::{Direction, EntityRng, Link, NodeId, Vector2};
use mz_graph::MazeGraph;
use mz_policy::{Decision, DirectionPolicy, WorldView};

use crate::{Appearance, NavConfig, NavError, NavResult};

/// What happened when a navigator reached a node during [`Navigator::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arrival {
    /// The node that was reached.
    pub node: NodeId,

    /// Where the portal at `node` sent the navigator, if it was taken.
    pub portal: Option<NodeId>,

    /// Heading committed for the next edge.
    pub direction: Direction,

    /// The next edge's destination.
    pub target: NodeId,

    /// `true` when no usable edge was found and `target == node`.
    pub stalled: bool,
}

/// A traveler on the maze graph: one per player or ghost.
///
/// The navigator is always between `node` (the last node fully reached) and
/// `target` (the node it is heading to); `position` lies on that segment.
/// Concrete game entities compose a navigator with a
/// [`DirectionPolicy`] and whatever extra state they need.
#[derive(Debug, Clone)]
pub struct Navigator {
    position:  Vector2,
    node:      NodeId,
    target:    NodeId,
    direction: Direction,
    speed:     f32,
    tile_width: f32,

    /// Display fields for the render sink.
    pub appearance: Appearance,

    /// When `true`, portal links are ignored on arrival.
    pub disable_portal: bool,
}

impl Navigator {
    /// Bind a new navigator to `start`.  It begins stationary (`Stop`) with
    /// `node == target == start`, so its first update picks a direction.
    ///
    /// # Errors
    ///
    /// [`NavError::StartNodeMissing`] if `start` is not a node of `graph`.
    pub fn new(graph: &MazeGraph, start: NodeId, config: &NavConfig) -> NavResult<Self> {
        let position = graph.position(start).ok_or(NavError::StartNodeMissing(start))?;
        let mut nav = Self {
            position,
            node:       start,
            target:     start,
            direction:  Direction::Stop,
            speed:      0.0,
            tile_width: config.tile_width,
            appearance: Appearance {
                radius:         config.radius,
                collide_radius: config.collide_radius,
                color:          config.color,
                visible:        true,
            },
            disable_portal: false,
        };
        nav.set_speed(config.base_speed);
        Ok(nav)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    #[inline]
    pub fn node(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub fn target(&self) -> NodeId {
        self.target
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Effective speed in pixels per second.
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// `true` while there is no edge to travel (`target == node`).
    #[inline]
    pub fn is_stalled(&self) -> bool {
        self.target == self.node
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance one frame of `dt` seconds.
    ///
    /// Returns `Some(Arrival)` on the frames where the navigator reached its
    /// target and chose a new edge, `None` while travelling.
    ///
    /// `dt` is not clamped: a step longer than the current edge is still
    /// detected (the navigator snaps onto the target), but nodes beyond the
    /// target are never visited within one call.
    pub fn update<P: DirectionPolicy + ?Sized>(
        &mut self,
        dt:     f32,
        graph:  &MazeGraph,
        world:  &WorldView,
        policy: &mut P,
        rng:    &mut EntityRng,
    ) -> Option<Arrival> {
        self.position += self.direction.delta() * (self.speed * dt);

        if !self.overshot_target(graph) {
            return None;
        }

        let arrived = self.target;
        self.node = arrived;

        let valid = self.valid_directions(graph);
        let choice = {
            let ctx = Decision {
                graph,
                node: self.node,
                position: self.position,
                direction: self.direction,
                valid: &valid,
                world,
            };
            policy.choose(&ctx, rng)
        };

        // Portal before target selection: the choice is evaluated against
        // the destination node's own edges.
        let mut portal = None;
        if !self.disable_portal {
            if let Some(dest) = graph.neighbor(self.node, Link::Portal) {
                trace!(from = %self.node, to = %dest, "portal");
                self.node = dest;
                portal = Some(dest);
            }
        }

        let new_target = self.new_target(graph, choice);
        if new_target != self.node {
            self.direction = choice;
            self.target = new_target;
        } else {
            self.target = self.new_target(graph, self.direction);
        }

        self.set_position(graph);

        let stalled = self.is_stalled();
        if stalled {
            trace!(node = %self.node, direction = %self.direction, "stalled");
        } else {
            trace!(node = %arrived, next = %self.target, direction = %self.direction, "arrived");
        }

        Some(Arrival {
            node: arrived,
            portal,
            direction: self.direction,
            target: self.target,
            stalled,
        })
    }

    // ── Graph queries ─────────────────────────────────────────────────────

    /// `true` if `direction` is not `Stop` and `node` has an edge that way.
    pub fn valid_direction(&self, graph: &MazeGraph, direction: Direction) -> bool {
        graph
            .node(self.node)
            .and_then(|n| n.neighbor_toward(direction))
            .is_some()
    }

    /// The neighbor of `node` toward `direction`, or `node` itself when that
    /// direction has no edge.
    pub fn new_target(&self, graph: &MazeGraph, direction: Direction) -> NodeId {
        graph
            .node(self.node)
            .and_then(|n| n.neighbor_toward(direction))
            .unwrap_or(self.node)
    }

    /// Has the navigator reached or passed `target`?
    ///
    /// Compares squared distance travelled from `node` with the squared edge
    /// length; valid because `position` stays on the `node → target` segment.
    /// A stalled navigator (`target == node`) is always overshot, so it
    /// retries its decision every tick.  `false` if either end is not a node
    /// of `graph`.
    pub fn overshot_target(&self, graph: &MazeGraph) -> bool {
        let (Some(target), Some(origin)) = (graph.position(self.target), graph.position(self.node))
        else {
            return false;
        };
        let edge = target - origin;
        let travelled = self.position - origin;
        travelled.magnitude_squared() >= edge.magnitude_squared()
    }

    /// Cardinal directions open at `node`, in fixed order, minus the way
    /// back.  Never empty: with nothing else open the reverse is returned
    /// alone, forcing a U-turn at a dead end.
    pub fn valid_directions(&self, graph: &MazeGraph) -> Vec<Direction> {
        let back = self.direction.opposite();
        let mut dirs: Vec<Direction> = Direction::CARDINALS
            .into_iter()
            .filter(|&d| d != back && self.valid_direction(graph, d))
            .collect();
        if dirs.is_empty() {
            dirs.push(back);
        }
        dirs
    }

    /// `true` if `direction` is the exact reverse of the current heading.
    #[inline]
    pub fn opposite_direction(&self, direction: Direction) -> bool {
        direction != Direction::Stop && direction == self.direction.opposite()
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    /// Turn around mid-edge: negate the heading and swap `node`/`target`.
    /// `position` is untouched, so the navigator retraces the same segment.
    pub fn reverse_direction(&mut self) {
        self.direction = self.direction.opposite();
        std::mem::swap(&mut self.node, &mut self.target);
    }

    /// Set speed in 16 px tile units; stored scaled by `tile_width / 16`.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed * self.tile_width / 16.0;
    }

    /// Snap `position` exactly onto `node`.
    pub fn set_position(&mut self, graph: &MazeGraph) {
        if let Some(p) = graph.position(self.node) {
            self.position = p;
        }
    }

    // ── Contacts ──────────────────────────────────────────────────────────

    /// Simple radius check against another navigator.
    pub fn collides_with(&self, other: &Navigator) -> bool {
        let reach = self.appearance.collide_radius + other.appearance.collide_radius;
        self.position.distance_squared(other.position) <= reach * reach
    }
}
