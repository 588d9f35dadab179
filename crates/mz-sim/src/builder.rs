//! Fluent builder for constructing a [`Sim`].

use mz_core::{EntityRngs, SimConfig};
use mz_graph::MazeGraph;
use mz_nav::{NavConfig, Navigator};
use mz_policy::{DirectionPolicy, GhostMode, Policy};
use tracing::info;

use crate::{ActorSpec, Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: tick length, total ticks, seed, …
/// - [`MazeGraph`]: the finished maze
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                 |
/// |---------------------|-------------------------|
/// | `.nav_config(c)`    | `NavConfig::default()`  |
/// | `.actor(spec)`      | no actors               |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, graph)
///     .actor(ActorSpec::new(ActorKind::Player, home, InputPolicy))
///     .actor(ActorSpec::new(ActorKind::Ghost, pen, GhostPolicy::new(corner, ChaseRule::Direct)))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<P: DirectionPolicy = Policy> {
    config:     SimConfig,
    graph:      MazeGraph,
    nav_config: NavConfig,
    actors:     Vec<ActorSpec<P>>,
}

impl SimBuilder<Policy> {
    /// Create a builder whose actors use the built-in [`Policy`] enum.
    pub fn new(config: SimConfig, graph: MazeGraph) -> Self {
        Self::with_policies(config, graph)
    }
}

impl<P: DirectionPolicy> SimBuilder<P> {
    /// Create a builder for a host-defined policy type.
    pub fn with_policies(config: SimConfig, graph: MazeGraph) -> Self {
        Self {
            config,
            graph,
            nav_config: NavConfig::default(),
            actors:     Vec::new(),
        }
    }

    /// Defaults for every actor not overriding them.
    pub fn nav_config(mut self, config: NavConfig) -> Self {
        self.nav_config = config;
        self
    }

    /// Append one actor; it gets the next `EntityId`.
    pub fn actor(mut self, spec: ActorSpec<P>) -> Self {
        self.actors.push(spec);
        self
    }

    /// Validate the config, bind every actor to its start node, and return
    /// a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        self.config.validate()?;

        let count = self.actors.len();
        let mut kinds      = Vec::with_capacity(count);
        let mut navigators = Vec::with_capacity(count);
        let mut policies   = Vec::with_capacity(count);

        for (index, spec) in self.actors.into_iter().enumerate() {
            let mut nav = Navigator::new(&self.graph, spec.start, &self.nav_config)
                .map_err(|source| SimError::Actor { index, source })?;
            if let Some(speed) = spec.speed {
                nav.set_speed(speed);
            }
            if let Some(color) = spec.color {
                nav.appearance.color = color;
            }
            if let Some(radius) = spec.radius {
                nav.appearance.radius = radius;
            }
            nav.disable_portal = spec.disable_portal;

            kinds.push(spec.kind);
            navigators.push(nav);
            policies.push(spec.policy);
        }

        #[cfg(feature = "parallel")]
        let pool = match self.config.num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None    => None,
        };

        info!(
            actors = count,
            nodes = self.graph.node_count(),
            seed = self.config.seed,
            "sim built"
        );

        Ok(Sim {
            clock:      self.config.make_clock(),
            rngs:       EntityRngs::new(count, self.config.seed),
            config:     self.config,
            graph:      self.graph,
            kinds,
            navigators,
            policies,
            input:      mz_core::Direction::Stop,
            ghost_mode: GhostMode::default(),
            #[cfg(feature = "parallel")]
            pool,
        })
    }
}
