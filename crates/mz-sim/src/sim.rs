//! The `Sim` struct and its tick loop.

use mz_core::{Direction, EntityId, EntityRngs, FrameClock, MazeError, SimConfig, Tick};
use mz_graph::MazeGraph;
use mz_nav::{Arrival, Navigator};
use mz_policy::{DirectionPolicy, GhostMode, Policy, WorldView};
use tracing::{debug, info};

use crate::{ActorKind, Contact, SimObserver, SimResult, TickReport};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The fixed-step host.
///
/// Each tick:
///
/// 1. **World**: build a [`WorldView`] from the first player, the latest
///    input, and the ghost mode.
/// 2. **Update** (optionally parallel with the `parallel` feature): advance
///    every navigator by `tick_dt_secs`, letting its policy choose on
///    arrival.  Navigators never read each other here, so the order does
///    not affect results.
/// 3. **Report**: arrivals in ascending `EntityId`, then player/ghost
///    contacts among visible actors.
///
/// Actor state is stored as parallel arrays indexed by `EntityId`.
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: DirectionPolicy = Policy> {
    /// Global configuration (tick length, total ticks, seed, …).
    pub config: SimConfig,

    pub clock: FrameClock,

    /// The maze.  Read-only for the whole run.
    pub graph: MazeGraph,

    pub kinds: Vec<ActorKind>,

    pub navigators: Vec<Navigator>,

    pub policies: Vec<P>,

    /// Per-actor deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: EntityRngs,

    pub(crate) input:      Direction,
    pub(crate) ghost_mode: GhostMode,

    #[cfg(feature = "parallel")]
    pub(crate) pool: Option<rayon::ThreadPool>,
}

impl<P: DirectionPolicy> Sim<P> {
    // ── Actor access ──────────────────────────────────────────────────────

    #[inline]
    pub fn entity_count(&self) -> usize {
        self.navigators.len()
    }

    pub fn navigator(&self, entity: EntityId) -> SimResult<&Navigator> {
        self.navigators
            .get(entity.index())
            .ok_or(MazeError::EntityNotFound(entity).into())
    }

    pub fn navigator_mut(&mut self, entity: EntityId) -> SimResult<&mut Navigator> {
        self.navigators
            .get_mut(entity.index())
            .ok_or(MazeError::EntityNotFound(entity).into())
    }

    pub fn policy_mut(&mut self, entity: EntityId) -> SimResult<&mut P> {
        self.policies
            .get_mut(entity.index())
            .ok_or(MazeError::EntityNotFound(entity).into())
    }

    pub fn kind(&self, entity: EntityId) -> SimResult<ActorKind> {
        self.kinds
            .get(entity.index())
            .copied()
            .ok_or(MazeError::EntityNotFound(entity).into())
    }

    /// The first actor of kind `Player`, if any.
    pub fn player(&self) -> Option<EntityId> {
        self.kinds
            .iter()
            .position(|&k| k == ActorKind::Player)
            .map(|i| EntityId(i as u32))
    }

    pub fn ghosts(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.kinds
            .iter()
            .enumerate()
            .filter(|(_, k)| **k == ActorKind::Ghost)
            .map(|(i, _)| EntityId(i as u32))
    }

    // ── Host controls ─────────────────────────────────────────────────────

    #[inline]
    pub fn input(&self) -> Direction {
        self.input
    }

    /// Record the latest requested direction.
    ///
    /// Turns are taken at the next node by the players' policies, but a
    /// request to go straight back turns every player around on the spot.
    pub fn set_input(&mut self, direction: Direction) {
        self.input = direction;
        if direction == Direction::Stop {
            return;
        }
        for (kind, nav) in self.kinds.iter().zip(self.navigators.iter_mut()) {
            if *kind == ActorKind::Player && nav.opposite_direction(direction) {
                nav.reverse_direction();
                debug!(direction = %direction, "player reversed");
            }
        }
    }

    #[inline]
    pub fn ghost_mode(&self) -> GhostMode {
        self.ghost_mode
    }

    /// Switch every ghost's mode.  A change reverses all ghosts, except when
    /// leaving `Frightened`.
    pub fn set_ghost_mode(&mut self, mode: GhostMode) {
        let previous = self.ghost_mode;
        if mode == previous {
            return;
        }
        self.ghost_mode = mode;
        debug!(from = ?previous, to = ?mode, "ghost mode");

        if previous == GhostMode::Frightened {
            return;
        }
        for (kind, nav) in self.kinds.iter().zip(self.navigators.iter_mut()) {
            if *kind == ActorKind::Ghost {
                nav.reverse_direction();
            }
        }
    }

    /// Turn one actor around mid-edge.
    pub fn reverse(&mut self, entity: EntityId) -> SimResult<()> {
        self.navigator_mut(entity)?.reverse_direction();
        Ok(())
    }

    /// The snapshot policies see during tick `tick`.
    pub fn world_view(&self, tick: Tick) -> WorldView {
        let player = self.player().map(|p| &self.navigators[p.index()]);
        WorldView {
            tick,
            player_position:  player.map(Navigator::position),
            player_direction: player.map_or(Direction::Stop, Navigator::direction),
            ghost_mode:       self.ghost_mode,
            input:            self.input,
        }
    }

    // ── Run ───────────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) {
        let start = self.clock.current_tick;
        info!(from = %start, to = %self.config.end_tick(), actors = self.entity_count(), "run start");

        while self.clock.current_tick < self.config.end_tick() {
            self.step(observer);
        }

        let end = self.clock.current_tick;
        observer.on_sim_end(end);
        info!(ticks = end.0.saturating_sub(start.0), elapsed = %self.clock, "run end");
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let world = self.world_view(now);
        let arrivals = self.update_all(&world);
        for (entity, arrival) in &arrivals {
            observer.on_arrival(now, *entity, arrival);
        }

        let contacts = self.contacts();
        for contact in &contacts {
            observer.on_contact(now, contact);
        }

        let report = TickReport { arrivals: arrivals.len(), contacts: contacts.len() };
        observer.on_tick_end(now, &report);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.kinds, &self.navigators);
        }

        self.clock.advance();
    }

    /// Advance every navigator one tick; return the arrivals in ascending
    /// `EntityId` order.
    fn update_all(&mut self, world: &WorldView) -> Vec<(EntityId, Arrival)> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let dt         = self.clock.tick_dt_secs;
        let graph      = &self.graph;
        let navigators = &mut self.navigators;
        let policies   = &mut self.policies;
        let rngs       = &mut self.rngs.inner;

        #[cfg(not(feature = "parallel"))]
        {
            navigators
                .iter_mut()
                .zip(policies.iter_mut())
                .zip(rngs.iter_mut())
                .enumerate()
                .filter_map(|(i, ((nav, policy), rng))| {
                    nav.update(dt, graph, world, policy, rng)
                        .map(|arrival| (EntityId(i as u32), arrival))
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // Indexed collect keeps ascending EntityId order.
            let mut update = || {
                navigators
                    .par_iter_mut()
                    .zip(policies.par_iter_mut())
                    .zip(rngs.par_iter_mut())
                    .enumerate()
                    .filter_map(|(i, ((nav, policy), rng))| {
                        nav.update(dt, graph, world, policy, rng)
                            .map(|arrival| (EntityId(i as u32), arrival))
                    })
                    .collect::<Vec<_>>()
            };
            match &self.pool {
                Some(pool) => pool.install(update),
                None       => update(),
            }
        }
    }

    /// Every visible player/ghost pair whose collide radii overlap.
    fn contacts(&self) -> Vec<Contact> {
        let visible = |i: usize| self.navigators[i].appearance.visible;
        let mut out = Vec::new();
        for p in (0..self.kinds.len()).filter(|&i| self.kinds[i] == ActorKind::Player && visible(i)) {
            for g in (0..self.kinds.len()).filter(|&i| self.kinds[i] == ActorKind::Ghost && visible(i)) {
                if self.navigators[p].collides_with(&self.navigators[g]) {
                    out.push(Contact { player: EntityId(p as u32), ghost: EntityId(g as u32) });
                }
            }
        }
        out
    }
}
