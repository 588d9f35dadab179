//! Integration tests for mz-sim.

use mz_core::{Direction, EntityId, NodeId, SimConfig, Tick, Vector2};
use mz_graph::{MazeGraph, MazeGraphBuilder};
use mz_nav::Arrival;
use mz_policy::{InputPolicy, RandomPolicy};

use crate::{ActorKind, ActorSpec, Contact, SimBuilder, SimObserver, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        tick_dt_secs:          1.0,
        total_ticks,
        seed:                  42,
        num_threads:           Some(1),
        output_interval_ticks: 1,
    }
}

/// Five nodes in a row, 16 px apart: 0 ↔ 1 ↔ 2 ↔ 3 ↔ 4.
fn corridor() -> (MazeGraph, [NodeId; 5]) {
    let mut b = MazeGraphBuilder::new();
    let ids: [NodeId; 5] = std::array::from_fn(|i| b.add_node(Vector2::new(i as f32 * 16.0, 0.0)));
    for w in ids.windows(2) {
        b.connect(w[0], Direction::Right, w[1]);
    }
    (b.build().unwrap(), ids)
}

/// 4×4 grid, 16 px spacing.
fn grid() -> MazeGraph {
    let mut b = MazeGraphBuilder::new();
    let ids: Vec<Vec<NodeId>> = (0..4)
        .map(|r| (0..4).map(|c| b.add_node(Vector2::new(c as f32 * 16.0, r as f32 * 16.0))).collect())
        .collect();
    for r in 0..4 {
        for c in 0..4 {
            if c + 1 < 4 { b.connect(ids[r][c], Direction::Right, ids[r][c + 1]); }
            if r + 1 < 4 { b.connect(ids[r][c], Direction::Down, ids[r + 1][c]); }
        }
    }
    b.build().unwrap()
}

#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    ends:      Vec<(Tick, TickReport)>,
    arrivals:  Vec<(Tick, EntityId, Arrival)>,
    contacts:  Vec<(Tick, Contact)>,
    snapshots: Vec<(Tick, usize)>,
    finished:  Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_arrival(&mut self, tick: Tick, entity: EntityId, arrival: &Arrival) {
        self.arrivals.push((tick, entity, *arrival));
    }
    fn on_contact(&mut self, tick: Tick, contact: &Contact) {
        self.contacts.push((tick, *contact));
    }
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.ends.push((tick, *report));
    }
    fn on_snapshot(&mut self, tick: Tick, kinds: &[ActorKind], navigators: &[mz_nav::Navigator]) {
        assert_eq!(kinds.len(), navigators.len());
        self.snapshots.push((tick, navigators.len()));
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.finished = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use mz_core::MazeError;
    use mz_nav::{Color, NavConfig, NavError};

    use crate::SimError;

    #[test]
    fn builds_without_actors() {
        let (g, _) = corridor();
        let sim = SimBuilder::new(test_config(10), g).build().unwrap();
        assert_eq!(sim.entity_count(), 0);
        assert_eq!(sim.player(), None);
        assert!(sim.rngs.is_empty());
    }

    #[test]
    fn bad_start_names_the_actor() {
        let (g, [a, ..]) = corridor();
        let err = SimBuilder::new(test_config(10), g)
            .actor(ActorSpec::new(ActorKind::Player, a, InputPolicy))
            .actor(ActorSpec::new(ActorKind::Ghost, NodeId(99), RandomPolicy))
            .build()
            .err()
            .unwrap();
        assert!(matches!(
            err,
            SimError::Actor { index: 1, source: NavError::StartNodeMissing(NodeId(99)) }
        ));
    }

    #[test]
    fn bad_config_rejected() {
        let (g, _) = corridor();
        let config = SimConfig { tick_dt_secs: 0.0, ..test_config(10) };
        let err = SimBuilder::new(config, g).build().err().unwrap();
        assert!(matches!(err, SimError::Core(MazeError::Config(_))));
    }

    #[test]
    fn overrides_applied() {
        let (g, [a, b, ..]) = corridor();
        let sim = SimBuilder::new(test_config(10), g)
            .nav_config(NavConfig { base_speed: 8.0, ..NavConfig::default() })
            .actor(ActorSpec::new(ActorKind::Player, a, InputPolicy))
            .actor(
                ActorSpec::new(ActorKind::Ghost, b, RandomPolicy)
                    .speed(50.0)
                    .color(Color::RED)
                    .radius(7.0)
                    .disable_portal(),
            )
            .build()
            .unwrap();

        let player = sim.navigator(EntityId(0)).unwrap();
        assert_eq!(player.speed(), 8.0);
        assert_eq!(player.appearance.color, Color::WHITE);
        assert!(!player.disable_portal);

        let ghost = sim.navigator(EntityId(1)).unwrap();
        assert_eq!(ghost.node(), b);
        assert_eq!(ghost.speed(), 50.0);
        assert_eq!(ghost.appearance.color, Color::RED);
        assert_eq!(ghost.appearance.radius, 7.0);
        assert_eq!(ghost.appearance.collide_radius, 5.0);
        assert!(ghost.disable_portal);
        assert_eq!(sim.rngs.len(), 2);
    }
}

// ── Actor access ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod access_tests {
    use super::*;
    use mz_core::MazeError;

    use crate::SimError;

    #[test]
    fn unknown_entity_errors() {
        let (g, [a, ..]) = corridor();
        let mut sim = SimBuilder::new(test_config(10), g)
            .actor(ActorSpec::new(ActorKind::Player, a, InputPolicy))
            .build()
            .unwrap();
        let missing = EntityId(3);
        assert!(matches!(
            sim.navigator(missing),
            Err(SimError::Core(MazeError::EntityNotFound(e))) if e == missing
        ));
        assert!(sim.reverse(missing).is_err());
        assert!(sim.kind(missing).is_err());
        assert!(sim.policy_mut(missing).is_err());
        assert_eq!(sim.kind(EntityId(0)).unwrap(), ActorKind::Player);
    }

    #[test]
    fn player_and_ghost_lookup() {
        let (g, [a, b, c, ..]) = corridor();
        let sim = SimBuilder::new(test_config(10), g)
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy))
            .actor(ActorSpec::new(ActorKind::Player, b, InputPolicy))
            .actor(ActorSpec::new(ActorKind::Ghost, c, RandomPolicy))
            .build()
            .unwrap();
        assert_eq!(sim.player(), Some(EntityId(1)));
        assert_eq!(sim.ghosts().collect::<Vec<_>>(), vec![EntityId(0), EntityId(2)]);
    }

    #[test]
    fn world_view_reflects_player_and_controls() {
        let (g, [_, b, ..]) = corridor();
        let mut sim = SimBuilder::new(test_config(10), g)
            .actor(ActorSpec::new(ActorKind::Player, b, InputPolicy))
            .build()
            .unwrap();
        sim.set_input(Direction::Up);
        sim.set_ghost_mode(mz_policy::GhostMode::Chase);

        let world = sim.world_view(Tick(7));
        assert_eq!(world.tick, Tick(7));
        assert_eq!(world.player_position, Some(Vector2::new(16.0, 0.0)));
        assert_eq!(world.player_direction, Direction::Stop);
        assert_eq!(world.input, Direction::Up);
        assert_eq!(world.ghost_mode, mz_policy::GhostMode::Chase);
    }

    #[test]
    fn world_view_without_player() {
        let (g, [a, ..]) = corridor();
        let sim = SimBuilder::new(test_config(10), g)
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy))
            .build()
            .unwrap();
        assert_eq!(sim.world_view(Tick(0)).player_position, None);
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loop_tests {
    use super::*;
    use crate::NoopObserver;

    #[test]
    fn run_fires_hooks_per_tick() {
        let (g, [a, ..]) = corridor();
        let config = SimConfig { output_interval_ticks: 3, ..test_config(10) };
        let mut sim = SimBuilder::new(config, g)
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy))
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs);

        assert_eq!(obs.starts.len(), 10);
        assert_eq!(obs.ends.len(), 10);
        let snap_ticks: Vec<u64> = obs.snapshots.iter().map(|(t, _)| t.0).collect();
        assert_eq!(snap_ticks, vec![0, 3, 6, 9]);
        assert_eq!(obs.finished, Some(Tick(10)));
        assert_eq!(sim.clock.current_tick, Tick(10));
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let (g, [a, ..]) = corridor();
        let config = SimConfig { output_interval_ticks: 0, ..test_config(5) };
        let mut sim = SimBuilder::new(config, g)
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy))
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs);
        assert!(obs.snapshots.is_empty());
    }

    #[test]
    fn run_ticks_ignores_end_and_skips_sim_end() {
        let (g, [a, ..]) = corridor();
        let mut sim = SimBuilder::new(test_config(2), g)
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy))
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run_ticks(5, &mut obs);
        assert_eq!(obs.ends.len(), 5);
        assert_eq!(obs.finished, None);
        assert_eq!(sim.clock.current_tick, Tick(5));
    }

    #[test]
    fn first_tick_every_actor_decides() {
        let (g, [a, _, c, ..]) = corridor();
        let mut sim = SimBuilder::new(test_config(1), g)
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy))
            .actor(ActorSpec::new(ActorKind::Ghost, c, RandomPolicy))
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs);

        assert_eq!(obs.ends[0].1.arrivals, 2);
        let entities: Vec<EntityId> = obs.arrivals.iter().map(|(_, e, _)| *e).collect();
        assert_eq!(entities, vec![EntityId(0), EntityId(1)]);
        assert!(obs.arrivals.iter().all(|(_, _, arr)| !arr.stalled));
    }

    #[test]
    fn input_player_bounces_off_dead_end() {
        let (g, ids) = corridor();
        let mut sim = SimBuilder::new(test_config(100), g)
            .actor(ActorSpec::new(ActorKind::Player, ids[2], InputPolicy).speed(16.0))
            .build()
            .unwrap();
        sim.set_input(Direction::Right);
        sim.run_ticks(3, &mut NoopObserver);

        // The input still points into the wall, but the only way on is back.
        let player = sim.navigator(EntityId(0)).unwrap();
        assert_eq!(player.node(), ids[4]);
        assert!(!player.is_stalled());
        assert_eq!(player.target(), ids[3]);
        assert_eq!(player.direction(), Direction::Left);
        assert_eq!(player.position(), Vector2::new(64.0, 0.0));

        sim.run_ticks(1, &mut NoopObserver);
        let player = sim.navigator(EntityId(0)).unwrap();
        assert_eq!(player.node(), ids[3]);
        assert_eq!(player.target(), ids[2]);
        assert_eq!(player.position(), Vector2::new(48.0, 0.0));
    }

    #[test]
    fn input_player_never_stalls_with_open_edges() {
        let mut sim = SimBuilder::new(test_config(200), grid())
            .actor(ActorSpec::new(ActorKind::Player, NodeId(5), InputPolicy).speed(16.0))
            .build()
            .unwrap();
        for (i, input) in [Direction::Up, Direction::Stop, Direction::Left, Direction::Down]
            .into_iter()
            .cycle()
            .take(40)
            .enumerate()
        {
            if i % 3 == 0 {
                sim.set_input(input);
            }
            sim.run_ticks(1, &mut NoopObserver);
            assert!(!sim.navigator(EntityId(0)).unwrap().is_stalled(), "stalled at step {i}");
        }
    }

    #[test]
    fn opposite_input_reverses_mid_edge() {
        let (g, ids) = corridor();
        let mut sim = SimBuilder::new(test_config(100), g)
            .actor(ActorSpec::new(ActorKind::Player, ids[2], InputPolicy).speed(4.0))
            .build()
            .unwrap();
        sim.set_input(Direction::Right);
        sim.run_ticks(2, &mut NoopObserver);
        assert_eq!(sim.navigator(EntityId(0)).unwrap().position(), Vector2::new(36.0, 0.0));

        sim.set_input(Direction::Left);
        let player = sim.navigator(EntityId(0)).unwrap();
        assert_eq!(player.direction(), Direction::Left);
        assert_eq!(player.node(), ids[3]);
        assert_eq!(player.target(), ids[2]);
        assert_eq!(player.position(), Vector2::new(36.0, 0.0));

        // A perpendicular request does not turn around.
        sim.set_input(Direction::Up);
        assert_eq!(sim.navigator(EntityId(0)).unwrap().direction(), Direction::Left);
    }

    #[test]
    fn same_seed_same_run() {
        let run = |seed| {
            let config = SimConfig { seed, ..test_config(300) };
            let mut sim = SimBuilder::new(config, grid())
                .actor(ActorSpec::new(ActorKind::Ghost, NodeId(0), RandomPolicy).speed(30.0))
                .actor(ActorSpec::new(ActorKind::Ghost, NodeId(15), RandomPolicy).speed(45.0))
                .build()
                .unwrap();
            sim.run(&mut NoopObserver);
            sim.navigators.iter().map(|n| (n.node(), n.position())).collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }
}

// ── Ghost mode ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod mode_tests {
    use super::*;
    use crate::NoopObserver;
    use mz_policy::GhostMode;

    fn moving_pair() -> crate::Sim {
        let (g, ids) = corridor();
        let mut sim = SimBuilder::new(test_config(100), g)
            .actor(ActorSpec::new(ActorKind::Player, ids[0], InputPolicy).speed(4.0))
            .actor(ActorSpec::new(ActorKind::Ghost, ids[2], RandomPolicy).speed(4.0))
            .build()
            .unwrap();
        sim.set_input(Direction::Right);
        sim.run_ticks(2, &mut NoopObserver);
        sim
    }

    fn heading(sim: &crate::Sim, i: u32) -> Direction {
        sim.navigator(EntityId(i)).unwrap().direction()
    }

    #[test]
    fn default_mode_is_scatter() {
        let (g, _) = corridor();
        let sim = SimBuilder::new(test_config(1), g).build().unwrap();
        assert_eq!(sim.ghost_mode(), GhostMode::Scatter);
    }

    #[test]
    fn mode_change_reverses_ghosts_only() {
        let mut sim = moving_pair();
        let player = heading(&sim, 0);
        let ghost = heading(&sim, 1);
        assert_ne!(ghost, Direction::Stop);

        sim.set_ghost_mode(GhostMode::Chase);
        assert_eq!(heading(&sim, 1), ghost.opposite());
        assert_eq!(heading(&sim, 0), player);

        // Same mode again: nothing happens.
        sim.set_ghost_mode(GhostMode::Chase);
        assert_eq!(heading(&sim, 1), ghost.opposite());
    }

    #[test]
    fn entering_frightened_reverses_leaving_does_not() {
        let mut sim = moving_pair();
        let ghost = heading(&sim, 1);

        sim.set_ghost_mode(GhostMode::Frightened);
        assert_eq!(heading(&sim, 1), ghost.opposite());

        sim.set_ghost_mode(GhostMode::Scatter);
        assert_eq!(heading(&sim, 1), ghost.opposite());
        assert_eq!(sim.ghost_mode(), GhostMode::Scatter);
    }

    #[test]
    fn reverse_single_actor() {
        let mut sim = moving_pair();
        let before = sim.navigator(EntityId(0)).unwrap().clone();
        sim.reverse(EntityId(0)).unwrap();
        let after = sim.navigator(EntityId(0)).unwrap();
        assert_eq!(after.node(), before.target());
        assert_eq!(after.target(), before.node());
        assert_eq!(after.direction(), before.direction().opposite());
    }
}

// ── Contacts ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod contact_tests {
    use super::*;

    #[test]
    fn overlapping_player_and_ghost_touch() {
        let (g, [a, _, c, ..]) = corridor();
        let mut sim = SimBuilder::new(test_config(1), g)
            .actor(ActorSpec::new(ActorKind::Player, a, InputPolicy).speed(0.0))
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy).speed(0.0))
            .actor(ActorSpec::new(ActorKind::Ghost, c, RandomPolicy).speed(0.0))
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs);

        assert_eq!(obs.contacts, vec![(Tick(0), Contact { player: EntityId(0), ghost: EntityId(1) })]);
        assert_eq!(obs.ends[0].1.contacts, 1);
    }

    #[test]
    fn hidden_actors_do_not_touch() {
        let (g, [a, ..]) = corridor();
        let mut sim = SimBuilder::new(test_config(1), g)
            .actor(ActorSpec::new(ActorKind::Player, a, InputPolicy).speed(0.0))
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy).speed(0.0))
            .build()
            .unwrap();
        sim.navigator_mut(EntityId(1)).unwrap().appearance.visible = false;
        let mut obs = Recorder::default();
        sim.run(&mut obs);
        assert!(obs.contacts.is_empty());
    }

    #[test]
    fn ghosts_do_not_touch_each_other() {
        let (g, [a, ..]) = corridor();
        let mut sim = SimBuilder::new(test_config(1), g)
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy).speed(0.0))
            .actor(ActorSpec::new(ActorKind::Ghost, a, RandomPolicy).speed(0.0))
            .build()
            .unwrap();
        let mut obs = Recorder::default();
        sim.run(&mut obs);
        assert!(obs.contacts.is_empty());
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod audio_tests {
    use crate::{AudioChannel, SoundBoard, SoundCue};

    #[derive(Default)]
    struct FakeChannel {
        played:   Vec<(SoundCue, bool)>,
        calls:    Vec<&'static str>,
        busy:     bool,
    }

    impl AudioChannel for FakeChannel {
        fn play(&mut self, cue: SoundCue, looped: bool) {
            self.played.push((cue, looped));
            self.calls.push("play");
        }
        fn pause(&mut self) {
            self.calls.push("pause");
        }
        fn unpause(&mut self) {
            self.calls.push("unpause");
        }
        fn is_busy(&self) -> bool {
            self.busy
        }
    }

    fn board() -> SoundBoard<FakeChannel> {
        SoundBoard::new(FakeChannel::default(), FakeChannel::default())
    }

    #[test]
    fn effects_go_to_effects_channel() {
        let mut b = board();
        b.play_startup();
        b.play_death();
        b.play_munch_ghost();
        b.play_munch_fruit();
        assert_eq!(b.effects().played, vec![
            (SoundCue::Startup, false),
            (SoundCue::Death, false),
            (SoundCue::MunchGhost, false),
            (SoundCue::MunchFruit, false),
        ]);
        assert!(b.siren().played.is_empty());
    }

    #[test]
    fn pellet_dropped_while_busy() {
        let mut b = SoundBoard::new(FakeChannel { busy: true, ..Default::default() }, FakeChannel::default());
        b.play_munch_pellet();
        assert!(b.effects().played.is_empty());

        let mut b = board();
        b.play_munch_pellet();
        assert_eq!(b.effects().played, vec![(SoundCue::MunchPellet, false)]);
    }

    #[test]
    fn busy_channel_still_takes_other_effects() {
        let mut b = SoundBoard::new(FakeChannel { busy: true, ..Default::default() }, FakeChannel::default());
        b.play_death();
        assert_eq!(b.effects().played, vec![(SoundCue::Death, false)]);
    }

    #[test]
    fn siren_unpauses_then_loops() {
        let mut b = board();
        b.play_ghost_siren();
        b.pause_ghost_siren();
        assert_eq!(b.siren().calls, vec!["unpause", "play", "pause"]);
        assert_eq!(b.siren().played, vec![(SoundCue::GhostSiren, true)]);
        assert!(b.effects().calls.is_empty());
    }

    #[test]
    fn every_cue_has_an_asset() {
        for cue in SoundCue::ALL {
            assert!(cue.file_name().ends_with(".wav"), "{cue}");
        }
    }
}

// ── Parallel update ───────────────────────────────────────────────────────────

#[cfg(all(test, feature = "parallel"))]
mod parallel_tests {
    use super::*;
    use crate::NoopObserver;

    fn ghosts(num_threads: Option<usize>) -> crate::Sim {
        let config = SimConfig { num_threads, ..test_config(120) };
        let mut builder = SimBuilder::new(config, grid());
        for i in 0..8u32 {
            builder = builder.actor(
                ActorSpec::new(ActorKind::Ghost, NodeId(i * 2), RandomPolicy).speed(20.0 + i as f32),
            );
        }
        builder.build().unwrap()
    }

    fn trail(sim: &crate::Sim) -> Vec<(NodeId, NodeId, Vector2)> {
        sim.navigators.iter().map(|n| (n.node(), n.target(), n.position())).collect()
    }

    #[test]
    fn matches_sequential_stepping() {
        let mut parallel = ghosts(Some(4));
        let mut obs = Recorder::default();
        parallel.run_ticks(120, &mut obs);

        // Same actors, stepped one at a time in entity order.
        let mut reference = ghosts(Some(1));
        let dt = reference.clock.tick_dt_secs;
        let mut expected = Vec::new();
        for t in 0..120 {
            let world = reference.world_view(Tick(t));
            for i in 0..reference.entity_count() {
                let id = EntityId(i as u32);
                let arrival = reference.navigators[i].update(
                    dt,
                    &reference.graph,
                    &world,
                    &mut reference.policies[i],
                    reference.rngs.get_mut(id),
                );
                if let Some(arrival) = arrival {
                    expected.push((Tick(t), id, arrival));
                }
            }
        }

        assert_eq!(trail(&parallel), trail(&reference));
        assert_eq!(obs.arrivals, expected);
    }

    #[test]
    fn thread_count_does_not_change_the_run() {
        let run = |threads| {
            let mut sim = ghosts(threads);
            sim.run(&mut NoopObserver);
            trail(&sim)
        };
        let one = run(Some(1));
        assert_eq!(run(Some(3)), one);
        assert_eq!(run(None), one);
    }

    #[test]
    fn pool_built_only_when_sized() {
        assert!(ghosts(Some(2)).pool.is_some());
        assert!(ghosts(None).pool.is_none());
    }
}
