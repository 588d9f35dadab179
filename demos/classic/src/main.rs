//! classic: one player and four ghosts on a small wrap-around maze.
//!
//! A scripted joystick steers the player, a mode timer switches the ghosts
//! between scatter, chase and frightened, and every snapshot is written to
//! CSV.  Sound cues go to a channel that only logs them.
//!
//! ```text
//! cargo run -p classic -- [config.json] [output-dir]
//! RUST_LOG=mz_nav=trace cargo run -p classic      # every arrival and portal
//! ```

mod config;
mod maze;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mz_core::{Direction, EntityId, Tick};
use mz_nav::{Arrival, Color, Navigator};
use mz_output::{CsvWriter, OutputWriter, SimOutputObserver};
use mz_policy::{ChaseRule, GhostMode, GhostPolicy, InputPolicy};
use mz_sim::{
    ActorKind, ActorSpec, AudioChannel, Contact, SimBuilder, SimObserver, SoundBoard, SoundCue,
    TickReport,
};

use config::DemoConfig;
use maze::build_maze;

/// The scripted joystick, one entry per input period, repeating.
const INPUTS: [Direction; 8] = [
    Direction::Left,
    Direction::Up,
    Direction::Right,
    Direction::Down,
    Direction::Left,
    Direction::Down,
    Direction::Right,
    Direction::Up,
];

// ── Audio ─────────────────────────────────────────────────────────────────────

/// An audio channel that logs cues and stays busy for roughly the length
/// of each clip.
struct LogChannel {
    name:      &'static str,
    remaining: u32,
    looped:    bool,
    paused:    bool,
}

impl LogChannel {
    fn new(name: &'static str) -> Self {
        Self { name, remaining: 0, looped: false, paused: false }
    }

    /// Advance one frame.
    fn tick(&mut self) {
        if !self.paused && !self.looped {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    /// Approximate clip length in 60 Hz frames.
    fn clip_frames(cue: SoundCue) -> u32 {
        match cue {
            SoundCue::Startup     => 250,
            SoundCue::Death       => 90,
            SoundCue::MunchGhost  => 30,
            SoundCue::MunchFruit  => 30,
            SoundCue::MunchPellet => 15,
            SoundCue::GhostSiren  => 0,
        }
    }
}

impl AudioChannel for LogChannel {
    fn play(&mut self, cue: SoundCue, looped: bool) {
        debug!(channel = self.name, cue = %cue, file = cue.file_name(), looped, "play");
        self.remaining = Self::clip_frames(cue);
        self.looped = looped;
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn unpause(&mut self) {
        self.paused = false;
    }

    fn is_busy(&self) -> bool {
        !self.paused && (self.looped || self.remaining > 0)
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Turns arrivals and contacts into game events and forwards rows to CSV.
struct GameObserver<W: OutputWriter> {
    output:        SimOutputObserver<W>,
    sound:         SoundBoard<LogChannel>,
    player:        Option<EntityId>,
    mode:          GhostMode,
    touching:      Vec<Contact>,
    was_touching:  Vec<Contact>,
    pellets:       usize,
    deaths:        usize,
    ghosts_eaten:  usize,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> GameObserver<W> {
    fn new(output: SimOutputObserver<W>, player: Option<EntityId>) -> Self {
        Self {
            output,
            sound:         SoundBoard::new(LogChannel::new("effects"), LogChannel::new("siren")),
            player,
            mode:          GhostMode::default(),
            touching:      Vec::new(),
            was_touching:  Vec::new(),
            pellets:       0,
            deaths:        0,
            ghosts_eaten:  0,
            snapshot_rows: 0,
            summary_rows:  0,
        }
    }

    fn set_mode(&mut self, mode: GhostMode) {
        self.mode = mode;
        if mode == GhostMode::Frightened {
            self.sound.pause_ghost_siren();
        } else {
            self.sound.play_ghost_siren();
        }
    }
}

impl<W: OutputWriter> SimObserver for GameObserver<W> {
    fn on_tick_start(&mut self, _tick: Tick) {
        let (effects, siren) = self.sound.channels_mut();
        effects.tick();
        siren.tick();
        std::mem::swap(&mut self.touching, &mut self.was_touching);
        self.touching.clear();
    }

    fn on_arrival(&mut self, _tick: Tick, entity: EntityId, arrival: &Arrival) {
        // Every junction the player passes counts as a pellet.
        if Some(entity) == self.player && !arrival.stalled {
            self.pellets += 1;
            self.sound.play_munch_pellet();
        }
    }

    fn on_contact(&mut self, tick: Tick, contact: &Contact) {
        self.touching.push(*contact);
        if self.was_touching.contains(contact) {
            return;
        }
        if self.mode == GhostMode::Frightened {
            self.ghosts_eaten += 1;
            self.sound.play_munch_ghost();
            info!(%tick, ghost = %contact.ghost, "ghost eaten");
        } else {
            self.deaths += 1;
            self.sound.play_death();
            info!(%tick, ghost = %contact.ghost, "caught");
        }
    }

    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        self.summary_rows += 1;
        self.output.on_tick_end(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, kinds: &[ActorKind], navigators: &[Navigator]) {
        self.snapshot_rows += navigators.len();
        self.output.on_snapshot(tick, kinds, navigators);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.output.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "classic=info,mz_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 1. Config: optional JSON path, optional output directory.
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => DemoConfig::load(path.as_ref())?,
        None       => DemoConfig::default(),
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "output/classic".into()));

    // 2. Maze.
    let (graph, layout) = build_maze()?;
    info!(nodes = graph.node_count(), portals = graph.portals().count(), "maze built");

    // 3. Actors: player first, then the four ghosts.
    let ghosts = [
        (Color::RED,    layout.corners[1], ChaseRule::Direct),
        (Color::PINK,   layout.corners[0], ChaseRule::Ahead { tiles: 4.0 }),
        (Color::TEAL,   layout.corners[3], ChaseRule::Ahead { tiles: 2.0 }),
        (Color::ORANGE, layout.corners[2], ChaseRule::Direct),
    ];
    let mut builder = SimBuilder::new(config.sim.clone(), graph)
        .nav_config(config.nav.clone())
        .actor(
            ActorSpec::new(ActorKind::Player, layout.player_start, InputPolicy)
                .speed(config.player_speed)
                .color(Color::YELLOW),
        );
    for (color, corner, chase) in ghosts {
        builder = builder.actor(
            ActorSpec::new(ActorKind::Ghost, layout.pen, GhostPolicy::new(corner, chase))
                .speed(config.ghost_speed)
                .color(color),
        );
    }
    let mut sim = builder.build()?;

    // 4. Output.
    std::fs::create_dir_all(&out_dir)?;
    let writer = CsvWriter::new(&out_dir)?;
    let mut obs = GameObserver::new(SimOutputObserver::new(writer, &config.sim), sim.player());

    // 5. Timers, in ticks.
    let mut phase_starts = Vec::with_capacity(config.modes.len());
    let mut at = 0;
    for phase in &config.modes {
        phase_starts.push((at, phase.mode));
        at += sim.clock.ticks_for_secs(phase.secs);
    }
    let input_period = sim.clock.ticks_for_secs(config.input_period_secs).max(1);

    // 6. Run, one tick at a time so the host can steer between ticks.
    obs.sound.play_startup();
    obs.set_mode(sim.ghost_mode());
    let t0 = Instant::now();
    while sim.clock.current_tick < sim.config.end_tick() {
        let now = sim.clock.current_tick.0;
        // Last phase wins if two share a start tick.
        if let Some(&(_, mode)) = phase_starts.iter().rfind(|(start, _)| *start == now) {
            sim.set_ghost_mode(mode);
            obs.set_mode(mode);
        }
        if now.is_multiple_of(input_period) {
            let i = (now / input_period) as usize % INPUTS.len();
            sim.set_input(INPUTS[i]);
        }
        sim.run_ticks(1, &mut obs);
    }
    obs.on_sim_end(sim.clock.current_tick);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.output.take_error() {
        eprintln!("output error: {e}");
    }

    // 7. Summary.
    println!("Run complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  entity_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv   : {} rows", obs.summary_rows);
    println!(
        "  pellets {}  |  caught {}  |  ghosts eaten {}",
        obs.pellets, obs.deaths, obs.ghosts_eaten
    );
    println!();

    println!("{:<8} {:<8} {:<10} {:<8} {:<8} {:<8}", "Entity", "Kind", "Position", "Node", "Target", "Heading");
    println!("{}", "-".repeat(54));
    for (i, (kind, nav)) in sim.kinds.iter().zip(&sim.navigators).enumerate() {
        let (x, y) = nav.position().as_int();
        println!(
            "{:<8} {:<8} {:<10} {:<8} {:<8} {:<8}",
            i,
            kind.as_str(),
            format!("{x},{y}"),
            nav.node().0,
            nav.target().0,
            nav.direction().as_str(),
        );
    }

    Ok(())
}
