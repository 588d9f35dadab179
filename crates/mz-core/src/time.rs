//! Frame time model.
//!
//! # Design
//!
//! The host advances the world in discrete frames.  Each frame is a `Tick`,
//! and every tick represents the same elapsed time `tick_dt_secs`:
//!
//!   elapsed_secs = tick * tick_dt_secs
//!
//! A fixed step keeps runs reproducible: the same seed and config always
//! produce the same trajectories, regardless of wall-clock jitter.  The
//! navigator itself accepts any `dt`; the fixed step is a host choice.

use std::fmt;

use crate::{MazeError, MazeResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Tracks the current frame and converts frame counts to elapsed seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// Seconds represented by one tick (the `dt` passed to every update).
    pub tick_dt_secs: f32,
    /// The current tick: advanced by `FrameClock::advance()` each frame.
    pub current_tick: Tick,
}

impl FrameClock {
    pub fn new(tick_dt_secs: f32) -> Self {
        Self {
            tick_dt_secs,
            current_tick: Tick::ZERO,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Elapsed simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.secs_at(self.current_tick)
    }

    /// Elapsed simulated seconds at an arbitrary `tick`.
    #[inline]
    pub fn secs_at(&self, tick: Tick) -> f64 {
        tick.0 as f64 * self.tick_dt_secs as f64
    }

    /// How many ticks span `secs` seconds?  Rounds up.
    pub fn ticks_for_secs(&self, secs: f32) -> u64 {
        if self.tick_dt_secs <= 0.0 {
            return 0;
        }
        (secs / self.tick_dt_secs).ceil().max(0.0) as u64
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.3}s)", self.current_tick, self.elapsed_secs())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level host configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the simulation runner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Seconds per tick.  60 fps → `1.0 / 60.0`.
    pub tick_dt_secs: f32,

    /// Total ticks to simulate.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,

    /// Emit a position snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_dt_secs:          1.0 / 60.0,
            total_ticks:           600,
            seed:                  0,
            num_threads:           None,
            output_interval_ticks: 1,
        }
    }
}

impl SimConfig {
    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `FrameClock` pre-configured for this run.
    pub fn make_clock(&self) -> FrameClock {
        FrameClock::new(self.tick_dt_secs)
    }

    /// Reject configurations the tick loop cannot run.
    pub fn validate(&self) -> MazeResult<()> {
        if !self.tick_dt_secs.is_finite() || self.tick_dt_secs <= 0.0 {
            return Err(MazeError::Config(format!(
                "tick_dt_secs must be positive and finite, got {}",
                self.tick_dt_secs
            )));
        }
        if self.num_threads == Some(0) {
            return Err(MazeError::Config("num_threads must be at least 1".into()));
        }
        Ok(())
    }
}
