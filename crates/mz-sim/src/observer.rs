//! Simulation observer trait for progress reporting and data collection.

use mz_core::{EntityId, Tick};
use mz_nav::{Arrival, Navigator};

use crate::ActorKind;

/// A player and a ghost whose collide radii overlapped this tick.
///
/// The host only reports the touch; what it means (death, eating a
/// frightened ghost) is up to the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub player: EntityId,
    pub ghost:  EntityId,
}

/// Per-tick counters handed to [`SimObserver::on_tick_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Navigators that reached a node this tick (stalls included).
    pub arrivals: usize,
    pub contacts: usize,
}

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: contact logger
///
/// ```rust,ignore
/// struct Touches(Vec<(Tick, Contact)>);
///
/// impl SimObserver for Touches {
///     fn on_contact(&mut self, tick: Tick, contact: &Contact) {
///         self.0.push((tick, *contact));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any navigator moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per navigator that reached a node this tick, in
    /// ascending `EntityId` order.
    fn on_arrival(&mut self, _tick: Tick, _entity: EntityId, _arrival: &Arrival) {}

    /// Called once per touching player/ghost pair, after all arrivals.
    fn on_contact(&mut self, _tick: Tick, _contact: &Contact) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks` ticks).
    ///
    /// `kinds[i]` and `navigators[i]` describe `EntityId(i)`.
    fn on_snapshot(&mut self, _tick: Tick, _kinds: &[ActorKind], _navigators: &[Navigator]) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
