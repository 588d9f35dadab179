//! `mz-sim`: fixed-step host loop for the maze navigation core.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.total_ticks:
//!   ① World   : WorldView { player position/heading, input, ghost mode }.
//!   ② Update  : Navigator::update(dt) for every actor; the actor's policy
//!                chooses on arrival (parallel with the `parallel` feature).
//!   ③ Arrivals: SimObserver::on_arrival, ascending EntityId.
//!   ④ Contacts: visible player/ghost pairs within collide radius.
//!   ⑤ Report  : on_tick_end, and on_snapshot every output_interval_ticks.
//! ```
//!
//! Host controls between ticks: [`Sim::set_input`] (an opposite input turns
//! players around on the spot), [`Sim::set_ghost_mode`] (reverses ghosts),
//! and [`Sim::reverse`].
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                     |
//! |------------|------------------------------------------------------------|
//! | `parallel` | Runs the update phase on Rayon (`num_threads` sizes a pool).|
//! | `serde`    | Serde derives on `ActorKind`, `SoundCue`, and the configs. |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mz_core::SimConfig;
//! use mz_policy::InputPolicy;
//! use mz_sim::{ActorKind, ActorSpec, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), graph)
//!     .actor(ActorSpec::new(ActorKind::Player, start, InputPolicy))
//!     .build()?;
//! sim.set_input(Direction::Left);
//! sim.run(&mut NoopObserver);
//! ```

pub mod actor;
pub mod audio;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use actor::{ActorKind, ActorSpec};
pub use audio::{AudioChannel, SoundBoard, SoundCue};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{Contact, NoopObserver, SimObserver, TickReport};
pub use sim::Sim;
