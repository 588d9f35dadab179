//! A fixed-sequence policy for reproducible scenarios.

use std::collections::VecDeque;

use mz_core::{Direction, EntityRng};

use crate::{Decision, DirectionPolicy};

/// Returns the scripted directions in order, one per decision, without
/// checking them against `valid`.  Once the script runs out it takes the
/// first valid direction.
///
/// Unlike every other policy this one may answer outside `valid`, which
/// breaks the [`DirectionPolicy`] contract.  It exists to drive the
/// navigator's invalid-choice handling in tests.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPolicy {
    script: VecDeque<Direction>,
    decisions: usize,
}

impl ScriptedPolicy {
    pub fn new(script: impl IntoIterator<Item = Direction>) -> Self {
        Self { script: script.into_iter().collect(), decisions: 0 }
    }

    /// Directions not yet handed out.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// How many times `choose` has been called.
    pub fn decisions(&self) -> usize {
        self.decisions
    }
}

impl DirectionPolicy for ScriptedPolicy {
    fn choose(&mut self, ctx: &Decision<'_>, _rng: &mut EntityRng) -> Direction {
        self.decisions += 1;
        self.script.pop_front().unwrap_or_else(|| ctx.first_valid())
    }
}
