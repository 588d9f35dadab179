//! Plain data row types written by output backends.

/// One entity's navigation state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntitySnapshotRow {
    pub entity_id: u32,
    pub tick:      u64,
    /// `"player"` or `"ghost"`.
    pub kind:      &'static str,
    pub x:         f32,
    pub y:         f32,
    /// Last node fully reached.
    pub node:      u32,
    /// Node being travelled to; equals `node` while stalled.
    pub target:    u32,
    pub direction: &'static str,
}

/// Summary counters for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub arrivals:     u64,
    pub contacts:     u64,
}
