//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use mz_core::{SimConfig, Tick};
use mz_nav::Navigator;
use mz_sim::{ActorKind, SimObserver, TickReport};

use crate::row::{EntitySnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes entity snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:       W,
    tick_dt_secs: f32,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` to convert ticks
    /// to elapsed seconds.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            tick_dt_secs: config.tick_dt_secs,
            last_error:   None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, report: &TickReport) {
        let row = TickSummaryRow {
            tick:         tick.0,
            elapsed_secs: tick.0 as f64 * self.tick_dt_secs as f64,
            arrivals:     report.arrivals as u64,
            contacts:     report.contacts as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, kinds: &[ActorKind], navigators: &[Navigator]) {
        let rows: Vec<EntitySnapshotRow> = kinds
            .iter()
            .zip(navigators)
            .enumerate()
            .map(|(i, (kind, nav))| {
                let pos = nav.position();
                EntitySnapshotRow {
                    entity_id: i as u32,
                    tick:      tick.0,
                    kind:      kind.as_str(),
                    x:         pos.x,
                    y:         pos.y,
                    node:      nav.node().0,
                    target:    nav.target().0,
                    direction: nav.direction().as_str(),
                }
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
