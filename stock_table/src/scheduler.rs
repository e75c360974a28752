//! Periodic driver for the renderer.
//!
//! The scheduler renders once immediately, then once per tick of a fixed period until
//! the shutdown channel fires or disconnects. Each cycle runs on its own thread, so a
//! request that never returns cannot stall the timer. What happens when a tick
//! arrives while a previous cycle is still running is decided by `OverlapPolicy`.
//!
//! Cycle errors are logged and swallowed here; nothing a cycle does can take the
//! process down.
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use clap::ValueEnum;
use crossbeam_channel::{Receiver, select, tick};
use log::{debug, error, info, warn};
use strum_macros::Display;

use crate::renderer::StockTableRenderer;
use crate::source::QuoteSource;
use crate::table::TableBody;

/// Behavior when the timer fires during an unfinished cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Drop the tick; at most one cycle runs at a time.
    #[default]
    Skip,
    /// Start another cycle anyway; the last one to finish owns the table.
    Overlap,
}

/// Counters reported when the scheduler stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Cycles handed to a worker thread.
    pub started: u64,
    /// Ticks dropped because a cycle was still running.
    pub skipped: u64,
}

/// Decrements the in-flight counter when a cycle thread ends, panics included.
struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Fixed-period render loop.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    period: Duration,
    overlap: OverlapPolicy,
}

impl RefreshScheduler {
    /// Scheduler ticking every `period`, skipping overlapping ticks.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            overlap: OverlapPolicy::default(),
        }
    }

    /// Use `policy` for ticks that arrive while a cycle is running.
    pub fn with_overlap_policy(mut self, policy: OverlapPolicy) -> Self {
        self.overlap = policy;
        self
    }

    /// Block until `shutdown` receives a message or is disconnected.
    ///
    /// Cycles still running at that point are left to finish on their own threads.
    pub fn run<S, T>(
        &self,
        renderer: Arc<StockTableRenderer<S, T>>,
        shutdown: Receiver<()>,
    ) -> SchedulerStats
    where
        S: QuoteSource + 'static,
        T: TableBody + 'static,
    {
        info!(
            "Refreshing every {:?} (overlap policy: {})",
            self.period, self.overlap
        );
        let in_flight = Arc::new(AtomicUsize::new(0));
        let mut stats = SchedulerStats::default();
        let ticker = tick(self.period);

        self.fire(&renderer, &in_flight, &mut stats);
        loop {
            select! {
                recv(shutdown) -> _ => break,
                recv(ticker) -> _ => self.fire(&renderer, &in_flight, &mut stats),
            }
        }

        let running = in_flight.load(Ordering::Acquire);
        if running > 0 {
            info!("Stopping with {} cycle(s) still in flight", running);
        }
        info!(
            "Scheduler stopped: {} cycles started, {} ticks skipped",
            stats.started, stats.skipped
        );
        stats
    }

    fn fire<S, T>(
        &self,
        renderer: &Arc<StockTableRenderer<S, T>>,
        in_flight: &Arc<AtomicUsize>,
        stats: &mut SchedulerStats,
    ) where
        S: QuoteSource + 'static,
        T: TableBody + 'static,
    {
        if self.overlap == OverlapPolicy::Skip && in_flight.load(Ordering::Acquire) > 0 {
            stats.skipped += 1;
            warn!("Previous cycle still running, skipping tick");
            return;
        }

        // only this thread increments, so the check above cannot race
        in_flight.fetch_add(1, Ordering::AcqRel);
        stats.started += 1;
        let cycle = stats.started;
        let guard = InFlightGuard(Arc::clone(in_flight));
        let renderer = Arc::clone(renderer);

        thread::spawn(move || {
            let _guard = guard;
            debug!("Cycle {} started", cycle);
            match renderer.render_stocks() {
                Ok(rows) => debug!("Cycle {} rendered {} rows", cycle, rows),
                Err(e) => error!("Cycle {} failed: {}", cycle, e),
            }
        });
    }
}
