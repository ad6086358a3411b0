// timer.rs - Repeating tick source on the tokio runtime

use std::time::Duration;

use conway::Timer;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

/// Fires every `period` on a tokio task. Firings queue up in a channel that the UI thread
/// drains with [`TokioTimer::take_due`], so ticks are always applied on the UI thread.
pub struct TokioTimer {
    runtime: Handle,
    repaint: Option<egui::Context>,
    task: Option<JoinHandle<()>>,
    ticks: Option<UnboundedReceiver<()>>,
}

impl TokioTimer {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime, repaint: None, task: None, ticks: None }
    }

    /// Wake the UI on every firing so ticks are applied without waiting for input.
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Number of firings since the last call.
    pub fn take_due(&mut self) -> usize {
        let Some(ticks) = self.ticks.as_mut() else { return 0 };
        let mut due = 0;
        while ticks.try_recv().is_ok() {
            due += 1;
        }
        due
    }

    pub fn is_armed(&self) -> bool {
        self.task.is_some()
    }
}

impl Timer for TokioTimer {
    fn start(&mut self, period: Duration) {
        let (tx, rx) = mpsc::unbounded_channel();
        let repaint = self.repaint.clone();

        let task = self.runtime.spawn(async move {
            // First firing one full period after start.
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
                if let Some(ctx) = &repaint {
                    ctx.request_repaint();
                }
            }
        });

        debug!(period_ms = period.as_millis() as u64, "timer armed");
        self.task = Some(task);
        self.ticks = Some(rx);
    }

    fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            debug!("timer cancelled");
        }
        // Undelivered firings go with the receiver.
        self.ticks = None;
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
