// ticker.rs - Cancellable periodic timer task feeding ticks to the UI thread

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Emits one tick per period on a tokio runtime. The owner collects them with
/// [`Ticker::take_due`] from its own (single) thread, so grid updates never
/// run concurrently.
pub struct Ticker {
    runtime: Handle,
    task: Option<JoinHandle<()>>,
    tx: UnboundedSender<u64>,
    rx: UnboundedReceiver<u64>,
    // Ticks tagged with an older epoch come from a cancelled task
    epoch: u64,
}

impl Ticker {
    pub fn new(runtime: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { runtime, task: None, tx, rx, epoch: 0 }
    }

    /// Replaces any running timer. The first tick arrives one full period
    /// after this call; `wake` runs after each tick is queued.
    pub fn start<F>(&mut self, period: Duration, wake: F)
    where
        F: Fn() + Send + 'static,
    {
        self.cancel();

        let tx = self.tx.clone();
        let epoch = self.epoch;
        self.task = Some(self.runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(epoch).is_err() { break; }
                wake();
            }
        }));
    }

    /// Stops the timer. Ticks already queued are dropped.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
        self.epoch += 1;
        while self.rx.try_recv().is_ok() {}
    }

    pub fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Number of ticks delivered since the previous call.
    pub fn take_due(&mut self) -> usize {
        let mut due = 0;
        while let Ok(epoch) = self.rx.try_recv() {
            if epoch == self.epoch { due += 1; }
        }
        due
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::controller::{Controller, TickOutcome};

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let mut ticker = Ticker::new(Handle::current());
        ticker.start(Duration::from_millis(10), || {});
        assert!(ticker.is_active());

        time::sleep(Duration::from_millis(5)).await;
        assert_eq!(ticker.take_due(), 0);

        time::sleep(Duration::from_millis(30)).await;
        assert_eq!(ticker.take_due(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn wake_runs_for_each_tick() {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        let mut ticker = Ticker::new(Handle::current());
        ticker.start(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        time::sleep(Duration::from_millis(25)).await;
        assert_eq!(wakes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_and_future_ticks() {
        let mut ticker = Ticker::new(Handle::current());
        ticker.start(Duration::from_millis(10), || {});
        time::sleep(Duration::from_millis(25)).await;

        ticker.cancel();
        assert!(!ticker.is_active());
        assert_eq!(ticker.take_due(), 0);

        time::sleep(Duration::from_millis(100)).await;
        assert_eq!(ticker.take_due(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_uses_new_period() {
        let mut ticker = Ticker::new(Handle::current());
        ticker.start(Duration::from_millis(10), || {});
        time::sleep(Duration::from_millis(15)).await;

        ticker.start(Duration::from_millis(50), || {});
        assert_eq!(ticker.take_due(), 0);
        time::sleep(Duration::from_millis(55)).await;
        assert_eq!(ticker.take_due(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn drives_controller_until_settled() {
        crate::logging::set_enabled(false);
        let mut controller = Controller::new(6, 6).unwrap();
        for &(x, y) in &[(1, 1), (1, 2), (2, 1), (4, 4)] {
            controller.toggle_cell(x, y).unwrap();
        }
        controller.start(20).unwrap();

        let mut ticker = Ticker::new(Handle::current());
        ticker.start(controller.interval().unwrap(), || {});

        let mut outcomes = Vec::new();
        while controller.is_running() {
            time::sleep(Duration::from_millis(20)).await;
            for _ in 0..ticker.take_due() {
                outcomes.push(controller.tick());
                if !controller.is_running() {
                    ticker.cancel();
                    break;
                }
            }
        }

        // The L grows into a block and the stray cell dies; then it settles
        assert_eq!(outcomes.len(), 2);
        assert!(matches!(outcomes[0], TickOutcome::Advanced(r) if r.births == 1 && r.deaths == 1));
        assert_eq!(outcomes[1], TickOutcome::Settled);
        assert_eq!(controller.grid().population(), 4);
        assert!(!ticker.is_active());
    }
}
