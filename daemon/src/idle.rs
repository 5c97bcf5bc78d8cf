use std::sync::Arc;
use tokio::sync::mpsc;

use crate::host::PowerHost;

/// Idle-suppression notifier task.
///
/// Consumes the activity signals queued by the dispatcher and forwards each
/// one to the host's power manager as a synthetic user-activity event,
/// resetting the idle/sleep countdown. Runs on its own task so a slow or
/// reentrant power-management handler can never delay trigger processing.
/// Exits when the activity channel closes.
///
/// Delivery failures are logged and dropped: a missed idle reset merely
/// risks an earlier sleep, not corruption.
pub async fn run(mut rx: mpsc::Receiver<()>, power: Arc<dyn PowerHost>) {
    while rx.recv().await.is_some() {
        if let Err(e) = power.deliver_activity_event() {
            eprintln!("[idle] Failed to reset idle timer: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPower {
        delivered: AtomicUsize,
        fail: bool,
    }

    impl CountingPower {
        fn new(fail: bool) -> Self {
            Self { delivered: AtomicUsize::new(0), fail }
        }
    }

    impl PowerHost for CountingPower {
        fn deliver_activity_event(&self) -> Result<(), HostError> {
            self.delivered.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(HostError::NoPowerManager)
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn every_signal_is_delivered_to_the_power_host() {
        let power = Arc::new(CountingPower::new(false));
        let (tx, rx) = mpsc::channel(16);
        let task = tokio::spawn(run(rx, Arc::clone(&power) as Arc<dyn PowerHost>));

        for _ in 0..3 {
            tx.send(()).await.unwrap();
        }
        drop(tx);
        task.await.unwrap();

        assert_eq!(power.delivered.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn delivery_failure_does_not_stop_the_task() {
        let power = Arc::new(CountingPower::new(true));
        let (tx, rx) = mpsc::channel(16);
        let task = tokio::spawn(run(rx, Arc::clone(&power) as Arc<dyn PowerHost>));

        tx.send(()).await.unwrap();
        tx.send(()).await.unwrap();
        drop(tx);
        task.await.unwrap();

        // Both signals reached the power host even though each one failed.
        assert_eq!(power.delivered.load(Ordering::SeqCst), 2);
    }
}
