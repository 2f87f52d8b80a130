//! Deferred content-clear timers
//!
//! Each `Cmd::ScheduleClear` spawns a sleeper thread that reports back with
//! `SlideInMsg::ClearElapsed`. Cancelled timers stay silent; a timer that
//! fires anyway after a reopen is rejected by the host's generation check.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use slidein::messages::{Msg, SlideInMsg};

#[derive(Debug, Default)]
pub struct ClearTimers {
    active: HashMap<u64, Arc<AtomicBool>>,
}

impl ClearTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a timer that sends `ClearElapsed { generation }` after `delay`
    pub fn schedule(&mut self, generation: u64, delay: Duration, tx: Sender<Msg>) {
        let cancelled = Arc::new(AtomicBool::new(false));
        if let Some(previous) = self.active.insert(generation, Arc::clone(&cancelled)) {
            previous.store(true, Ordering::Release);
        }

        thread::spawn(move || {
            thread::sleep(delay);
            if cancelled.load(Ordering::Acquire) {
                return;
            }
            if tx
                .send(Msg::SlideIn(SlideInMsg::ClearElapsed { generation }))
                .is_err()
            {
                tracing::debug!("clear timer {} fired after shutdown", generation);
            }
        });
    }

    /// Cancel a pending timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, generation: u64) -> bool {
        match self.active.remove(&generation) {
            Some(flag) => {
                flag.store(true, Ordering::Release);
                true
            }
            None => false,
        }
    }

    /// Forget a timer whose message has been delivered
    pub fn finished(&mut self, generation: u64) {
        self.active.remove(&generation);
    }

    pub fn cancel_all(&mut self) {
        for (_, flag) in self.active.drain() {
            flag.store(true, Ordering::Release);
        }
    }

    pub fn pending(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_timer_fires() {
        let (tx, rx) = mpsc::channel();
        let mut timers = ClearTimers::new();
        timers.schedule(3, Duration::from_millis(5), tx);

        let msg = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert!(matches!(
            msg,
            Msg::SlideIn(SlideInMsg::ClearElapsed { generation: 3 })
        ));
    }

    #[test]
    fn test_cancelled_timer_is_silent() {
        let (tx, rx) = mpsc::channel();
        let mut timers = ClearTimers::new();
        timers.schedule(1, Duration::from_millis(30), tx);

        assert!(timers.cancel(1));
        assert_eq!(timers.pending(), 0);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }

    #[test]
    fn test_cancel_unknown_generation() {
        let mut timers = ClearTimers::new();
        assert!(!timers.cancel(42));
    }

    #[test]
    fn test_cancel_all() {
        let (tx, rx) = mpsc::channel();
        let mut timers = ClearTimers::new();
        timers.schedule(1, Duration::from_millis(30), tx.clone());
        timers.schedule(2, Duration::from_millis(30), tx);

        timers.cancel_all();
        assert_eq!(timers.pending(), 0);
        assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
    }
}
