//! Deferred task scheduling
//!
//! Everything time-driven on the site (demo timelines, the contact form's
//! simulated round trip, asset load timeouts) schedules one-shot tasks through
//! the [`Timer`] trait. The browser implementation lives in
//! `crate::ui::sequencer::BrowserTimer`; tests use [`ManualTimer`], a virtual clock
//! advanced explicitly.

use std::time::Duration;

/// A one-shot deferred task
pub type Task = Box<dyn FnOnce() + 'static>;

/// Schedules one-shot tasks after a delay.
///
/// Implementations never run a task synchronously inside `schedule`, even for
/// a zero delay.
pub trait Timer: Clone + 'static {
    fn schedule(&self, delay: Duration, task: Task);
}

/// Convert a millisecond offset into a `Duration`
pub fn millis(ms: u32) -> Duration {
    Duration::from_millis(u64::from(ms))
}

#[cfg(test)]
pub use manual::ManualTimer;

#[cfg(test)]
mod manual {
    use super::{Task, Timer};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    struct Pending {
        due: u64,
        seq: u64,
        task: Task,
    }

    #[derive(Default)]
    struct Clock {
        now: u64,
        next_seq: u64,
        pending: Vec<Pending>,
    }

    /// Virtual clock for deterministic tests.
    ///
    /// Tasks due at the same instant run in the order they were scheduled.
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        clock: Rc<RefCell<Clock>>,
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Current virtual time in milliseconds
        pub fn now_ms(&self) -> u64 {
            self.clock.borrow().now
        }

        /// Number of tasks that have not fired yet
        pub fn pending(&self) -> usize {
            self.clock.borrow().pending.len()
        }

        /// Move the clock forward, firing every task that comes due
        pub fn advance(&self, ms: u64) {
            let target = self.now_ms() + ms;
            loop {
                let next = {
                    let mut clock = self.clock.borrow_mut();
                    let due = clock
                        .pending
                        .iter()
                        .enumerate()
                        .filter(|(_, p)| p.due <= target)
                        .min_by_key(|(_, p)| (p.due, p.seq))
                        .map(|(i, _)| i);
                    match due {
                        Some(index) => {
                            let pending = clock.pending.swap_remove(index);
                            clock.now = pending.due;
                            Some(pending.task)
                        }
                        None => {
                            clock.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => task(),
                    None => break,
                }
            }
        }

        /// Advance until nothing is left to fire
        pub fn run_to_end(&self) {
            loop {
                let last_due = self.clock.borrow().pending.iter().map(|p| p.due).max();
                match last_due {
                    Some(due) => self.advance(due.saturating_sub(self.now_ms())),
                    None => break,
                }
            }
        }
    }

    impl Timer for ManualTimer {
        fn schedule(&self, delay: Duration, task: Task) {
            let mut clock = self.clock.borrow_mut();
            let due = clock.now + delay.as_millis() as u64;
            let seq = clock.next_seq;
            clock.next_seq += 1;
            clock.pending.push(Pending { due, seq, task });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_tasks_fire_in_due_order() {
        let timer = ManualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for (delay, label) in [(300, "c"), (100, "a"), (200, "b")] {
            let log = log.clone();
            timer.schedule(millis(delay), Box::new(move || log.borrow_mut().push(label)));
        }

        timer.advance(150);
        assert_eq!(*log.borrow(), vec!["a"]);
        assert_eq!(timer.pending(), 2);

        timer.run_to_end();
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
        assert_eq!(timer.now_ms(), 300);
    }

    #[test]
    fn test_same_instant_keeps_schedule_order() {
        let timer = ManualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        for label in ["first", "second", "third"] {
            let log = log.clone();
            timer.schedule(millis(50), Box::new(move || log.borrow_mut().push(label)));
        }

        timer.advance(50);
        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_zero_delay_does_not_run_synchronously() {
        let timer = ManualTimer::new();
        let fired = Rc::new(RefCell::new(false));
        let flag = fired.clone();

        timer.schedule(millis(0), Box::new(move || *flag.borrow_mut() = true));
        assert!(!*fired.borrow());

        timer.advance(0);
        assert!(*fired.borrow());
    }

    #[test]
    fn test_tasks_scheduled_while_firing_use_the_current_instant() {
        let timer = ManualTimer::new();
        let fired_at = Rc::new(RefCell::new(None));

        let inner_timer = timer.clone();
        let slot = fired_at.clone();
        timer.schedule(
            millis(100),
            Box::new(move || {
                let clock = inner_timer.clone();
                inner_timer.schedule(
                    millis(50),
                    Box::new(move || *slot.borrow_mut() = Some(clock.now_ms())),
                );
            }),
        );

        timer.advance(120);
        assert_eq!(*fired_at.borrow(), None);
        timer.advance(30);
        assert_eq!(*fired_at.borrow(), Some(150));
    }
}
