// ============================================================================
// SCHEDULER - single-shot deferred tasks
// ============================================================================

use gloo_timers::callback::Timeout;

/// Handle to a pending task. Canceling after the task already ran is a no-op.
pub trait Deferred {
    fn cancel(self: Box<Self>);
}

pub trait Scheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Box<dyn Deferred>;
}

/// `setTimeout` through gloo-timers
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Box<dyn Deferred> {
        Box::new(Timeout::new(delay_ms, task))
    }
}

impl Deferred for Timeout {
    fn cancel(self: Box<Self>) {
        let _closure = (*self).cancel();
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::{Deferred, Scheduler};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Pending {
        due_at: u64,
        canceled: Rc<Cell<bool>>,
        task: Box<dyn FnOnce()>,
    }

    struct ManualHandle {
        canceled: Rc<Cell<bool>>,
    }

    impl Deferred for ManualHandle {
        fn cancel(self: Box<Self>) {
            self.canceled.set(true);
        }
    }

    /// Virtual clock: tasks only run when the test advances time
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        now: Rc<Cell<u64>>,
        queue: Rc<RefCell<Vec<Pending>>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue
                .borrow()
                .iter()
                .filter(|p| !p.canceled.get())
                .count()
        }

        pub fn advance(&self, ms: u64) {
            let now = self.now.get() + ms;
            self.now.set(now);

            let due: Vec<Pending> = {
                let mut queue = self.queue.borrow_mut();
                let (due, later): (Vec<_>, Vec<_>) =
                    queue.drain(..).partition(|p| p.due_at <= now);
                *queue = later;
                due
            };
            for pending in due {
                if !pending.canceled.get() {
                    (pending.task)();
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Box<dyn Deferred> {
            let canceled = Rc::new(Cell::new(false));
            self.queue.borrow_mut().push(Pending {
                due_at: self.now.get() + u64::from(delay_ms),
                canceled: canceled.clone(),
                task,
            });
            Box::new(ManualHandle { canceled })
        }
    }
}
