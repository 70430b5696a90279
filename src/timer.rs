//! ## Timers
//!
//! Every animated widget owns exactly one pending timer through a
//! [`Ticker`]. Dropping the ticker cancels the timer, so an unmounted
//! widget never receives another step.
//!
//! The timer source is abstracted behind [`Scheduler`] so that the same
//! animations run on `window.setTimeout` in the browser and on a virtual
//! clock in tests.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
    time::Duration,
};

use crate::error::Error;

/// A state machine advanced by a timer.
pub trait Animation {
    /// Delay before the first step after mounting.
    fn first_delay(&self) -> Duration;

    /// Advances the animation by one step.
    ///
    /// Returns the delay until the next step or `None` once the animation
    /// has settled.
    fn step(&mut self) -> Option<Duration>;
}

/// A source of one-shot timers.
pub trait Scheduler: Clone + 'static {
    /// Handle to a pending timer. Dropping it cancels the timer.
    type Handle: 'static;

    /// Runs `callback` once after `delay`.
    fn schedule(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Result<Self::Handle, Error>;
}

/// Timer handles held by a [`Ticker`].
struct Slots<H> {
    /// The timer that will run the next step.
    pending: Option<H>,
    /// The timer whose callback is running or has just run.
    ///
    /// A handle may own the callback it is executing, so it is only
    /// released when the next timer fires or the ticker is dropped.
    fired: Option<H>,
}

/// Scoped owner of an animation's timer.
///
/// The animation keeps stepping for as long as the ticker is alive and
/// the animation returns a delay.
pub struct Ticker<S: Scheduler> {
    slots: Rc<RefCell<Slots<S::Handle>>>,
}

impl<S: Scheduler> fmt::Debug for Ticker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ticker")
            .field("pending", &self.is_running())
            .finish()
    }
}

impl<S: Scheduler> Ticker<S> {
    /// Starts stepping `animation` on `scheduler`.
    pub fn start<A>(scheduler: S, animation: Rc<RefCell<A>>) -> Result<Self, Error>
    where
        A: Animation + 'static,
    {
        let slots = Rc::new(RefCell::new(Slots {
            pending: None,
            fired: None,
        }));
        let delay = animation.borrow().first_delay();
        let handle = arm(scheduler, Rc::downgrade(&slots), animation, delay)?;
        slots.borrow_mut().pending = Some(handle);
        tracing::trace!(?delay, "ticker started");
        Ok(Self { slots })
    }

    /// Returns `true` while a step is scheduled.
    pub fn is_running(&self) -> bool {
        self.slots.borrow().pending.is_some()
    }
}

impl<S: Scheduler> Drop for Ticker<S> {
    fn drop(&mut self) {
        if let Ok(mut slots) = self.slots.try_borrow_mut() {
            slots.pending = None;
        }
        tracing::trace!("ticker stopped");
    }
}

/// Schedules the next step of `animation`.
fn arm<S, A>(
    scheduler: S,
    slots: Weak<RefCell<Slots<S::Handle>>>,
    animation: Rc<RefCell<A>>,
    delay: Duration,
) -> Result<S::Handle, Error>
where
    S: Scheduler,
    A: Animation + 'static,
{
    let next = scheduler.clone();
    scheduler.schedule(
        delay,
        Box::new(move || {
            // The ticker is gone: the widget was unmounted.
            let Some(slots) = slots.upgrade() else {
                return;
            };
            {
                let mut slots = slots.borrow_mut();
                slots.fired = slots.pending.take();
            }
            let delay = animation.borrow_mut().step();
            let Some(delay) = delay else {
                return;
            };
            match arm(next, Rc::downgrade(&slots), animation, delay) {
                Ok(handle) => slots.borrow_mut().pending = Some(handle),
                Err(e) => tracing::warn!("unable to schedule the next step: {e}"),
            }
        }),
    )
}

/// A virtual clock for driving animations in tests.
#[cfg(test)]
pub(crate) mod manual {
    use super::*;

    type Callback = Box<dyn FnOnce()>;

    #[derive(Default)]
    struct Queue {
        now: Duration,
        next_id: u64,
        timers: Vec<(Duration, u64, Callback)>,
    }

    /// Scheduler whose time only moves when [`ManualScheduler::advance`] is called.
    #[derive(Clone, Default)]
    pub(crate) struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    /// Cancels its timer when dropped.
    pub(crate) struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().timers.retain(|(_, id, _)| *id != self.id);
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay: Duration, callback: Callback) -> Result<ManualHandle, Error> {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let due = queue.now + delay;
            queue.timers.push((due, id, callback));
            Ok(ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            })
        }
    }

    impl ManualScheduler {
        /// Moves the clock forward, firing every timer that comes due.
        pub(crate) fn advance(&self, by: Duration) {
            let target = self.queue.borrow().now + by;
            loop {
                let callback = {
                    let mut queue = self.queue.borrow_mut();
                    let due = queue
                        .timers
                        .iter()
                        .enumerate()
                        .filter(|(_, (at, _, _))| *at <= target)
                        .min_by_key(|(_, (at, id, _))| (*at, *id))
                        .map(|(index, _)| index);
                    match due {
                        Some(index) => {
                            let (at, _, callback) = queue.timers.remove(index);
                            queue.now = at;
                            callback
                        }
                        None => break,
                    }
                };
                callback();
            }
            self.queue.borrow_mut().now = target;
        }

        /// Number of timers waiting to fire.
        pub(crate) fn pending(&self) -> usize {
            self.queue.borrow().timers.len()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::manual::ManualScheduler;
    use super::*;

    /// Counts steps and settles after `limit` of them.
    struct Steps {
        count: u32,
        limit: u32,
    }

    impl Animation for Steps {
        fn first_delay(&self) -> Duration {
            Duration::from_millis(10)
        }

        fn step(&mut self) -> Option<Duration> {
            self.count += 1;
            (self.count < self.limit).then_some(Duration::from_millis(10))
        }
    }

    fn steps(limit: u32) -> Rc<RefCell<Steps>> {
        Rc::new(RefCell::new(Steps { count: 0, limit }))
    }

    #[test]
    fn test_ticker_steps_on_schedule() {
        let scheduler = ManualScheduler::default();
        let animation = steps(u32::MAX);
        let _ticker = Ticker::start(scheduler.clone(), animation.clone()).unwrap();

        scheduler.advance(Duration::from_millis(9));
        assert_eq!(0, animation.borrow().count);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(1, animation.borrow().count);
        scheduler.advance(Duration::from_millis(95));
        assert_eq!(10, animation.borrow().count);
        assert_eq!(1, scheduler.pending());
    }

    #[test]
    fn test_ticker_stops_when_settled() {
        let scheduler = ManualScheduler::default();
        let animation = steps(3);
        let ticker = Ticker::start(scheduler.clone(), animation.clone()).unwrap();

        scheduler.advance(Duration::from_secs(1));
        assert_eq!(3, animation.borrow().count);
        assert!(!ticker.is_running());
        assert_eq!(0, scheduler.pending());
    }

    #[test]
    fn test_no_step_after_drop() {
        let scheduler = ManualScheduler::default();
        let animation = steps(u32::MAX);
        let ticker = Ticker::start(scheduler.clone(), animation.clone()).unwrap();

        scheduler.advance(Duration::from_millis(50));
        let before = animation.borrow().count;
        drop(ticker);
        assert_eq!(0, scheduler.pending());

        scheduler.advance(Duration::from_secs(10));
        assert_eq!(before, animation.borrow().count);
    }
}
