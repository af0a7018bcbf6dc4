//! The scripted chat exchange shown in the contact section.

use std::rc::Rc;

use gloo_timers::callback::Timeout;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChatStep {
    Idle,
    UserMessageShown,
    TypingIndicatorShown,
    ReplyShown,
}

impl ChatStep {
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn shows_user_message(self) -> bool {
        self >= ChatStep::UserMessageShown
    }

    pub fn shows_typing(self) -> bool {
        self == ChatStep::TypingIndicatorShown
    }

    pub fn shows_reply(self) -> bool {
        self >= ChatStep::ReplyShown
    }
}

/// Delay in ms after activation at which each step is entered.
pub const SCRIPT: [(u32, ChatStep); 3] = [
    (500, ChatStep::UserMessageShown),
    (1_500, ChatStep::TypingIndicatorShown),
    (2_500, ChatStep::ReplyShown),
];

/// Schedules one-shot callbacks. Dropping a handle cancels its callback.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

/// Brings the script in line with `active`.
///
/// The step is reset to `Idle` either way. When active, the returned
/// handles keep the remaining steps scheduled; drop them on deactivation.
pub fn drive_script<S: Scheduler>(
    active: bool,
    scheduler: &S,
    on_step: Rc<dyn Fn(ChatStep)>,
) -> Vec<S::Handle> {
    on_step(ChatStep::Idle);
    if !active {
        return Vec::new();
    }
    SCRIPT
        .iter()
        .map(|&(delay, step)| {
            let on_step = on_step.clone();
            scheduler.schedule(delay, Box::new(move || on_step(step)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    struct Pending {
        at: u32,
        cancelled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    /// Virtual clock. Callbacks fire only from `advance`.
    #[derive(Default)]
    struct ManualScheduler {
        now: Cell<u32>,
        pending: RefCell<Vec<Pending>>,
    }

    struct ManualHandle(Rc<Cell<bool>>);

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.pending.borrow_mut().push(Pending {
                at: self.now.get() + delay_ms,
                cancelled: cancelled.clone(),
                callback,
            });
            ManualHandle(cancelled)
        }
    }

    impl ManualScheduler {
        fn advance(&self, ms: u32) {
            let now = self.now.get() + ms;
            self.now.set(now);
            let mut due: Vec<Pending> = {
                let mut pending = self.pending.borrow_mut();
                let (due, later): (Vec<Pending>, Vec<Pending>) =
                    pending.drain(..).partition(|p| p.at <= now);
                *pending = later;
                due
            };
            due.sort_by_key(|p| p.at);
            for p in due {
                if !p.cancelled.get() {
                    (p.callback)();
                }
            }
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<ChatStep>>>, Rc<dyn Fn(ChatStep)>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, Rc::new(move |step| sink.borrow_mut().push(step)))
    }

    #[test]
    fn activation_plays_steps_in_order_at_fixed_delays() {
        let scheduler = ManualScheduler::default();
        let (seen, on_step) = recorder();
        let _timers = drive_script(true, &scheduler, on_step);
        assert_eq!(*seen.borrow(), [ChatStep::Idle]);

        scheduler.advance(499);
        assert_eq!(seen.borrow().last(), Some(&ChatStep::Idle));
        scheduler.advance(1);
        assert_eq!(seen.borrow().last(), Some(&ChatStep::UserMessageShown));
        scheduler.advance(1_000);
        assert_eq!(seen.borrow().last(), Some(&ChatStep::TypingIndicatorShown));
        scheduler.advance(1_000);

        let indices: Vec<u8> = seen.borrow().iter().map(|s| s.index()).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    #[test]
    fn deactivation_resets_and_cancels_pending_steps() {
        let scheduler = ManualScheduler::default();
        let (seen, on_step) = recorder();

        let timers = drive_script(true, &scheduler, on_step.clone());
        scheduler.advance(600);
        assert_eq!(seen.borrow().last(), Some(&ChatStep::UserMessageShown));

        drop(timers);
        let timers = drive_script(false, &scheduler, on_step);
        assert!(timers.is_empty());
        assert_eq!(seen.borrow().last(), Some(&ChatStep::Idle));

        scheduler.advance(10_000);
        assert_eq!(seen.borrow().last(), Some(&ChatStep::Idle));
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn reactivation_starts_over_from_idle() {
        let scheduler = ManualScheduler::default();
        let (seen, on_step) = recorder();

        let timers = drive_script(true, &scheduler, on_step.clone());
        scheduler.advance(3_000);
        drop(timers);
        seen.borrow_mut().clear();

        let _timers = drive_script(true, &scheduler, on_step);
        assert_eq!(*seen.borrow(), [ChatStep::Idle]);
        scheduler.advance(2_500);
        assert_eq!(
            *seen.borrow(),
            [ChatStep::Idle, ChatStep::UserMessageShown, ChatStep::TypingIndicatorShown, ChatStep::ReplyShown]
        );
    }

    #[test]
    fn bubble_visibility_follows_step() {
        assert!(!ChatStep::Idle.shows_user_message());
        assert!(ChatStep::UserMessageShown.shows_user_message());
        assert!(ChatStep::TypingIndicatorShown.shows_typing());
        assert!(!ChatStep::ReplyShown.shows_typing());
        assert!(ChatStep::ReplyShown.shows_reply());
        assert!(!ChatStep::TypingIndicatorShown.shows_reply());
    }
}
