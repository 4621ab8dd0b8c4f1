#![forbid(unsafe_code)]

//! Tour state machine with change notification.
//!
//! # Design
//!
//! [`Store`] exclusively owns the canonical [`TourState`]. Every mutation
//! goes through a command ([`TourCommand`] or the matching method), which
//! either applies atomically or is rejected without touching state.
//! Listeners registered through [`Store::subscribe`] are invoked
//! synchronously, in registration order, after each state change.
//!
//! # Invariants
//!
//! 1. `index < size` whenever `status == Running`.
//! 2. `lifecycle` is `Beacon` or `Tooltip` only while `status == Running`.
//! 3. A command that leaves the snapshot unchanged notifies nobody.
//! 4. `Finished` and `Skipped` are left only through `start` or `reset`.
//!
//! # Failure Modes
//!
//! - **Re-entrant command**: listeners receive `&TourState`, not the store,
//!   so they cannot mutate it while a notification is in flight. The
//!   controller queues follow-up commands until the current one returns.
//! - **Out-of-order UI events**: `next`/`prev`/`close` outside `Running`
//!   are no-ops, not errors.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use tourkit_core::step::validate_steps;
use tourkit_core::{
    Action, Lifecycle, StatePatch, Status, Step, TourConfig, TourError, TourState,
};
use tracing::{debug, debug_span, warn};

type ListenerRc = Rc<dyn Fn(&TourState)>;
type ListenerWeak = Weak<dyn Fn(&TourState)>;

/// A store command expressed as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourCommand {
    /// Start (or resume) at the given index, or at the current one.
    Start(Option<usize>),
    Stop,
    Next,
    Prev,
    Go(usize),
    /// Move to `index` regardless of controlled mode, tagging the
    /// transition with `action`. Used for host-driven index changes.
    Jump { index: usize, action: Action },
    Close,
    Skip,
    /// Promote the current step straight to its tooltip.
    Open,
    Reset { force: bool },
    Update(StatePatch),
}

impl TourCommand {
    /// Short name used in spans and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => "start",
            Self::Stop => "stop",
            Self::Next => "next",
            Self::Prev => "prev",
            Self::Go(_) => "go",
            Self::Jump { .. } => "jump",
            Self::Close => "close",
            Self::Skip => "skip",
            Self::Open => "open",
            Self::Reset { .. } => "reset",
            Self::Update(_) => "update",
        }
    }
}

/// Owner of the canonical tour state.
pub struct Store {
    state: TourState,
    steps: Vec<Step>,
    listeners: Rc<RefCell<Vec<ListenerWeak>>>,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("steps", &self.steps.len())
            .field("listener_count", &self.listeners.borrow().len())
            .finish()
    }
}

impl Store {
    /// Create a store for `steps` in uncontrolled mode.
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            state: TourState::initial(steps.len(), false, 0),
            steps,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Create a store from host configuration.
    ///
    /// The tour is controlled when `run` is set and the host supplies a
    /// `step_index`; the initial index is that `step_index` (or 0).
    #[must_use]
    pub fn from_config(config: &TourConfig) -> Self {
        let steps = config.steps.clone();
        Self {
            state: TourState::initial(
                steps.len(),
                config.is_controlled(),
                config.step_index.unwrap_or(0),
            ),
            steps,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> TourState {
        self.state
    }

    /// Alias of [`Store::state`] under the name host helpers use.
    #[must_use]
    pub fn info(&self) -> TourState {
        self.state
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Switch between controlled and uncontrolled mode.
    pub fn set_controlled(&mut self, controlled: bool) {
        let mut next = self.state;
        next.controlled = controlled;
        self.commit(next);
    }

    /// Replace the step list.
    ///
    /// `Idle` becomes `Ready` when the list becomes non-empty and `Ready`
    /// becomes `Idle` when it empties. A started tour whose index falls off
    /// the new list is clamped to the last step.
    pub fn set_steps(&mut self, steps: Vec<Step>) {
        let size = steps.len();
        self.steps = steps;

        let mut next = self.state;
        next.size = size;
        match next.status {
            Status::Idle if size > 0 => next.status = Status::Ready,
            Status::Ready if size == 0 => next.status = Status::Idle,
            Status::Running | Status::Paused if size == 0 => {
                next.status = Status::Idle;
                next.index = 0;
                next.lifecycle = Lifecycle::Init;
            }
            Status::Running | Status::Paused if next.index >= size => {
                next.index = size - 1;
                next.lifecycle = Lifecycle::Init;
            }
            _ => {}
        }
        self.commit(next);
    }

    // ── Subscriptions ───────────────────────────────────────────────

    /// Register a listener invoked with each new snapshot.
    ///
    /// The listener lives as long as the returned [`Subscription`].
    pub fn subscribe(&self, listener: impl Fn(&TourState) + 'static) -> Subscription {
        let strong: ListenerRc = Rc::new(listener);
        self.listeners.borrow_mut().push(Rc::downgrade(&strong));
        Subscription {
            listener: Some(strong),
        }
    }

    /// Number of registered listeners, including dropped ones that have
    /// not been pruned yet.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        // Collect live listeners first so none runs under the borrow.
        let listeners: Vec<ListenerRc> = {
            let mut list = self.listeners.borrow_mut();
            list.retain(|weak| weak.strong_count() > 0);
            list.iter().filter_map(Weak::upgrade).collect()
        };
        for listener in &listeners {
            listener(&self.state);
        }
    }

    fn commit(&mut self, next: TourState) -> bool {
        if next == self.state {
            return false;
        }
        self.state = next;
        self.notify();
        true
    }

    // ── Commands ────────────────────────────────────────────────────

    /// Apply a command.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::CannotStart`] when starting with an invalid step
    /// list and [`TourError::InvalidIndex`] for out-of-range indices. State
    /// is unchanged in both cases.
    pub fn apply(&mut self, command: TourCommand) -> Result<(), TourError> {
        let span = debug_span!("tour.command", command = command.name());
        let _guard = span.enter();

        match command {
            TourCommand::Start(index) => self.cmd_start(index),
            TourCommand::Stop => {
                self.cmd_stop();
                Ok(())
            }
            TourCommand::Next => {
                self.cmd_advance(Action::Next);
                Ok(())
            }
            TourCommand::Prev => {
                self.cmd_prev();
                Ok(())
            }
            TourCommand::Go(index) => self.cmd_go(index),
            TourCommand::Jump { index, action } => self.cmd_jump(index, action),
            TourCommand::Close => {
                self.cmd_advance(Action::Close);
                Ok(())
            }
            TourCommand::Skip => {
                self.cmd_skip();
                Ok(())
            }
            TourCommand::Open => {
                self.cmd_open();
                Ok(())
            }
            TourCommand::Reset { force } => {
                self.cmd_reset(force);
                Ok(())
            }
            TourCommand::Update(patch) => self.cmd_update(patch),
        }
    }

    /// Start or resume the tour.
    ///
    /// # Errors
    ///
    /// [`TourError::CannotStart`] if the step list is empty or invalid,
    /// [`TourError::InvalidIndex`] if `index` is out of range.
    pub fn start(&mut self, index: Option<usize>) -> Result<(), TourError> {
        self.apply(TourCommand::Start(index))
    }

    pub fn stop(&mut self) {
        let _ = self.apply(TourCommand::Stop);
    }

    pub fn next(&mut self) {
        let _ = self.apply(TourCommand::Next);
    }

    pub fn prev(&mut self) {
        let _ = self.apply(TourCommand::Prev);
    }

    /// Move to `index`.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidIndex`] if `index` is out of range.
    pub fn go(&mut self, index: usize) -> Result<(), TourError> {
        self.apply(TourCommand::Go(index))
    }

    /// Move to `index` tagged with `action`, even in controlled mode.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidIndex`] if `index` is out of range.
    pub fn jump(&mut self, index: usize, action: Action) -> Result<(), TourError> {
        self.apply(TourCommand::Jump { index, action })
    }

    pub fn close(&mut self) {
        let _ = self.apply(TourCommand::Close);
    }

    pub fn skip(&mut self) {
        let _ = self.apply(TourCommand::Skip);
    }

    pub fn open(&mut self) {
        let _ = self.apply(TourCommand::Open);
    }

    pub fn reset(&mut self, force: bool) {
        let _ = self.apply(TourCommand::Reset { force });
    }

    /// Merge a partial state. Fields the patch leaves out keep their
    /// current value.
    ///
    /// # Errors
    ///
    /// [`TourError::InvalidIndex`] if the patch carries an out-of-range index.
    pub fn update(&mut self, patch: StatePatch) -> Result<(), TourError> {
        self.apply(TourCommand::Update(patch))
    }

    fn check_index(&self, index: usize) -> Result<(), TourError> {
        if index >= self.state.size {
            warn!(index, size = self.state.size, "index out of range");
            return Err(TourError::InvalidIndex {
                index,
                size: self.state.size,
            });
        }
        Ok(())
    }

    fn ignore_unless_running(&self) -> bool {
        if self.state.is_running() {
            return false;
        }
        debug!(status = %self.state.status, "ignored while not running");
        true
    }

    fn cmd_start(&mut self, index: Option<usize>) -> Result<(), TourError> {
        if let Err(err) = validate_steps(&self.steps) {
            warn!(error = %err, "tour cannot start");
            return Err(TourError::cannot_start(err.to_string()));
        }
        let index = index.unwrap_or(self.state.index);
        self.check_index(index)?;

        self.commit(TourState {
            action: Action::Start,
            index,
            lifecycle: Lifecycle::Init,
            status: Status::Running,
            ..self.state
        });
        Ok(())
    }

    fn cmd_stop(&mut self) {
        let status = match self.state.status {
            Status::Finished | Status::Skipped => {
                debug!(status = %self.state.status, "stop ignored on a finished tour");
                return;
            }
            Status::Running | Status::Paused => Status::Paused,
            Status::Idle => Status::Idle,
            Status::Ready | Status::Error => Status::Ready,
        };
        self.commit(TourState {
            action: Action::Stop,
            lifecycle: Lifecycle::Init,
            status,
            ..self.state
        });
    }

    /// Shared body of `next` and `close`.
    fn cmd_advance(&mut self, action: Action) {
        if self.ignore_unless_running() {
            return;
        }
        let mut next = TourState {
            action,
            lifecycle: Lifecycle::Init,
            ..self.state
        };
        if self.state.is_last_step() {
            next.status = Status::Finished;
        } else if !self.state.controlled {
            next.index += 1;
        }
        self.commit(next);
    }

    fn cmd_prev(&mut self) {
        if self.ignore_unless_running() {
            return;
        }
        if self.state.index == 0 {
            debug!("prev ignored on the first step");
            return;
        }
        let mut next = TourState {
            action: Action::Prev,
            lifecycle: Lifecycle::Init,
            ..self.state
        };
        if !self.state.controlled {
            next.index -= 1;
        }
        self.commit(next);
    }

    fn cmd_go(&mut self, index: usize) -> Result<(), TourError> {
        self.check_index(index)?;
        if self.ignore_unless_running() {
            return Ok(());
        }
        let mut next = TourState {
            action: Action::Go,
            lifecycle: Lifecycle::Init,
            ..self.state
        };
        if !self.state.controlled {
            next.index = index;
        }
        self.commit(next);
        Ok(())
    }

    fn cmd_jump(&mut self, index: usize, action: Action) -> Result<(), TourError> {
        if self.state.status.is_terminal() {
            debug!(index, "jump ignored on a finished tour");
            return Ok(());
        }
        self.check_index(index)?;
        self.commit(TourState {
            action,
            index,
            lifecycle: Lifecycle::Init,
            ..self.state
        });
        Ok(())
    }

    fn cmd_skip(&mut self) {
        if self.ignore_unless_running() {
            return;
        }
        self.commit(TourState {
            action: Action::Skip,
            lifecycle: Lifecycle::Init,
            status: Status::Skipped,
            ..self.state
        });
    }

    fn cmd_open(&mut self) {
        if self.ignore_unless_running() {
            return;
        }
        self.commit(TourState {
            action: Action::Update,
            lifecycle: Lifecycle::Tooltip,
            ..self.state
        });
    }

    fn cmd_reset(&mut self, force: bool) {
        let mut next = TourState {
            action: Action::Reset,
            lifecycle: Lifecycle::Init,
            ..self.state
        };
        if force || !self.state.controlled {
            next.index = 0;
            next.status = if self.state.size > 0 {
                Status::Ready
            } else {
                Status::Idle
            };
        }
        self.commit(next);
    }

    fn cmd_update(&mut self, patch: StatePatch) -> Result<(), TourError> {
        if let Some(index) = patch.index {
            self.check_index(index)?;
        }
        let next = TourState {
            action: patch.action.unwrap_or(self.state.action),
            index: patch.index.unwrap_or(self.state.index),
            lifecycle: patch.lifecycle.unwrap_or(self.state.lifecycle),
            status: patch.status.unwrap_or(self.state.status),
            ..self.state
        };
        if next.lifecycle.is_presenting() && !next.is_running() {
            debug!(
                lifecycle = %next.lifecycle,
                status = %next.status,
                "update ignored: presenting lifecycle outside a running tour"
            );
            return Ok(());
        }
        if next.is_running() && next.index >= next.size {
            debug!(
                index = next.index,
                size = next.size,
                "update ignored: running tour needs an index inside the step list"
            );
            return Ok(());
        }
        self.commit(next);
        Ok(())
    }
}

/// RAII guard for a store listener.
///
/// Dropping the guard (or calling [`Subscription::unsubscribe`]) stops
/// delivery. Dead entries are pruned on the next notification.
pub struct Subscription {
    listener: Option<ListenerRc>,
}

impl Subscription {
    /// Stop receiving updates. Returns `false` if already unsubscribed.
    pub fn unsubscribe(&mut self) -> bool {
        self.listener.take().is_some()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn steps(n: usize) -> Vec<Step> {
        (0..n).map(|i| Step::new(format!("#s{i}"))).collect()
    }

    fn running(n: usize) -> Store {
        let mut store = Store::new(steps(n));
        store.start(None).unwrap();
        store
    }

    #[test]
    fn initial_state() {
        let store = Store::new(steps(3));
        let state = store.state();
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.action, Action::Init);
        assert_eq!(state.lifecycle, Lifecycle::Init);
        assert_eq!(state.size, 3);
        assert!(!state.controlled);

        assert_eq!(Store::new(Vec::new()).state().status, Status::Idle);
    }

    #[test]
    fn from_config_detects_controlled_mode() {
        let config = TourConfig::new(steps(4)).step_index(2);
        let state = Store::from_config(&config).state();
        assert!(state.controlled);
        assert_eq!(state.index, 2);

        let config = TourConfig::new(steps(4)).step_index(2).run(false);
        assert!(!Store::from_config(&config).state().controlled);
    }

    #[test]
    fn start_sets_running() {
        let store = running(3);
        let state = store.state();
        assert_eq!(state.status, Status::Running);
        assert_eq!(state.action, Action::Start);
        assert_eq!(state.lifecycle, Lifecycle::Init);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn start_rejects_empty_list() {
        let mut store = Store::new(Vec::new());
        let err = store.start(None).unwrap_err();
        assert!(matches!(err, TourError::CannotStart { .. }));
        assert_eq!(store.state().status, Status::Idle);
    }

    #[test]
    fn start_rejects_blank_target() {
        let mut store = Store::new(vec![Step::new("#a"), Step::new("  ")]);
        assert!(matches!(
            store.start(None),
            Err(TourError::CannotStart { .. })
        ));
        assert_eq!(store.state().status, Status::Ready);
    }

    #[test]
    fn start_at_index() {
        let mut store = Store::new(steps(3));
        store.start(Some(2)).unwrap();
        assert_eq!(store.state().index, 2);

        let mut store = Store::new(steps(3));
        assert_eq!(
            store.start(Some(3)),
            Err(TourError::InvalidIndex { index: 3, size: 3 })
        );
        assert_eq!(store.state().status, Status::Ready);
    }

    #[test]
    fn next_advances_then_finishes() {
        let mut store = running(3);
        store.next();
        assert_eq!(store.state().index, 1);
        assert_eq!(store.state().action, Action::Next);
        store.next();
        assert_eq!(store.state().index, 2);
        store.next();
        let state = store.state();
        assert_eq!(state.status, Status::Finished);
        assert_eq!(state.index, 2);
    }

    #[test]
    fn prev_at_first_step_is_noop() {
        let mut store = running(3);
        let before = store.state();
        store.prev();
        assert_eq!(store.state(), before);

        store.next();
        store.prev();
        assert_eq!(store.state().index, 0);
        assert_eq!(store.state().action, Action::Prev);
    }

    #[test]
    fn go_out_of_range_is_rejected() {
        let mut store = running(3);
        let before = store.state();
        assert_eq!(
            store.go(5),
            Err(TourError::InvalidIndex { index: 5, size: 3 })
        );
        assert_eq!(store.state(), before);

        store.go(2).unwrap();
        assert_eq!(store.state().index, 2);
        assert_eq!(store.state().action, Action::Go);
    }

    #[test]
    fn close_advances_or_finishes() {
        let mut store = running(2);
        store.close();
        assert_eq!(store.state().index, 1);
        assert_eq!(store.state().action, Action::Close);
        store.close();
        assert_eq!(store.state().status, Status::Finished);
    }

    #[test]
    fn skip_is_terminal() {
        let mut store = running(3);
        store.skip();
        let skipped = store.state();
        assert_eq!(skipped.status, Status::Skipped);

        store.next();
        store.prev();
        store.close();
        store.stop();
        assert_eq!(store.state(), skipped);

        store.start(Some(0)).unwrap();
        assert_eq!(store.state().status, Status::Running);
    }

    #[test]
    fn stop_pauses_and_start_resumes() {
        let mut store = running(3);
        store.next();
        store.stop();
        assert_eq!(store.state().status, Status::Paused);
        assert_eq!(store.state().action, Action::Stop);

        store.start(None).unwrap();
        assert_eq!(store.state().status, Status::Running);
        assert_eq!(store.state().index, 1);
    }

    #[test]
    fn stop_before_start_stays_ready() {
        let mut store = Store::new(steps(2));
        store.stop();
        assert_eq!(store.state().status, Status::Ready);
        assert_eq!(store.state().action, Action::Stop);
    }

    #[test]
    fn commands_ignored_when_not_running() {
        let mut store = Store::new(steps(3));
        let before = store.state();
        store.next();
        store.prev();
        store.close();
        store.skip();
        store.open();
        assert_eq!(store.go(1), Ok(()));
        assert_eq!(store.state(), before);
    }

    #[test]
    fn controlled_next_keeps_index() {
        let config = TourConfig::new(steps(3)).step_index(1);
        let mut store = Store::from_config(&config);
        store.start(None).unwrap();
        store.next();
        let state = store.state();
        assert_eq!(state.index, 1);
        assert_eq!(state.action, Action::Next);

        store.jump(2, Action::Next).unwrap();
        assert_eq!(store.state().index, 2);
    }

    #[test]
    fn jump_ignored_when_terminal() {
        let mut store = running(2);
        store.skip();
        assert_eq!(store.jump(1, Action::Next), Ok(()));
        assert_eq!(store.state().index, 0);
    }

    #[test]
    fn update_promotes_lifecycle() {
        let mut store = running(2);
        store
            .update(StatePatch::new().lifecycle(Lifecycle::Ready))
            .unwrap();
        assert_eq!(store.state().lifecycle, Lifecycle::Ready);
        assert_eq!(store.state().action, Action::Start);

        store
            .update(StatePatch::new().lifecycle(Lifecycle::Tooltip))
            .unwrap();
        assert_eq!(store.state().lifecycle, Lifecycle::Tooltip);
    }

    #[test]
    fn update_refuses_presenting_lifecycle_when_idle() {
        let mut store = Store::new(steps(2));
        let before = store.state();
        store
            .update(StatePatch::new().lifecycle(Lifecycle::Beacon))
            .unwrap();
        assert_eq!(store.state(), before);
        assert!(store.update(StatePatch::new().index(7)).is_err());
    }

    #[test]
    fn reset_uncontrolled_and_controlled() {
        let mut store = running(3);
        store.next();
        store.reset(false);
        let state = store.state();
        assert_eq!(state.index, 0);
        assert_eq!(state.status, Status::Ready);
        assert_eq!(state.action, Action::Reset);

        let config = TourConfig::new(steps(3)).step_index(2);
        let mut store = Store::from_config(&config);
        store.start(None).unwrap();
        store.reset(false);
        assert_eq!(store.state().index, 2);
        assert_eq!(store.state().status, Status::Running);
        store.reset(true);
        assert_eq!(store.state().index, 0);
        assert_eq!(store.state().status, Status::Ready);
    }

    #[test]
    fn set_steps_moves_between_idle_and_ready() {
        let mut store = Store::new(Vec::new());
        store.set_steps(steps(2));
        assert_eq!(store.state().status, Status::Ready);
        assert_eq!(store.state().size, 2);
        store.set_steps(Vec::new());
        assert_eq!(store.state().status, Status::Idle);
    }

    #[test]
    fn set_steps_clamps_running_index() {
        let mut store = running(4);
        store.go(3).unwrap();
        store.set_steps(steps(2));
        let state = store.state();
        assert_eq!(state.index, 1);
        assert!(state.is_consistent());
    }

    #[test]
    fn listeners_receive_snapshots_in_order() {
        let mut store = Store::new(steps(3));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::new(Cell::new(0));

        let seen_clone = Rc::clone(&seen);
        let _a = store.subscribe(move |state| seen_clone.borrow_mut().push(state.index));
        let first_clone = Rc::clone(&first);
        let _b = store.subscribe(move |_| first_clone.set(first_clone.get() + 1));

        store.start(None).unwrap();
        store.next();
        store.next();
        assert_eq!(*seen.borrow(), vec![0, 1, 2]);
        assert_eq!(first.get(), 3);
    }

    #[test]
    fn unchanged_state_does_not_notify() {
        let mut store = running(3);
        let count = Rc::new(Cell::new(0));
        let count_clone = Rc::clone(&count);
        let _sub = store.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        store.prev();
        store.start(None).unwrap();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let mut store = Store::new(steps(2));
        let count = Rc::new(Cell::new(0));
        let count_clone = Rc::clone(&count);
        let mut sub = store.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        store.start(None).unwrap();
        assert!(sub.unsubscribe());
        assert!(!sub.unsubscribe());
        assert!(!sub.is_active());
        store.next();
        assert_eq!(count.get(), 1);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let mut store = Store::new(steps(2));
        let count = Rc::new(Cell::new(0));
        let count_clone = Rc::clone(&count);
        let sub = store.subscribe(move |_| count_clone.set(count_clone.get() + 1));
        drop(sub);
        store.start(None).unwrap();
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn update_refuses_running_without_a_step() {
        let mut store = Store::new(Vec::new());
        let before = store.state();
        store
            .update(StatePatch::new().status(Status::Running))
            .unwrap();
        assert_eq!(store.state(), before);
        assert!(store.state().is_consistent());

        // Controlled index beyond a shorter list.
        let config = TourConfig::new(steps(4)).step_index(3);
        let mut store = Store::from_config(&config);
        store.set_steps(steps(2));
        assert_eq!(store.state().index, 3);
        let before = store.state();
        store
            .update(StatePatch::new().status(Status::Running))
            .unwrap();
        assert_eq!(store.state(), before);
        assert!(store.state().is_consistent());
    }

    #[test]
    fn command_names() {
        assert_eq!(TourCommand::Go(1).name(), "go");
        assert_eq!(TourCommand::Reset { force: true }.name(), "reset");
        assert_eq!(TourCommand::Update(StatePatch::new()).name(), "update");
    }
}
