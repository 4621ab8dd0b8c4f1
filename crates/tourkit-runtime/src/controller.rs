#![forbid(unsafe_code)]

//! Orchestration controller.
//!
//! [`TourController`] is the host-facing side of the engine. It turns host
//! input (configuration changes, key presses, widget reports) into store
//! commands, and turns store transitions into [`TourEvent`]s, scroll
//! requests and keyboard-scope changes against the host [`Document`].
//!
//! # Ordering
//!
//! Commands are applied strictly in the order they arrive. Follow-up
//! commands issued while a transition is being handled (lifecycle
//! promotion, skipping a missing target, the reset after a tour ends) are
//! queued and applied after the current transition has emitted all of its
//! events.

use std::collections::VecDeque;
use std::fmt;

use tourkit_core::step::resolve_index;
use tourkit_core::{
    Action, Document, EventType, KeyEvent, Lifecycle, PlacementResult, Recovery, ResolvedStep,
    StatePatch, Status, TourConfig, TourError, TourEvent, TourState, WidgetKind, validate_steps,
};
use tracing::{debug, info, warn};

use crate::scroll::{ScrollConfig, ScrollPlan, StepPosition, TargetGeometry, plan_scroll};
use crate::store::{Store, Subscription, TourCommand};

type Callback = Box<dyn FnMut(&TourEvent)>;

/// Which host options changed between two configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConfigChange {
    pub run: bool,
    pub steps: bool,
    /// The host supplied a different `step_index`.
    pub step_index: bool,
}

impl ConfigChange {
    #[must_use]
    pub fn between(previous: &TourConfig, next: &TourConfig) -> Self {
        Self {
            run: previous.run != next.run,
            steps: previous.steps != next.steps,
            step_index: next.step_index.is_some() && previous.step_index != next.step_index,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.run && !self.steps && !self.step_index
    }
}

/// Drives a tour against a host document.
pub struct TourController<D: Document> {
    config: TourConfig,
    store: Store,
    document: D,
    callback: Option<Callback>,
    pending: VecDeque<TourCommand>,
    draining: bool,
    mounted: bool,
    keyboard_bound: bool,
    beacon_placement: Option<PlacementResult>,
    tooltip_placement: Option<PlacementResult>,
    /// Index the tour most recently moved away from.
    departed_index: Option<usize>,
    /// Index whose `step:before` has been emitted for the current visit.
    announced: Option<usize>,
}

impl<D: Document> fmt::Debug for TourController<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TourController")
            .field("state", &self.store.state())
            .field("mounted", &self.mounted)
            .field("keyboard_bound", &self.keyboard_bound)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl<D: Document> TourController<D> {
    /// Create an unmounted controller.
    pub fn new(config: TourConfig, document: D) -> Self {
        let store = Store::from_config(&config);
        Self {
            config,
            store,
            document,
            callback: None,
            pending: VecDeque::new(),
            draining: false,
            mounted: false,
            keyboard_bound: false,
            beacon_placement: None,
            tooltip_placement: None,
            departed_index: None,
            announced: None,
        }
    }

    /// Set the host callback that receives every [`TourEvent`].
    #[must_use]
    pub fn with_callback(mut self, callback: impl FnMut(&TourEvent) + 'static) -> Self {
        self.callback = Some(Box::new(callback));
        self
    }

    pub fn set_callback(&mut self, callback: impl FnMut(&TourEvent) + 'static) {
        self.callback = Some(Box::new(callback));
    }

    // ── Accessors ───────────────────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> TourState {
        self.store.state()
    }

    #[must_use]
    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn is_keyboard_bound(&self) -> bool {
        self.keyboard_bound
    }

    /// The active step, resolved against the current configuration.
    #[must_use]
    pub fn current_step(&self) -> Option<ResolvedStep> {
        self.resolved(self.store.state().index)
    }

    /// Latest placement reported for `kind`, if any.
    #[must_use]
    pub fn placement(&self, kind: WidgetKind) -> Option<PlacementResult> {
        match kind {
            WidgetKind::Beacon => self.beacon_placement,
            WidgetKind::Tooltip => self.tooltip_placement,
        }
    }

    /// Register a raw state listener on the underlying store.
    pub fn subscribe(&self, listener: impl Fn(&TourState) + 'static) -> Subscription {
        self.store.subscribe(listener)
    }

    /// Host control handle.
    pub fn helpers(&mut self) -> Helpers<'_, D> {
        Helpers { controller: self }
    }

    // ── Host lifecycle ──────────────────────────────────────────────

    /// Attach to the host. Starts the tour when `run` is set and the step
    /// list is valid; an invalid list is reported as an `error` event.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        if self.config.debug {
            info!(
                target: "tourkit::debug",
                steps = self.config.steps.len(),
                run = self.config.run,
                controlled = self.store.state().controlled,
                "init"
            );
        }
        if !self.config.run {
            return;
        }
        match validate_steps(&self.config.steps) {
            Ok(()) => self.dispatch(TourCommand::Start(None)),
            Err(err) => {
                warn!(error = %err, "steps are not valid");
                self.report_error(err);
            }
        }
    }

    /// Detach from the host and release the keyboard scope.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.sync_keyboard();
    }

    /// Apply a new host configuration.
    ///
    /// A changed step list is validated and installed first, then a `run`
    /// change starts or stops the tour, then a changed `step_index` is
    /// translated into a directional jump. A new index is ignored once the
    /// tour has finished or been skipped.
    pub fn set_config(&mut self, next: TourConfig) {
        let change = ConfigChange::between(&self.config, &next);
        if self.config.debug || next.debug {
            info!(
                target: "tourkit::debug",
                run = change.run,
                steps = change.steps,
                step_index = change.step_index,
                "props"
            );
        }
        let previous = std::mem::replace(&mut self.config, next);
        self.store.set_controlled(self.config.is_controlled());

        if change.steps {
            match validate_steps(&self.config.steps) {
                Ok(()) => {
                    let before = self.store.state();
                    self.store.set_steps(self.config.steps.clone());
                    self.observe(before);
                }
                Err(err) => {
                    warn!(error = %err, "steps are not valid");
                    self.report_error(err);
                }
            }
        }

        if change.run {
            if self.config.run {
                self.dispatch(TourCommand::Start(self.config.step_index));
            } else {
                self.dispatch(TourCommand::Stop);
            }
        }

        if change.step_index
            && let Some(index) = self.config.step_index
        {
            let state = self.store.state();
            if state.status.is_terminal() {
                debug!(index, status = %state.status, "index change ignored");
                return;
            }
            let mut action = if previous.step_index.is_some_and(|old| old < index) {
                Action::Next
            } else {
                Action::Prev
            };
            if state.action == Action::Stop {
                action = Action::Start;
            }
            if state.action == Action::Close {
                action = Action::Close;
            }
            self.dispatch(TourCommand::Jump { index, action });
        }
    }

    // ── Host input ──────────────────────────────────────────────────

    pub fn start(&mut self, index: Option<usize>) {
        self.dispatch(TourCommand::Start(index));
    }

    pub fn stop(&mut self) {
        self.dispatch(TourCommand::Stop);
    }

    /// Route a key press. Returns `true` if it closed the current step.
    ///
    /// Escape closes the step only while its tooltip is open, the keyboard
    /// scope is held, and the step permits closing with Escape.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if !key.is_escape() || !self.keyboard_bound {
            return false;
        }
        let state = self.store.state();
        if state.lifecycle != Lifecycle::Tooltip {
            return false;
        }
        match self.resolved(state.index) {
            Some(step) if !step.disable_close_on_esc => {
                self.dispatch(TourCommand::Close);
                true
            }
            _ => false,
        }
    }

    /// The rendered widget found its target: promote `Init` to `Ready`.
    pub fn report_target_ready(&mut self) {
        let state = self.store.state();
        if state.is_running() && state.lifecycle == Lifecycle::Init {
            self.dispatch(TourCommand::Update(
                StatePatch::new().lifecycle(Lifecycle::Ready),
            ));
        }
    }

    /// Record the placement of the beacon or tooltip.
    ///
    /// A report while the step is still in `Init` means the widget has
    /// rendered, so it also promotes the step to `Ready`. The first report
    /// for the widget currently on screen re-runs the scroll planner with
    /// the placement taken into account.
    pub fn report_placement(&mut self, kind: WidgetKind, result: PlacementResult) {
        let slot = match kind {
            WidgetKind::Beacon => &mut self.beacon_placement,
            WidgetKind::Tooltip => &mut self.tooltip_placement,
        };
        let first = slot.is_none();
        *slot = Some(result);

        let state = self.store.state();
        if state.lifecycle == Lifecycle::Init {
            self.report_target_ready();
            return;
        }
        let showing = matches!(
            (kind, state.lifecycle),
            (WidgetKind::Beacon, Lifecycle::Beacon) | (WidgetKind::Tooltip, Lifecycle::Tooltip)
        );
        if first
            && showing
            && state.is_running()
            && let Some(step) = self.resolved(state.index)
        {
            let previous =
                StepPosition::new(self.departed_index.unwrap_or(state.index), Lifecycle::Ready);
            self.scroll_to_step(previous, &state, &step);
        }
    }

    /// The tooltip's close button was pressed.
    pub fn report_tooltip_closed(&mut self) {
        self.dispatch(TourCommand::Close);
    }

    // ── Dispatch ────────────────────────────────────────────────────

    fn dispatch(&mut self, command: TourCommand) {
        self.pending.push_back(command);
        if self.draining {
            return;
        }
        self.draining = true;
        while let Some(command) = self.pending.pop_front() {
            let before = self.store.state();
            match self.store.apply(command) {
                Ok(()) => self.observe(before),
                Err(err) => self.report_error(err),
            }
        }
        self.draining = false;
    }

    fn observe(&mut self, before: TourState) {
        let after = self.store.state();
        if after != before {
            self.on_transition(before, after);
        }
    }

    fn report_error(&mut self, error: TourError) {
        let state = self.store.state();
        let kind = match error {
            TourError::InvalidIndex { .. } => EventType::TourStatus,
            _ => EventType::Error,
        };
        warn!(
            error = %error,
            error_type = error.error_type(),
            index = state.index,
            status = %state.status,
            "tour command rejected"
        );
        let step = self.resolved(state.index);
        self.emit(TourEvent::new(kind, &state, step).with_error(error));
    }

    fn emit(&mut self, event: TourEvent) {
        if self.config.debug {
            info!(
                target: "tourkit::debug",
                event = %event.kind,
                index = event.index,
                lifecycle = %event.lifecycle,
                status = %event.status,
                action = %event.action,
                "callback"
            );
        }
        if let Some(callback) = self.callback.as_mut() {
            callback(&event);
        }
    }

    fn resolved(&self, index: usize) -> Option<ResolvedStep> {
        resolve_index(self.store.steps(), index, &self.config)
    }

    fn sync_keyboard(&mut self) {
        let wanted = self.mounted
            && self.store.state().is_running()
            && !self.config.disable_close_on_esc;
        if wanted == self.keyboard_bound {
            return;
        }
        if wanted {
            self.document.bind_keyboard();
        } else {
            self.document.unbind_keyboard();
        }
        self.keyboard_bound = wanted;
    }

    fn clear_placements(&mut self) {
        self.beacon_placement = None;
        self.tooltip_placement = None;
    }

    // ── Transitions ─────────────────────────────────────────────────

    fn on_transition(&mut self, prev: TourState, next: TourState) {
        if self.config.debug {
            info!(
                target: "tourkit::debug",
                index = next.index,
                action = %next.action,
                lifecycle = %next.lifecycle,
                status = %next.status,
                "state"
            );
        }

        let started = matches!(prev.status, Status::Idle | Status::Ready) && next.is_running();
        if next.index != prev.index {
            self.departed_index = Some(prev.index);
        }
        if started {
            self.departed_index = None;
        }
        if next.lifecycle == Lifecycle::Init
            && (prev.lifecycle != Lifecycle::Init
                || prev.index != next.index
                || next.action == Action::Reset)
        {
            self.announced = None;
        }
        self.sync_keyboard();

        if next.status.is_terminal() && next.status != prev.status {
            let last = self.resolved(prev.index);
            self.emit(
                TourEvent::new(EventType::StepAfter, &next, last.clone())
                    .with_index(prev.index)
                    .with_lifecycle(Lifecycle::Complete),
            );
            self.emit(TourEvent::new(EventType::TourEnd, &next, last).with_index(prev.index));
            self.clear_placements();
            self.departed_index = None;
            self.announced = None;
            self.dispatch(TourCommand::Reset { force: false });
            return;
        }

        let step = self.resolved(next.index);
        if started {
            self.emit(TourEvent::new(EventType::TourStart, &next, step.clone()));
        } else if next.status != prev.status {
            self.emit(TourEvent::new(EventType::TourStatus, &next, step.clone()));
        } else if next.action == Action::Reset && prev.action != Action::Reset {
            self.emit(TourEvent::new(EventType::TourStatus, &next, step.clone()));
        }

        if next.is_running()
            && let Some(step) = step
        {
            self.step_transition(prev, next, &step);
        }
    }

    fn step_transition(&mut self, prev: TourState, next: TourState, step: &ResolvedStep) {
        let had_started = prev.lifecycle.is_presenting() && next.lifecycle == Lifecycle::Init;
        let host_moved = next.controlled && next.action != prev.action;
        if next.action.leaves_step() && (had_started || host_moved) {
            let last = self.resolved(prev.index);
            self.emit(
                TourEvent::new(EventType::StepAfter, &next, last)
                    .with_index(prev.index)
                    .with_lifecycle(Lifecycle::Complete),
            );
        }

        if next.lifecycle == Lifecycle::Init
            && (prev.lifecycle != Lifecycle::Init || prev.index != next.index)
        {
            self.clear_placements();
        }

        if !self.target_present(step) {
            self.target_missing(next, step);
            return;
        }

        let started = matches!(prev.status, Status::Idle | Status::Ready) && next.is_running();
        let readied = prev.lifecycle == Lifecycle::Init && next.lifecycle == Lifecycle::Ready;
        if (started || readied) && self.announced != Some(next.index) {
            self.announced = Some(next.index);
            self.emit(TourEvent::new(EventType::StepBefore, &next, Some(step.clone())));
        }

        if next.lifecycle != prev.lifecycle {
            match next.lifecycle {
                Lifecycle::Beacon => {
                    self.emit(TourEvent::new(EventType::Beacon, &next, Some(step.clone())));
                }
                Lifecycle::Tooltip => {
                    self.emit(TourEvent::new(EventType::Tooltip, &next, Some(step.clone())));
                }
                _ => {}
            }
        }

        let previous = StepPosition::new(
            self.departed_index.unwrap_or(next.index),
            prev.lifecycle,
        );
        self.scroll_to_step(previous, &next, step);

        if step.is_center() && next.lifecycle == Lifecycle::Init {
            self.dispatch(TourCommand::Update(
                StatePatch::new().lifecycle(Lifecycle::Ready),
            ));
        } else if readied {
            let skip_beacon = step.disable_beacon
                || step.is_center()
                || (self.config.continuous
                    && next.action != Action::Close
                    && (next.index > 0 || next.action == Action::Prev));
            let lifecycle = if skip_beacon {
                Lifecycle::Tooltip
            } else {
                Lifecycle::Beacon
            };
            self.dispatch(TourCommand::Update(StatePatch::new().lifecycle(lifecycle)));
        }
    }

    fn target_present(&self, step: &ResolvedStep) -> bool {
        if step.is_center() {
            return true;
        }
        self.document
            .resolve_element(&step.target)
            .is_some_and(|element| self.document.is_visible(&element))
    }

    fn target_missing(&mut self, state: TourState, step: &ResolvedStep) {
        let error = TourError::TargetNotFound {
            index: state.index,
            target: step.target.to_string(),
        };
        warn!(index = state.index, target = %step.target, "target not mounted");

        self.emit(TourEvent::new(
            EventType::TargetNotFound,
            &state,
            Some(step.clone()),
        ));
        self.emit(
            TourEvent::new(EventType::Error, &state, Some(step.clone())).with_error(error.clone()),
        );

        if state.controlled || error.recovery() != Recovery::SkipStep {
            return;
        }
        let patch = match (state.action, state.index) {
            (Action::Prev, 0) => StatePatch::new().index(1).action(Action::Next),
            (Action::Prev, index) => StatePatch::new().index(index - 1).action(Action::Prev),
            (action, index) => StatePatch::new().index(index + 1).action(action),
        };
        let patch = match patch.index {
            Some(index) if index >= state.size => StatePatch::new()
                .status(Status::Finished)
                .action(state.action),
            _ => patch,
        };
        self.dispatch(TourCommand::Update(patch.lifecycle(Lifecycle::Init)));
    }

    fn scroll_to_step(&mut self, previous: StepPosition, state: &TourState, step: &ResolvedStep) {
        let element = if step.is_center() {
            None
        } else {
            self.document.resolve_element(&step.target)
        };
        let geometry = element.as_ref().map(|element| TargetGeometry {
            top: self.document.element_top(element),
            is_fixed: self.document.is_fixed_positioned(element),
            has_custom_scroll_parent: self.document.has_custom_scroll_ancestor(element),
        });
        let placement = match state.lifecycle {
            Lifecycle::Beacon => self.beacon_placement.as_ref(),
            Lifecycle::Tooltip => self.tooltip_placement.as_ref(),
            _ => None,
        };
        let config = ScrollConfig::from_step(&self.config, step);
        let current = StepPosition::new(state.index, state.lifecycle);
        let plan = plan_scroll(step, geometry.as_ref(), placement, previous, current, &config);

        if let (ScrollPlan::ScrollTo(y), Some(element)) = (plan, element) {
            if self.config.debug {
                info!(
                    target: "tourkit::debug",
                    index = state.index,
                    lifecycle = %state.lifecycle,
                    status = %state.status,
                    y,
                    "scrollToStep"
                );
            }
            let container = self.document.find_scroll_ancestor(&element);
            self.document.scroll_to(&container, y);
        }
    }
}

impl<D: Document> Drop for TourController<D> {
    fn drop(&mut self) {
        if self.keyboard_bound {
            self.document.unbind_keyboard();
            self.keyboard_bound = false;
        }
    }
}

/// Host control handle borrowed from a [`TourController`].
///
/// Rejected commands are reported through the event callback, never
/// returned.
pub struct Helpers<'a, D: Document> {
    controller: &'a mut TourController<D>,
}

impl<D: Document> Helpers<'_, D> {
    pub fn next(&mut self) {
        self.controller.dispatch(TourCommand::Next);
    }

    pub fn prev(&mut self) {
        self.controller.dispatch(TourCommand::Prev);
    }

    pub fn go(&mut self, index: usize) {
        self.controller.dispatch(TourCommand::Go(index));
    }

    pub fn close(&mut self) {
        self.controller.dispatch(TourCommand::Close);
    }

    pub fn skip(&mut self) {
        self.controller.dispatch(TourCommand::Skip);
    }

    /// Show the current step's tooltip right away.
    pub fn open(&mut self) {
        self.controller.dispatch(TourCommand::Open);
    }

    /// Rewind to the first step. With `restart` an uncontrolled tour starts
    /// running again immediately.
    pub fn reset(&mut self, restart: bool) {
        self.controller.dispatch(TourCommand::Reset { force: false });
        if restart && !self.controller.store.state().controlled {
            self.controller.dispatch(TourCommand::Start(Some(0)));
        }
    }

    #[must_use]
    pub fn info(&self) -> TourState {
        self.controller.store.info()
    }
}

impl<D: Document> fmt::Debug for Helpers<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Helpers")
            .field("state", &self.controller.store.state())
            .finish()
    }
}
