//! Property-based invariant tests for the tour store.
//!
//! 1. `index < size` while running, and presenting lifecycles only while
//!    running, after any command sequence
//! 2. `start` followed by `size - 1` nexts finishes the tour
//! 3. `prev` at the first step is a no-op
//! 4. Finished and skipped tours ignore navigation until restarted
//! 5. Rejected commands leave the state untouched
//! 6. Listeners hear exactly one notification per state change

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use tourkit_core::{Action, Lifecycle, StatePatch, Status, Step};
use tourkit_runtime::{Store, TourCommand};

// ── Strategies ──────────────────────────────────────────────────────────

fn steps(n: usize) -> Vec<Step> {
    (0..n).map(|i| Step::new(format!("#s{i}"))).collect()
}

fn lifecycle_strategy() -> impl Strategy<Value = Lifecycle> {
    prop_oneof![
        Just(Lifecycle::Init),
        Just(Lifecycle::Ready),
        Just(Lifecycle::Beacon),
        Just(Lifecycle::Tooltip),
        Just(Lifecycle::Complete),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Prev),
        Just(Action::Close),
        Just(Action::Start),
        Just(Action::Go),
    ]
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop_oneof![
        Just(Status::Idle),
        Just(Status::Ready),
        Just(Status::Running),
        Just(Status::Paused),
        Just(Status::Finished),
    ]
}

#[derive(Debug, Clone)]
enum Op {
    Command(TourCommand),
    SetSteps(usize),
}

fn command_strategy() -> impl Strategy<Value = TourCommand> {
    prop_oneof![
        proptest::option::of(0usize..8).prop_map(TourCommand::Start),
        Just(TourCommand::Stop),
        Just(TourCommand::Next),
        Just(TourCommand::Prev),
        (0usize..8).prop_map(TourCommand::Go),
        (0usize..8, action_strategy())
            .prop_map(|(index, action)| TourCommand::Jump { index, action }),
        Just(TourCommand::Close),
        Just(TourCommand::Skip),
        Just(TourCommand::Open),
        any::<bool>().prop_map(|force| TourCommand::Reset { force }),
        lifecycle_strategy()
            .prop_map(|lifecycle| TourCommand::Update(StatePatch::new().lifecycle(lifecycle))),
        (0usize..8).prop_map(|index| TourCommand::Update(StatePatch::new().index(index))),
        status_strategy()
            .prop_map(|status| TourCommand::Update(StatePatch::new().status(status))),
        (status_strategy(), lifecycle_strategy()).prop_map(|(status, lifecycle)| {
            TourCommand::Update(StatePatch::new().status(status).lifecycle(lifecycle))
        }),
    ]
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        9 => command_strategy().prop_map(Op::Command),
        1 => (0usize..6).prop_map(Op::SetSteps),
    ]
}

fn apply(store: &mut Store, op: &Op) {
    match op {
        Op::Command(command) => {
            let _ = store.apply(*command);
        }
        Op::SetSteps(n) => store.set_steps(steps(*n)),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 1. Snapshot invariants hold after every command
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn snapshot_invariants_hold(
        size in 0usize..6,
        controlled in any::<bool>(),
        ops in proptest::collection::vec(op_strategy(), 0..60),
    ) {
        let mut store = Store::new(steps(size));
        store.set_controlled(controlled);
        for op in &ops {
            apply(&mut store, op);
            let state = store.state();
            prop_assert!(
                state.is_consistent(),
                "inconsistent state {:?} after {:?}",
                state,
                op
            );
            prop_assert_eq!(state.size, store.steps().len());
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 2. size - 1 nexts finish the tour
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nexts_finish_the_tour(size in 1usize..20) {
        let mut store = Store::new(steps(size));
        store.start(None).unwrap();
        for i in 0..size - 1 {
            store.next();
            prop_assert_eq!(store.state().status, Status::Running);
            prop_assert_eq!(store.state().index, i + 1);
        }
        store.next();
        prop_assert_eq!(store.state().status, Status::Finished);
        prop_assert_eq!(store.state().index, size - 1);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 3. prev never goes below the first step
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prev_stops_at_first_step(size in 1usize..10, prevs in 1usize..10) {
        let mut store = Store::new(steps(size));
        store.start(None).unwrap();
        let before = store.state();
        for _ in 0..prevs {
            store.prev();
        }
        prop_assert_eq!(store.state(), before);
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 4. Terminal states ignore navigation
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn terminal_states_ignore_navigation(
        size in 1usize..6,
        skip in any::<bool>(),
        ops in proptest::collection::vec(
            prop_oneof![
                Just(TourCommand::Next),
                Just(TourCommand::Prev),
                Just(TourCommand::Close),
                Just(TourCommand::Skip),
                Just(TourCommand::Open),
                Just(TourCommand::Stop),
                (0usize..6).prop_map(TourCommand::Go),
                (0usize..6).prop_map(|index| TourCommand::Jump { index, action: Action::Next }),
            ],
            1..20,
        ),
    ) {
        let mut store = Store::new(steps(size));
        store.start(None).unwrap();
        if skip {
            store.skip();
        } else {
            for _ in 0..size {
                store.next();
            }
        }
        let terminal = store.state();
        prop_assert!(terminal.status.is_terminal());

        for command in ops {
            let _ = store.apply(command);
            prop_assert_eq!(store.state(), terminal);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 5. Rejected commands do not mutate
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rejected_commands_do_not_mutate(
        size in 0usize..6,
        ops in proptest::collection::vec(command_strategy(), 0..40),
    ) {
        let mut store = Store::new(steps(size));
        for command in ops {
            let before = store.state();
            if store.apply(command).is_err() {
                prop_assert_eq!(store.state(), before);
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// 6. One notification per change
// ═══════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn listeners_hear_each_change_once(
        size in 1usize..6,
        ops in proptest::collection::vec(op_strategy(), 0..40),
    ) {
        let mut store = Store::new(steps(size));
        let heard = Rc::new(Cell::new(0usize));
        let sink = Rc::clone(&heard);
        let _sub = store.subscribe(move |_| sink.set(sink.get() + 1));

        let mut changes = 0usize;
        for op in &ops {
            let before = store.state();
            apply(&mut store, op);
            if store.state() != before {
                changes += 1;
            }
        }
        prop_assert_eq!(heard.get(), changes);
    }
}
