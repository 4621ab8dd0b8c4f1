#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tourkit_core::{
    KeyEvent, Placement, PlacementResult, Step, TourConfig, WidgetKind,
};
use tourkit_harness::{FakeDocument, FakeElement};
use tourkit_runtime::TourController;

#[derive(Debug, Arbitrary)]
enum Op {
    Next,
    Prev,
    Go(u8),
    Close,
    Skip,
    Open,
    Reset(bool),
    Start(Option<u8>),
    Stop,
    TargetReady,
    Placement { tooltip: bool, top: i16, flipped: bool },
    Key(u8),
    HostIndex(Option<u8>),
    Run(bool),
    RemoveTarget(u8),
}

#[derive(Debug, Arbitrary)]
struct Input {
    size: u8,
    centered: u8,
    continuous: bool,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let size = usize::from(input.size % 6) + 1;
    let steps: Vec<Step> = (0..size)
        .map(|i| {
            if input.centered & (1 << i) != 0 {
                Step::centered()
            } else {
                Step::new(format!("#s{i}"))
            }
        })
        .collect();
    let mut document = FakeDocument::new();
    for i in 0..size {
        document.insert(format!("#s{i}"), FakeElement::at(250.0 * i as f64));
    }

    let mut config = TourConfig::new(steps).continuous(input.continuous);
    let mut tour = TourController::new(config.clone(), document);
    tour.mount();

    for op in input.ops.into_iter().take(256) {
        match op {
            Op::Next => tour.helpers().next(),
            Op::Prev => tour.helpers().prev(),
            Op::Go(i) => tour.helpers().go(usize::from(i)),
            Op::Close => tour.helpers().close(),
            Op::Skip => tour.helpers().skip(),
            Op::Open => tour.helpers().open(),
            Op::Reset(restart) => tour.helpers().reset(restart),
            Op::Start(i) => tour.start(i.map(usize::from)),
            Op::Stop => tour.stop(),
            Op::TargetReady => tour.report_target_ready(),
            Op::Placement { tooltip, top, flipped } => {
                let kind = if tooltip { WidgetKind::Tooltip } else { WidgetKind::Beacon };
                let result = PlacementResult::new(Placement::Top, f64::from(top)).flipped(flipped);
                tour.report_placement(kind, result);
            }
            Op::Key(code) => {
                let _ = tour.handle_key(&KeyEvent::from_key_code(u32::from(code)));
            }
            Op::HostIndex(index) => {
                config.step_index = index.map(usize::from);
                tour.set_config(config.clone());
            }
            Op::Run(run) => {
                config.run = run;
                tour.set_config(config.clone());
            }
            Op::RemoveTarget(i) => {
                let selector = format!("#s{}", usize::from(i) % size);
                tour.document_mut().remove(&selector);
            }
        }

        let state = tour.state();
        assert!(state.is_consistent(), "inconsistent state {state:?}");
        assert_eq!(
            tour.document().keyboard_bound(),
            tour.is_keyboard_bound(),
            "keyboard scope out of sync"
        );
    }
});
