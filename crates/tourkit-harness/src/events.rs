#![forbid(unsafe_code)]

//! Event recorder for controller callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use tourkit_core::{EventType, TourEvent};

/// Shared log of emitted [`TourEvent`]s.
///
/// Cloning shares the same log, so one handle can be moved into the
/// controller callback while the test keeps the other.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<TourEvent>>>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends every event to this log.
    pub fn recorder(&self) -> impl FnMut(&TourEvent) + 'static {
        let events = Rc::clone(&self.events);
        move |event: &TourEvent| events.borrow_mut().push(event.clone())
    }

    #[must_use]
    pub fn events(&self) -> Vec<TourEvent> {
        self.events.borrow().clone()
    }

    /// Event kinds in emission order.
    #[must_use]
    pub fn kinds(&self) -> Vec<EventType> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    #[must_use]
    pub fn count(&self, kind: EventType) -> usize {
        self.events.borrow().iter().filter(|e| e.kind == kind).count()
    }

    #[must_use]
    pub fn last(&self) -> Option<TourEvent> {
        self.events.borrow().last().cloned()
    }

    /// Most recent event of `kind`.
    #[must_use]
    pub fn last_of(&self, kind: EventType) -> Option<TourEvent> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find(|e| e.kind == kind)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// One JSON object per line, without the resolved step.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        let mut out = String::new();
        for event in self.events.borrow().iter() {
            let line = serde_json::json!({
                "type": event.kind,
                "action": event.action,
                "index": event.index,
                "lifecycle": event.lifecycle,
                "status": event.status,
                "size": event.size,
                "controlled": event.controlled,
                "error": event.error.as_ref().map(|e| e.error_type()),
            });
            out.push_str(&line.to_string());
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourkit_core::TourState;

    #[test]
    fn recorder_shares_log() {
        let log = EventLog::new();
        let mut record = log.recorder();
        let state = TourState::initial(2, false, 0);

        record(&TourEvent::new(EventType::TourStart, &state, None));
        record(&TourEvent::new(EventType::StepBefore, &state, None));

        assert_eq!(log.len(), 2);
        assert_eq!(log.kinds(), vec![EventType::TourStart, EventType::StepBefore]);
        assert_eq!(log.count(EventType::StepBefore), 1);
        assert_eq!(
            log.last_of(EventType::TourStart).map(|e| e.kind),
            Some(EventType::TourStart)
        );

        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn jsonl_has_one_line_per_event() {
        let log = EventLog::new();
        let mut record = log.recorder();
        let state = TourState::initial(3, false, 1);
        record(&TourEvent::new(EventType::TourStatus, &state, None));
        record(&TourEvent::new(EventType::TourEnd, &state, None));

        let dump = log.to_jsonl();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["index"], 1);
        assert_eq!(first["size"], 3);
        assert!(first["error"].is_null());
    }
}
