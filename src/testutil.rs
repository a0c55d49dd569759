use crate::game::Symbol;
use crate::panel::{Clock, Panel};
use crate::result::Result;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

const TOLERANCE: Duration = Duration::from_millis(70);

/// Everything a panel was asked to do, in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    Drive(Symbol, Duration),
    ClearAll,
    FailureAnimation,
    AttentionSweep,
}

/// Panel that records instead of blinking, for assertions.
pub struct RecordingPanel(Rc<RefCell<Vec<PanelEvent>>>);

impl RecordingPanel {
    pub fn new() -> (Self, Rc<RefCell<Vec<PanelEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        (RecordingPanel(Rc::clone(&events)), events)
    }
}

impl Panel for RecordingPanel {
    fn drive(&mut self, symbol: Symbol, duration: Duration) -> Result<()> {
        self.0.borrow_mut().push(PanelEvent::Drive(symbol, duration));
        Ok(())
    }

    fn clear_all(&mut self) -> Result<()> {
        self.0.borrow_mut().push(PanelEvent::ClearAll);
        Ok(())
    }

    fn play_failure_animation(&mut self) -> Result<()> {
        self.0.borrow_mut().push(PanelEvent::FailureAnimation);
        Ok(())
    }

    fn play_attention_sweep(&mut self) -> Result<()> {
        self.0.borrow_mut().push(PanelEvent::AttentionSweep);
        Ok(())
    }
}

/// Clock that does not wait, keeping tests fast.
pub struct NoopClock;

impl Clock for NoopClock {
    fn sleep(&self, _: Duration) {}
}

pub fn assert_duration(topic: &str, expected: Duration, actual: Duration) {
    if actual > expected {
        let excess = actual - expected;
        assert!(
            excess < TOLERANCE,
            "Expected {} of {:?}, instead got {:?}, too long by {:?}",
            topic,
            expected,
            actual,
            excess
        )
    } else {
        let shortfall = expected - actual;
        assert!(
            shortfall < TOLERANCE,
            "Expected {} of {:?}, instead got {:?}, too short by {:?}",
            topic,
            expected,
            actual,
            shortfall
        )
    }
}
