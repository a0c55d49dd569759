//! Wires the game machine to its inputs and runs the control
//! loop until termination.

mod builder;

pub use builder::Builder;

use crate::game::Machine;
use crate::result::Result;
use crate::senses::{Input, Sensors, Stamped};

use log::debug;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::sleep;
use std::time::Duration;

/// How long to nap when no input is pending.
const IDLE_TIME: Duration = Duration::from_millis(10);

pub struct App {
    machine: Machine,
    sensors: Sensors,
    termination_flag: Arc<AtomicBool>,
}

impl App {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Starts the game and then keeps handling input until the
    /// termination flag is raised or the game errors out.
    pub fn run(&mut self) -> Result<()> {
        self.machine.start()?;

        while !self.should_terminate() {
            match self.sensors.poll() {
                Some(stamped) => self.dispatch(stamped)?,
                None => sleep(IDLE_TIME),
            }
        }

        Ok(())
    }

    fn dispatch(&mut self, stamped: Stamped) -> Result<()> {
        if self.is_stale(&stamped) {
            debug!(
                "discarding {:?}, pressed before the current round started",
                stamped.input
            );
            return Ok(());
        }

        self.machine.handle(stamped.input)?;
        Ok(())
    }

    /// A press is stale when it happened before the input gate
    /// of the current round opened, e.g. while playback was
    /// still running. Reset is never stale.
    fn is_stale(&self, stamped: &Stamped) -> bool {
        match stamped.input {
            Input::Reset => false,
            Input::Press(_) => self
                .machine
                .gate_open_since()
                .map(|open_since| stamped.at < open_since)
                .unwrap_or(false),
        }
    }

    fn should_terminate(&self) -> bool {
        self.termination_flag.load(Ordering::SeqCst)
    }
}
