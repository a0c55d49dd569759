use crate::app::App;
use crate::game::{EntropySource, Machine, SymbolSource, Timings};
use crate::panel::{Clock, ConsolePanel, Panel, SystemClock};
use crate::result::Result;
use crate::senses::{Queue, QueueInput, Sensors, StdinButtons};
use crate::util::time::to_duration;

use log::error;

use std::mem::replace;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub struct Builder {
    stdin_buttons: bool,
    queues: Vec<Queue>,
    timings: Timings,
    panel: Option<Box<dyn Panel>>,
    clock: Option<Box<dyn Clock>>,
    source: Option<Box<dyn SymbolSource>>,
    termination_flag: Arc<AtomicBool>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            stdin_buttons: false,
            queues: Vec::new(),
            timings: Timings::default(),
            panel: None,
            clock: None,
            source: None,
            // if never set up, the flag never changes to true
            termination_flag: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl Builder {
    /// Accept button presses typed on stdin.
    pub fn stdin_buttons(&mut self) -> &mut Self {
        self.stdin_buttons = true;
        self
    }

    /// Adds an in-process input queue and hands out the sending
    /// end.
    pub fn input_queue(&mut self) -> QueueInput {
        let (queue, input) = Queue::new();
        self.queues.push(queue);
        input
    }

    /// Overrides the panel the game plays on. Defaults to the
    /// console panel.
    pub fn panel(&mut self, panel: impl Panel + 'static) -> &mut Self {
        self.panel = Some(Box::new(panel));
        self
    }

    /// Overrides how the game waits between panel operations.
    /// Defaults to putting the thread to sleep.
    pub fn clock(&mut self, clock: impl Clock + 'static) -> &mut Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Overrides where the moves of the sequence come from.
    /// Defaults to a fresh entropy-seeded generator.
    pub fn symbol_source(&mut self, source: impl SymbolSource + 'static) -> &mut Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Overrides how long each symbol stays lit during sequence
    /// playback, in fractional seconds.
    pub fn pace_secs(&mut self, secs: f64) -> Result<&mut Self> {
        let symbol_time = to_duration(secs)?;
        self.timings = self.timings.with_symbol_time(symbol_time);
        Ok(self)
    }

    /// Use the given sharable flag to signal termination. The
    /// run loop exits before handling the next input once the
    /// flag is `true`.
    pub fn termination_flag(&mut self, flag: &Arc<AtomicBool>) -> &mut Self {
        self.termination_flag = Arc::clone(flag);
        self
    }

    /// Terminate gracefully on SIGINT, SIGTERM and ctrl-c.
    pub fn terminate_on_ctrlc_and_sigterm(&mut self) -> &mut Self {
        let termination_flag = Arc::clone(&self.termination_flag);
        ctrlc::set_handler(move || {
            termination_flag.store(true, Ordering::SeqCst);
        })
        .unwrap_or_else(|e| {
            error!(
                "Could not install termination handlers, \
                 lamps may stay lit at exit: {}",
                e
            )
        });
        self
    }

    pub fn build(&mut self) -> App {
        let panel = self
            .panel
            .take()
            .unwrap_or_else(|| Box::new(ConsolePanel::new()));
        let clock = self.clock.take().unwrap_or_else(|| Box::new(SystemClock));
        let source = self
            .source
            .take()
            .unwrap_or_else(|| Box::new(EntropySource::new()));

        let machine = Machine::new(panel, clock, source, self.timings);

        let mut sensors = Sensors::builder();
        if self.stdin_buttons {
            sensors.background(StdinButtons::new());
        }
        for queue in replace(&mut self.queues, Vec::new()) {
            sensors.direct(queue);
        }

        App {
            machine,
            sensors: sensors.build(),
            termination_flag: Arc::clone(&self.termination_flag),
        }
    }
}
