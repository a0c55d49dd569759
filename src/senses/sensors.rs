pub use builder::Builder as SensorsBuilder;

use crate::senses::{Error, Sense, Stamped};

use log::error;

/// All configured input sources of the device, polled as one.
pub struct Sensors(Vec<Box<dyn Sense>>);

impl Sensors {
    /// Creates a builder for sensors, where senses that may
    /// block can be added and are polled from their own
    /// threads.
    pub fn builder() -> SensorsBuilder {
        SensorsBuilder::new()
    }

    /// Polls every sense and returns the first pending input,
    /// if any.
    ///
    /// Senses that report a fatal error are dropped from the
    /// set, the rest keeps working.
    pub fn poll(&mut self) -> Option<Stamped> {
        let mut first_input = None;
        let mut removals = Vec::new();

        for (idx, sense) in self.0.iter_mut().enumerate() {
            match sense.poll() {
                Err(Error::Fatal(e)) => {
                    error!("Giving up on sense after fatal error: {}", e);
                    removals.push(idx);
                }
                Err(Error::WouldBlock) => (),
                Ok(input) => {
                    first_input = Some(input);
                    break;
                }
            }
        }

        // back to front, so earlier removals do not shift the
        // indices still to be removed
        for idx in removals.into_iter().rev() {
            self.0.swap_remove(idx);
        }

        first_input
    }
}

mod builder {
    use super::{Sense, Sensors};
    use crate::senses::bg::BackgroundSense;

    pub struct Builder {
        may_block: Vec<Box<dyn Sense + Send>>,
        non_blocking: Vec<Box<dyn Sense>>,
    }

    impl Builder {
        pub fn new() -> Self {
            Builder {
                may_block: Vec::new(),
                non_blocking: Vec::new(),
            }
        }

        /// Adds a sense that never blocks when polled.
        pub fn direct(&mut self, sense: impl Sense + 'static) -> &mut Self {
            self.non_blocking.push(Box::new(sense));
            self
        }

        /// Adds a sense that may block, to be polled from a
        /// background thread spawned at build time.
        pub fn background(&mut self, sense: impl Sense + Send + 'static) -> &mut Self {
            self.may_block.push(Box::new(sense));
            self
        }

        pub fn build(self) -> Sensors {
            Sensors(
                self.may_block
                    .into_iter()
                    .map(|sense| BackgroundSense::spawn(sense, None))
                    .chain(self.non_blocking.into_iter())
                    .collect(),
            )
        }
    }
}
