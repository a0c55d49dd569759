//! Input side of the game: presses of the four symbol buttons
//! and the reset trigger, delivered from whatever physical
//! source is configured.

mod bg;
mod err;
mod input;
mod queue;
mod sense;
mod sensors;
mod stdin;

pub use err::Error;
pub use input::{Input, Stamped};
pub use queue::{Queue, QueueInput};
pub use sense::Sense;
pub use sensors::{Sensors, SensorsBuilder};
pub use stdin::StdinButtons;
