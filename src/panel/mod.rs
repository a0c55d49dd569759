//! Output side of the game: the four lamps, their tones and
//! the canned animations.

mod console;

pub use console::ConsolePanel;

use crate::game::Symbol;
use crate::result::Result;

use std::thread;
use std::time::Duration;

/// The lamp-and-buzzer panel the game plays on.
///
/// Implementations are assumed to complete every call. A
/// returned error is fatal to the whole device, the game does
/// not try to recover from it.
pub trait Panel {
    /// Illuminates the symbol's lamp and sounds its tone for
    /// the given duration, blocking, then turns both off.
    fn drive(&mut self, symbol: Symbol, duration: Duration) -> Result<()>;

    /// Turns every lamp off.
    fn clear_all(&mut self) -> Result<()>;

    /// Blinks a fixed pattern clearly distinguishable from
    /// playback, telling the player the round is lost.
    fn play_failure_animation(&mut self) -> Result<()>;

    /// Plays the lamp sweep that announces a fresh game.
    fn play_attention_sweep(&mut self) -> Result<()>;
}

/// Blocking wait between panel operations.
pub trait Clock {
    fn sleep(&self, duration: Duration);
}

/// Waits by putting the game thread to sleep.
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration)
    }
}
