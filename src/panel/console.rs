use super::Panel;
use crate::game::Symbol;
use crate::result::Result;

use std::io::{stdout, Write};
use std::thread::sleep;
use std::time::Duration;

/// Step length of the attention sweep and the failure blinking.
const ANIMATION_STEP: Duration = Duration::from_millis(200);

/// How often all lamps toggle when the player failed.
const FAILURE_TOGGLES: usize = 8;

/// Lamp order of the attention sweep: up the row, down again,
/// up again.
const SWEEP: [Symbol; 10] = [
    Symbol::Green,
    Symbol::Red,
    Symbol::Yellow,
    Symbol::Blue,
    Symbol::Yellow,
    Symbol::Red,
    Symbol::Green,
    Symbol::Red,
    Symbol::Yellow,
    Symbol::Blue,
];

const LAMP_LABELS: [char; 4] = ['G', 'R', 'Y', 'B'];

/// Stand-in for the lamp-and-buzzer panel that renders to the
/// terminal, redrawing a single line in place.
pub struct ConsolePanel;

impl ConsolePanel {
    pub fn new() -> ConsolePanel {
        ConsolePanel
    }

    fn show(&mut self, lit: [bool; 4], tone: Option<u32>) -> Result<()> {
        let mut out = stdout();

        write!(out, "\r")?;
        for (index, on) in lit.iter().enumerate() {
            let label = if *on { LAMP_LABELS[index] } else { ' ' };
            write!(out, "[{}]", label)?;
        }
        match tone {
            Some(hz) => write!(out, " {:>4} Hz", hz)?,
            None => write!(out, "        ")?,
        }
        out.flush()?;

        Ok(())
    }

    fn lit_only(index: usize) -> [bool; 4] {
        let mut lamps = [false; 4];
        lamps[index] = true;
        lamps
    }
}

impl Panel for ConsolePanel {
    fn drive(&mut self, symbol: Symbol, duration: Duration) -> Result<()> {
        self.show(Self::lit_only(symbol.index()), Some(symbol.tone_hz()))?;
        sleep(duration);
        self.clear_all()
    }

    fn clear_all(&mut self) -> Result<()> {
        self.show([false; 4], None)
    }

    fn play_failure_animation(&mut self) -> Result<()> {
        self.clear_all()?;

        let mut on = false;
        for _ in 0..FAILURE_TOGGLES {
            on = !on;
            self.show([on; 4], None)?;
            sleep(ANIMATION_STEP);
        }

        self.clear_all()
    }

    fn play_attention_sweep(&mut self) -> Result<()> {
        for symbol in SWEEP.iter() {
            self.show(Self::lit_only(symbol.index()), None)?;
            sleep(ANIMATION_STEP);
        }

        self.clear_all()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testutil::assert_duration;
    use std::time::Instant;

    // Blinks the real animation with real pauses, run with
    // `cargo test --features expensive_tests` to include it.
    #[test]
    #[cfg_attr(not(feature = "expensive_tests"), ignore)]
    fn failure_animation_blocks_for_all_toggles() {
        let mut panel = ConsolePanel::new();

        let start = Instant::now();
        panel.play_failure_animation().unwrap();

        assert_duration(
            "failure animation",
            ANIMATION_STEP * FAILURE_TOGGLES as u32,
            start.elapsed(),
        );
    }
}
