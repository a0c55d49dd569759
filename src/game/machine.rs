use crate::game::{GameSession, Symbol, SymbolSource, Timings};
use crate::panel::{Clock, Panel};
use crate::result::Result;
use crate::senses::Input;

use log::{debug, info, warn};

use std::time::Instant;

/// Observable phase of the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sequence playback in progress, input gate closed.
    Playing,
    /// Waiting for the player to repeat the target prefix.
    AwaitingInput,
    /// A wrong press ended the game, only reset helps now.
    Failed,
}

/// What handling a single event did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input gate was closed, nothing changed.
    Ignored,
    /// A correct press in the middle of a round.
    Progressed,
    /// A correct press finished the round, the grown sequence
    /// has been played back.
    RoundComplete,
    /// A wrong press, the failure animation has been shown.
    Failed,
    /// The session was thrown away, a fresh game is on.
    Reset,
}

/// Drives one game: sequence playback, the input gate, press
/// validation and round progression.
///
/// Owns the session exclusively. All mutation goes through
/// `start`, `handle` and `reset` on a single thread, one
/// event at a time.
pub struct Machine {
    session: GameSession,
    phase: Phase,
    /// When the input gate last opened, `None` while closed.
    gate_opened: Option<Instant>,
    panel: Box<dyn Panel>,
    clock: Box<dyn Clock>,
    source: Box<dyn SymbolSource>,
    timings: Timings,
}

impl Machine {
    pub fn new(
        panel: Box<dyn Panel>,
        clock: Box<dyn Clock>,
        mut source: Box<dyn SymbolSource>,
        timings: Timings,
    ) -> Self {
        let session = GameSession::new(source.as_mut());

        Machine {
            session,
            phase: Phase::Playing,
            gate_opened: None,
            panel,
            clock,
            source,
            timings,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// When the input gate last opened, `None` while it is
    /// closed.
    ///
    /// Lets the control loop tell presses aimed at the current
    /// round apart from ones that happened while playback was
    /// still running.
    pub fn gate_open_since(&self) -> Option<Instant> {
        self.gate_opened
    }

    /// Starts the first game: attention sweep, settle pause,
    /// then the one-move first round.
    pub fn start(&mut self) -> Result<()> {
        self.announce_and_play()
    }

    /// Processes exactly one input event.
    pub fn handle(&mut self, input: Input) -> Result<Outcome> {
        match input {
            Input::Reset => self.reset(),
            Input::Press(symbol) => self.press(symbol),
        }
    }

    /// Throws the session away and starts over with a fresh
    /// one-move game.
    ///
    /// Always allowed, from any phase.
    pub fn reset(&mut self) -> Result<Outcome> {
        info!("starting over with a fresh game");
        self.session = GameSession::new(self.source.as_mut());
        self.announce_and_play()?;
        Ok(Outcome::Reset)
    }

    fn press(&mut self, symbol: Symbol) -> Result<Outcome> {
        if !self.session.accepting_input() {
            debug!("dropping press of {:?}, input gate is closed", symbol);
            return Ok(Outcome::Ignored);
        }

        // The pressed lamp lights up before the press is judged.
        self.panel.drive(symbol, self.timings.echo)?;

        let expected = self.session.expected_symbol();
        if symbol != expected {
            debug!("pressed {:?} where {:?} was expected", symbol, expected);
            self.fail()?;
            return Ok(Outcome::Failed);
        }

        if self.session.at_last_symbol() {
            debug!("round of {} complete", self.session.expected_len());
            self.session.rewind();
            self.clock.sleep(self.timings.round_pause);
            self.session.next_round();
            self.begin_round()?;
            Ok(Outcome::RoundComplete)
        } else {
            self.session.advance();
            Ok(Outcome::Progressed)
        }
    }

    fn fail(&mut self) -> Result<()> {
        self.session.close_gate();
        self.gate_opened = None;
        self.phase = Phase::Failed;
        self.panel.play_failure_animation()
    }

    fn announce_and_play(&mut self) -> Result<()> {
        self.phase = Phase::Playing;
        self.panel.play_attention_sweep()?;
        self.clock.sleep(self.timings.settle);
        self.begin_round()
    }

    /// Replays the whole target prefix from the first move, the
    /// defining mechanic of the game, then opens the gate.
    fn begin_round(&mut self) -> Result<()> {
        self.phase = Phase::Playing;
        self.session.close_gate();
        self.gate_opened = None;
        self.session.ensure_covered(self.source.as_mut());

        for index in 0..self.session.expected_len() {
            let symbol = self.session.symbol_at(index);
            self.panel.drive(symbol, self.timings.symbol)?;
            self.clock.sleep(self.timings.gap);
        }

        self.session.rewind();
        self.session.open_gate();
        self.gate_opened = Some(Instant::now());
        self.phase = Phase::AwaitingInput;
        Ok(())
    }
}

impl Drop for Machine {
    fn drop(&mut self) {
        self.panel
            .clear_all()
            .unwrap_or_else(|e| warn!("Failed to clear panel at shutdown: {}", e));
    }
}
