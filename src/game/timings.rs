use std::time::Duration;

/// All fixed pauses of the game in one place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// How long each symbol stays lit during sequence playback.
    pub symbol: Duration,
    /// Dark pause between two played-back symbols.
    pub gap: Duration,
    /// Feedback flash when the player presses a button.
    pub echo: Duration,
    /// Breather between a completed round and the next playback.
    pub round_pause: Duration,
    /// Pause after the attention sweep before the round starts.
    pub settle: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            symbol: Duration::from_millis(750),
            gap: Duration::from_millis(400),
            echo: Duration::from_millis(400),
            round_pause: Duration::from_millis(500),
            settle: Duration::from_secs(2),
        }
    }
}

impl Timings {
    /// Overrides how long each symbol stays lit during playback,
    /// e.g. from the command line.
    pub fn with_symbol_time(self, symbol: Duration) -> Self {
        Timings { symbol, ..self }
    }
}
