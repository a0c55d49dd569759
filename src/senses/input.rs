use crate::game::{Symbol, SymbolError};

use std::time::Instant;

/// Anything the player can do to the device: press one of the
/// four symbol buttons or the recessed reset button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// One of the four symbol buttons went down.
    Press(Symbol),
    /// The reset button went down, deliberate at any time.
    Reset,
}

impl Input {
    /// Press of the button at the given lamp position.
    ///
    /// Rejects positions outside the four-button alphabet,
    /// e.g. from glitchy input hardware.
    pub fn press<N>(index: N) -> Result<Self, SymbolError>
    where
        N: Into<i32>,
    {
        Symbol::from_index(index).map(Input::Press)
    }

    pub fn reset() -> Self {
        Input::Reset
    }
}

/// An input and the time it physically happened, which can be
/// well before the control loop gets around to looking at it.
#[derive(Debug, Clone, Copy)]
pub struct Stamped {
    pub at: Instant,
    pub input: Input,
}

impl Stamped {
    pub fn now(input: Input) -> Self {
        Stamped {
            at: Instant::now(),
            input,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn press_of_known_button() {
        assert_eq!(Input::Press(Symbol::Yellow), Input::press(2).unwrap());
    }

    #[should_panic]
    #[test]
    fn press_of_button_four() {
        Input::press(4).unwrap();
    }
}
