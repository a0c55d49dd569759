use failure::Fail;

/// One of the four lamp-and-tone pairs on the panel.
///
/// Each symbol is permanently wired to one lamp, one tone and
/// one button. The mapping never changes while the device runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Green,
    Red,
    Yellow,
    Blue,
}

/// A value outside the four-symbol alphabet turned up where a
/// symbol was expected.
#[derive(Debug, Fail)]
pub enum SymbolError {
    #[fail(display = "symbol {} was not in range [0,3]", _0)]
    OutOfAlphabet(i32),
}

impl Symbol {
    /// The whole alphabet, in lamp order.
    pub const ALL: [Symbol; 4] = [Symbol::Green, Symbol::Red, Symbol::Yellow, Symbol::Blue];

    /// Looks up the symbol at the given lamp position.
    ///
    /// Input hardware reports buttons by position, anything
    /// outside the alphabet is rejected here.
    pub fn from_index<N>(index: N) -> Result<Self, SymbolError>
    where
        N: Into<i32>,
    {
        match index.into() {
            0 => Ok(Symbol::Green),
            1 => Ok(Symbol::Red),
            2 => Ok(Symbol::Yellow),
            3 => Ok(Symbol::Blue),
            out => Err(SymbolError::OutOfAlphabet(out)),
        }
    }

    /// Position of this symbol's lamp in the row.
    pub fn index(self) -> usize {
        match self {
            Symbol::Green => 0,
            Symbol::Red => 1,
            Symbol::Yellow => 2,
            Symbol::Blue => 3,
        }
    }

    /// Frequency of the tone sounded while this symbol's lamp
    /// is lit.
    pub fn tone_hz(self) -> u32 {
        match self {
            Symbol::Green => 440,
            Symbol::Red => 523,
            Symbol::Yellow => 659,
            Symbol::Blue => 880,
        }
    }
}
