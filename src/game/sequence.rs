use crate::game::Symbol;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random moves a game is made of.
pub trait SymbolSource {
    /// Draws the next symbol, uniformly over the alphabet.
    fn next_symbol(&mut self) -> Symbol;
}

/// Production source, seeded once from the operating system
/// when the process starts.
pub struct EntropySource(StdRng);

impl EntropySource {
    pub fn new() -> Self {
        EntropySource(StdRng::from_entropy())
    }
}

impl SymbolSource for EntropySource {
    fn next_symbol(&mut self) -> Symbol {
        Symbol::ALL[self.0.gen_range(0, Symbol::ALL.len())]
    }
}

/// Replays a fixed script of symbols, starting over at the end.
///
/// Keeps game runs reproducible for tests.
pub struct ScriptedSource {
    script: Vec<Symbol>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(script: &[Symbol]) -> Self {
        assert!(!script.is_empty(), "Expected at least one scripted symbol");
        ScriptedSource {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl SymbolSource for ScriptedSource {
    fn next_symbol(&mut self) -> Symbol {
        let symbol = self.script[self.next % self.script.len()];
        self.next += 1;
        symbol
    }
}

/// The target pattern for a whole game.
///
/// Grows by one random move at a time and never changes or
/// reorders what was appended before.
#[derive(Debug)]
pub struct Sequence(Vec<Symbol>);

impl Sequence {
    pub fn new() -> Self {
        Sequence(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Draws one symbol from the source and appends it.
    pub fn append_random(&mut self, source: &mut dyn SymbolSource) {
        let symbol = source.next_symbol();
        debug!("move {}: {:?}", self.0.len(), symbol);
        self.0.push(symbol);
    }

    /// Appends random moves until at least `len` are stored.
    ///
    /// Does nothing when the sequence is already long enough,
    /// previously stored moves are never touched.
    pub fn ensure_len(&mut self, len: usize, source: &mut dyn SymbolSource) {
        while self.0.len() < len {
            self.append_random(source)
        }
    }
}
