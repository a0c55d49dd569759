use crate::game::{Sequence, Symbol, SymbolSource};

/// All mutable state of one game: the target sequence and the
/// player's standing within the current round.
///
/// Created at game start, replaced wholesale on reset, never
/// reused across games.
#[derive(Debug)]
pub struct GameSession {
    sequence: Sequence,
    /// Number of sequence moves making up the current round's
    /// target prefix.
    expected_len: usize,
    /// Correctly matched moves so far in the current round.
    progress: usize,
    /// Presses only count while this gate is open.
    accepting_input: bool,
}

impl GameSession {
    /// Fresh game: one move in the sequence, a round of length
    /// one, input gate closed until the first playback is over.
    pub fn new(source: &mut dyn SymbolSource) -> Self {
        let mut sequence = Sequence::new();
        sequence.ensure_len(1, source);

        GameSession {
            sequence,
            expected_len: 1,
            progress: 0,
            accepting_input: false,
        }
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn expected_len(&self) -> usize {
        self.expected_len
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn accepting_input(&self) -> bool {
        self.accepting_input
    }

    /// The move the player has to press next.
    pub fn expected_symbol(&self) -> Symbol {
        self.sequence.symbols()[self.progress]
    }

    pub fn symbol_at(&self, index: usize) -> Symbol {
        self.sequence.symbols()[index]
    }

    /// Grows the sequence until it covers the current round.
    pub fn ensure_covered(&mut self, source: &mut dyn SymbolSource) {
        let expected_len = self.expected_len;
        self.sequence.ensure_len(expected_len, source);
        self.assert_invariants();
    }

    /// `true` if one more correct press completes the round.
    pub fn at_last_symbol(&self) -> bool {
        self.progress + 1 == self.expected_len
    }

    pub fn open_gate(&mut self) {
        self.accepting_input = true
    }

    pub fn close_gate(&mut self) {
        self.accepting_input = false
    }

    pub fn advance(&mut self) {
        self.progress += 1;
        self.assert_invariants();
    }

    pub fn rewind(&mut self) {
        self.progress = 0
    }

    /// Makes the next round's target prefix one move longer.
    pub fn next_round(&mut self) {
        self.expected_len += 1;
    }

    fn assert_invariants(&self) {
        debug_assert!(self.progress <= self.expected_len);
        debug_assert!(self.expected_len <= self.sequence.len());
    }
}
