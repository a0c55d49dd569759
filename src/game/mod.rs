//! The sequence engine and the playback/input state machine,
//! the part of the game that has actual rules.

mod machine;
mod sequence;
mod session;
mod symbol;
mod timings;

pub use machine::{Machine, Outcome, Phase};
pub use sequence::{EntropySource, ScriptedSource, Sequence, SymbolSource};
pub use session::GameSession;
pub use symbol::{Symbol, SymbolError};
pub use timings::Timings;
