use crate::senses::{Error, Stamped};

pub trait Sense {
    /// Tries to take the next pending input from this sense.
    ///
    /// Returns `Error::WouldBlock` when nothing is pending
    /// right now. A `Fatal` error means the sense is broken
    /// and will never deliver input again.
    fn poll(&mut self) -> Result<Stamped, Error>;
}
